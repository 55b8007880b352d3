//! Domain types organized by responsibility:
//! - `book`: Book, Chapter and AudioTrack models
//! - `media`: MediaItem units handed to a playback handle
//! - `common`: Duration, SeekDelta and shared traits

mod book;
mod common;
mod media;

pub use book::{AudioTrack, Book, BookId, Chapter};
pub use common::{Duration, SeekDelta, Validator};
pub use media::MediaItem;

//! Core domain types for the bookplayer workspace.
//!
//! Everything here is plain data: books, chapters (key points), the media
//! items handed to a playback handle, and the millisecond-based time types
//! the player state is derived from. No I/O, no async.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    AudioTrack, Book, BookId, Chapter, Duration, MediaItem, SeekDelta, Validator,
};

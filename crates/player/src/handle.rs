//! The playback handle capability boundary
//!
//! The media engine (decoding, buffering, session management, audio
//! routing) lives outside this workspace. The player core only talks to
//! it through [`PlaybackHandle`], and receives its discrete change
//! notifications as [`TransportEvent`]s over a channel registered with
//! [`PlaybackHandle::subscribe`]. Continuous position updates are not
//! pushed; the controller polls for those.

use bookplayer_core::{Duration, MediaItem};
use tokio::sync::mpsc;

/// Discrete change notifications pushed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEvent {
    /// The current item in the working list changed (0-based index)
    ItemChanged(usize),
    /// Playing/paused flipped on the engine side
    PlayingChanged(bool),
}

/// A live connection to the media-rendering engine.
///
/// Transport calls are infallible at this boundary; the engine owns its
/// own error handling and reports state changes through the subscription
/// channel and the read accessors.
pub trait PlaybackHandle: Send {
    /// Starts or resumes playback
    fn play(&mut self);

    /// Pauses playback
    fn pause(&mut self);

    /// Prepares the current item list for playback
    fn prepare(&mut self);

    /// Seeks to an absolute position within the current item
    fn seek_to(&mut self, position: Duration);

    /// Advances to the next item in the working list
    fn seek_to_next_item(&mut self);

    /// Returns to the previous item in the working list
    fn seek_to_previous_item(&mut self);

    /// Current position within the current item
    fn position(&self) -> Duration;

    /// Duration of the current item; zero while unknown
    fn duration(&self) -> Duration;

    /// 0-based index of the current item
    fn current_item_index(&self) -> usize;

    /// True while the engine is actively playing
    fn is_playing(&self) -> bool;

    /// Number of items in the working list
    fn item_count(&self) -> usize;

    /// Replaces the working item list
    fn set_items(&mut self, items: Vec<MediaItem>);

    /// Registers the channel discrete transport notifications are
    /// delivered on
    fn subscribe(&mut self, sender: mpsc::UnboundedSender<TransportEvent>);

    /// Releases the engine-side resources behind this handle
    fn release(&mut self);
}

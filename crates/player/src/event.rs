//! User-facing player events

use crate::state::ContentTab;
use bookplayer_core::SeekDelta;
use serde::{Deserialize, Serialize};

/// Events emitted by the player screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Toggle between playing and paused
    PlayPauseToggled,
    /// Seek relative to the current position; dropped when the target
    /// falls outside [0, duration]
    SeekBy(SeekDelta),
    /// Advance to the next chapter, if any
    NextChapter,
    /// Return to the previous chapter, if any
    PreviousChapter,
    /// Switch the content pane
    TabChanged(ContentTab),
    /// Change playback speed. Not implemented yet; accepted and dropped.
    SpeedChanged(f32),
}

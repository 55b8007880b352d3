//! Player screen state shapes
//!
//! Every type here has value semantics: the model rebuilds the whole
//! [`PlayerUiState`] on each transition and publishes the new snapshot, so
//! observers never see a half-updated state.

use bookplayer_core::Duration;
use serde::{Deserialize, Serialize};

/// Which content pane the player screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContentTab {
    #[default]
    Audio,
    Text,
}

impl ContentTab {
    /// Returns the tab's 0-based index (audio = 0, text = 1)
    pub fn index(self) -> usize {
        match self {
            ContentTab::Audio => 0,
            ContentTab::Text => 1,
        }
    }

    /// Maps an index back to a tab
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ContentTab::Audio),
            1 => Some(ContentTab::Text),
            _ => None,
        }
    }
}

/// Transport readout projected for display, derived each poll from the
/// playback handle's raw position and duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaStatus {
    /// Current position, "MM:SS"
    pub position_text: String,
    /// Total duration, "MM:SS"
    pub duration_text: String,
    /// Normalized progress in [0, 1]; 0 when duration is 0
    pub progress: f32,
    /// 0-based index of the current item in the handle's working list
    pub media_index: usize,
    pub is_playing: bool,
}

impl MediaStatus {
    /// Derives a status snapshot from raw transport values
    pub fn snapshot(
        position: Duration,
        duration: Duration,
        media_index: usize,
        is_playing: bool,
    ) -> Self {
        let progress = if duration.is_zero() {
            0.0
        } else {
            (position.as_millis() as f32 / duration.as_millis() as f32).clamp(0.0, 1.0)
        };

        Self {
            position_text: position.as_mmss(),
            duration_text: duration.as_mmss(),
            progress,
            media_index,
            is_playing,
        }
    }
}

impl Default for MediaStatus {
    fn default() -> Self {
        Self {
            position_text: "00:00".to_string(),
            duration_text: "00:00".to_string(),
            progress: 0.0,
            media_index: 0,
            is_playing: false,
        }
    }
}

/// Chapter-progress projection for the summary panel.
///
/// `key_point` is the 1-based display number; internal bookkeeping is
/// 0-based and converts only when building this projection. `key_point`
/// is 0 only in the empty initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Summary {
    pub key_points_total: usize,
    pub key_point: usize,
    pub key_point_title: String,
    pub key_point_text: String,
}

impl Summary {
    /// True when a later chapter exists
    pub fn has_next(&self) -> bool {
        self.key_point < self.key_points_total
    }

    /// True when an earlier chapter exists
    pub fn has_prev(&self) -> bool {
        self.key_point > 1
    }
}

/// The full player screen state, replaced wholesale on every transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerUiState {
    pub description: String,
    pub cover_url: String,
    pub media: MediaStatus,
    pub summary: Summary,
    pub content_tab: ContentTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_tab_index_roundtrip() {
        assert_eq!(ContentTab::Audio.index(), 0);
        assert_eq!(ContentTab::Text.index(), 1);
        assert_eq!(ContentTab::from_index(0), Some(ContentTab::Audio));
        assert_eq!(ContentTab::from_index(1), Some(ContentTab::Text));
        assert_eq!(ContentTab::from_index(2), None);
    }

    #[test]
    fn test_media_status_snapshot() {
        let status = MediaStatus::snapshot(
            Duration::from_seconds(30),
            Duration::from_seconds(120),
            2,
            true,
        );

        assert_eq!(status.position_text, "00:30");
        assert_eq!(status.duration_text, "02:00");
        assert_eq!(status.progress, 0.25);
        assert_eq!(status.media_index, 2);
        assert!(status.is_playing);
    }

    #[test]
    fn test_media_status_zero_duration_guards_division() {
        let status = MediaStatus::snapshot(Duration::from_seconds(10), Duration::ZERO, 0, false);
        assert_eq!(status.progress, 0.0);
    }

    #[test]
    fn test_media_status_progress_clamped() {
        // Position past the reported duration must not exceed 1.0
        let status = MediaStatus::snapshot(
            Duration::from_seconds(130),
            Duration::from_seconds(120),
            0,
            false,
        );
        assert_eq!(status.progress, 1.0);
    }

    #[test]
    fn test_media_status_default() {
        let status = MediaStatus::default();
        assert_eq!(status.position_text, "00:00");
        assert_eq!(status.duration_text, "00:00");
        assert_eq!(status.progress, 0.0);
        assert!(!status.is_playing);
    }

    #[test]
    fn test_summary_navigation_flags() {
        let mut summary = Summary {
            key_points_total: 5,
            key_point: 1,
            ..Summary::default()
        };
        assert!(summary.has_next());
        assert!(!summary.has_prev());

        summary.key_point = 3;
        assert!(summary.has_next());
        assert!(summary.has_prev());

        summary.key_point = 5;
        assert!(!summary.has_next());
        assert!(summary.has_prev());
    }

    #[test]
    fn test_empty_summary_has_no_navigation() {
        let summary = Summary::default();
        assert!(!summary.has_next());
        assert!(!summary.has_prev());
    }

    #[test]
    fn test_player_ui_state_default_is_empty() {
        let state = PlayerUiState::default();
        assert!(state.description.is_empty());
        assert!(state.cover_url.is_empty());
        assert_eq!(state.content_tab, ContentTab::Audio);
        assert_eq!(state.summary.key_point, 0);
    }
}

//! The player view-state model
//!
//! [`PlayerModel`] is the single writer of [`PlayerUiState`]. Every
//! mutation path (user events, transport notifications, the position
//! poll) goes through it, and each one ends by rebuilding the full state
//! snapshot from the catalog book plus the current media status.
//!
//! The model itself is synchronous and single-threaded; the async
//! controller owns it and serializes the three mutation sources onto one
//! task.

use crate::event::PlayerEvent;
use crate::handle::{PlaybackHandle, TransportEvent};
use crate::state::{ContentTab, MediaStatus, PlayerUiState, Summary};
use bookplayer_catalog::Catalog;
use bookplayer_core::SeekDelta;
use log::{debug, warn};
use std::sync::Arc;

pub struct PlayerModel {
    catalog: Arc<Catalog>,
    book_index: usize,
    /// False until the catalog snapshot has been applied; the UI state
    /// stays at the empty default before that.
    loaded: bool,
    media: MediaStatus,
    content_tab: ContentTab,
    /// Optimistic play/pause value awaiting the engine's own
    /// PlayingChanged confirmation. While set, polls do not overwrite
    /// the flag.
    pending_playing: Option<bool>,
    handle: Option<Box<dyn PlaybackHandle>>,
    state: PlayerUiState,
}

impl PlayerModel {
    /// Creates a model over an injected catalog, pointed at one book.
    /// The state starts at the empty default until [`load_book`] runs.
    ///
    /// [`load_book`]: PlayerModel::load_book
    pub fn new(catalog: Arc<Catalog>, book_index: usize) -> Self {
        Self {
            catalog,
            book_index,
            loaded: false,
            media: MediaStatus::default(),
            content_tab: ContentTab::Audio,
            pending_playing: None,
            handle: None,
            state: PlayerUiState::default(),
        }
    }

    /// The latest published state snapshot
    pub fn state(&self) -> &PlayerUiState {
        &self.state
    }

    /// True once a playback handle is attached
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Applies the catalog snapshot. If a handle was attached before the
    /// book arrived, the working item list is pushed now.
    pub fn load_book(&mut self) {
        self.loaded = true;
        self.setup_media_content();
        self.rebuild_state();
    }

    /// Maps a user event to a state transition and/or a transport call.
    /// Transport operations are no-ops while no handle is attached.
    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::PlayPauseToggled => self.toggle_play_pause(),
            PlayerEvent::SeekBy(delta) => self.seek_by(delta),
            PlayerEvent::NextChapter => self.next_chapter(),
            PlayerEvent::PreviousChapter => self.previous_chapter(),
            PlayerEvent::TabChanged(tab) => self.change_tab(tab),
            PlayerEvent::SpeedChanged(speed) => {
                warn!("playback speed change to {speed}x is not implemented; event dropped");
            }
        }
    }

    /// Attaches the playback handle. An empty handle gets the book's
    /// full item list; a handle that already has items loaded only
    /// resynchronizes the current index.
    pub fn attach_handle(&mut self, handle: Box<dyn PlaybackHandle>) {
        self.handle = Some(handle);
        self.setup_media_content();
        self.rebuild_state();
    }

    /// Releases the handle's resources and detaches it. No-op when no
    /// handle is attached.
    pub fn release_handle(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
        self.pending_playing = None;
    }

    /// Pulls {position, duration, playing, item index} from the handle
    /// and republishes the media status. Runs on the 1-second poll tick.
    pub fn poll(&mut self) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };

        let is_playing = match self.pending_playing {
            Some(pending) => pending,
            None => handle.is_playing(),
        };
        self.media = MediaStatus::snapshot(
            handle.position(),
            handle.duration(),
            handle.current_item_index(),
            is_playing,
        );
        self.rebuild_state();
    }

    /// Applies a discrete notification pushed by the engine
    pub fn on_transport_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::ItemChanged(index) => {
                self.media.media_index = index;
            }
            TransportEvent::PlayingChanged(playing) => {
                // The engine's own signal wins over the optimistic flip.
                self.pending_playing = None;
                self.media.is_playing = playing;
            }
        }
        self.rebuild_state();
    }

    fn toggle_play_pause(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            debug!("play/pause dropped: no playback handle attached");
            return;
        };

        let target = !self.media.is_playing;
        if target {
            handle.prepare();
            handle.play();
        } else {
            handle.pause();
        }

        self.pending_playing = Some(target);
        self.media.is_playing = target;
        self.rebuild_state();
    }

    fn seek_by(&mut self, delta: SeekDelta) {
        let Some(handle) = self.handle.as_mut() else {
            debug!("seek dropped: no playback handle attached");
            return;
        };

        let position = handle.position();
        let duration = handle.duration();
        match delta.apply(position) {
            Some(candidate) if candidate <= duration => handle.seek_to(candidate),
            _ => debug!(
                "seek by {}ms from {}ms dropped: target outside [0, {}ms]",
                delta.as_millis(),
                position.as_millis(),
                duration.as_millis()
            ),
        }
    }

    fn next_chapter(&mut self) {
        if !self.state.summary.has_next() {
            debug!("next chapter dropped: already at the last key point");
            return;
        }
        let Some(handle) = self.handle.as_mut() else {
            debug!("next chapter dropped: no playback handle attached");
            return;
        };

        handle.seek_to_next_item();
        self.media.media_index += 1;
        self.rebuild_state();
    }

    fn previous_chapter(&mut self) {
        if !self.state.summary.has_prev() {
            debug!("previous chapter dropped: already at the first key point");
            return;
        }
        let Some(handle) = self.handle.as_mut() else {
            debug!("previous chapter dropped: no playback handle attached");
            return;
        };

        handle.seek_to_previous_item();
        self.media.media_index -= 1;
        self.rebuild_state();
    }

    fn change_tab(&mut self, tab: ContentTab) {
        self.content_tab = tab;
        self.rebuild_state();
    }

    /// Pushes the working item list into an empty handle, or resyncs the
    /// local index from a handle that already has items. Requires both
    /// the catalog snapshot and a handle; callers invoke this from
    /// whichever side arrives second.
    fn setup_media_content(&mut self) {
        if !self.loaded {
            return;
        }
        let Some(book) = self.catalog.book(self.book_index) else {
            return;
        };
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        if handle.item_count() == 0 {
            handle.set_items(book.media_items());
            handle.prepare();
        } else {
            self.media.media_index = handle.current_item_index();
        }
    }

    /// Rebuilds the full UI state from (book, media status, tab). The
    /// empty default is published whenever the book or the current
    /// chapter cannot be resolved.
    fn rebuild_state(&mut self) {
        if !self.loaded {
            self.state = PlayerUiState::default();
            return;
        }

        let book = self.catalog.book(self.book_index);
        let chapter = book.and_then(|b| b.chapter(self.media.media_index));

        self.state = match (book, chapter) {
            (Some(book), Some(chapter)) => PlayerUiState {
                description: book.description.clone(),
                cover_url: book.cover_url.clone(),
                media: self.media.clone(),
                summary: Summary {
                    key_points_total: book.chapter_count(),
                    key_point: self.media.media_index + 1,
                    key_point_title: chapter.title.clone(),
                    key_point_text: chapter.transcript.clone(),
                },
                content_tab: self.content_tab,
            },
            _ => PlayerUiState::default(),
        };
    }
}

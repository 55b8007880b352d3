#![allow(dead_code)]
//! Shared test double for the playback handle boundary.
//!
//! `MockHandle` records every transport call and exposes its state
//! through a shared `MockTransport`, so tests can both script the engine
//! side (position, duration, loaded items) and assert on what the player
//! asked it to do.

use bookplayer_core::{Duration, MediaItem};
use bookplayer_player::{PlaybackHandle, TransportEvent};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Scriptable engine-side state plus recorded calls
#[derive(Debug, Default)]
pub struct MockTransport {
    pub items: Vec<MediaItem>,
    pub position: Duration,
    pub duration: Duration,
    pub current_index: usize,
    pub playing: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub prepare_calls: usize,
    pub set_items_calls: usize,
    pub next_calls: usize,
    pub prev_calls: usize,
    pub seeks: Vec<Duration>,
    pub released: bool,
    pub subscriber: Option<mpsc::UnboundedSender<TransportEvent>>,
}

impl MockTransport {
    /// Pushes a notification the way a real engine would
    pub fn emit(&self, event: TransportEvent) {
        self.subscriber
            .as_ref()
            .expect("no subscriber registered")
            .send(event)
            .expect("transport channel closed");
    }
}

/// A playback handle whose engine is a shared in-memory record
pub struct MockHandle {
    inner: Arc<Mutex<MockTransport>>,
}

impl MockHandle {
    /// Creates an empty handle reporting the given item duration
    pub fn new(duration: Duration) -> (Self, Arc<Mutex<MockTransport>>) {
        Self::with_transport(MockTransport {
            duration,
            ..MockTransport::default()
        })
    }

    /// Creates a handle over a fully scripted transport state
    pub fn with_transport(transport: MockTransport) -> (Self, Arc<Mutex<MockTransport>>) {
        let inner = Arc::new(Mutex::new(transport));
        (Self { inner: inner.clone() }, inner)
    }
}

impl PlaybackHandle for MockHandle {
    fn play(&mut self) {
        self.inner.lock().unwrap().play_calls += 1;
    }

    fn pause(&mut self) {
        self.inner.lock().unwrap().pause_calls += 1;
    }

    fn prepare(&mut self) {
        self.inner.lock().unwrap().prepare_calls += 1;
    }

    fn seek_to(&mut self, position: Duration) {
        let mut inner = self.inner.lock().unwrap();
        inner.seeks.push(position);
        inner.position = position;
    }

    fn seek_to_next_item(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_calls += 1;
        inner.current_index += 1;
    }

    fn seek_to_previous_item(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.prev_calls += 1;
        inner.current_index = inner.current_index.saturating_sub(1);
    }

    fn position(&self) -> Duration {
        self.inner.lock().unwrap().position
    }

    fn duration(&self) -> Duration {
        self.inner.lock().unwrap().duration
    }

    fn current_item_index(&self) -> usize {
        self.inner.lock().unwrap().current_index
    }

    fn is_playing(&self) -> bool {
        self.inner.lock().unwrap().playing
    }

    fn item_count(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    fn set_items(&mut self, items: Vec<MediaItem>) {
        let mut inner = self.inner.lock().unwrap();
        inner.set_items_calls += 1;
        inner.items = items;
    }

    fn subscribe(&mut self, sender: mpsc::UnboundedSender<TransportEvent>) {
        self.inner.lock().unwrap().subscriber = Some(sender);
    }

    fn release(&mut self) {
        self.inner.lock().unwrap().released = true;
    }
}

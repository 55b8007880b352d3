//! Async ownership shell for the player model
//!
//! The controller runs [`PlayerModel`] on a dedicated tokio task. One
//! `select!` loop is the only place the model is touched, which serializes
//! the three mutation sources: user commands, transport notifications
//! pushed by the engine, and the 1-second position poll. After every
//! transition the fresh state snapshot is published through a `watch`
//! channel.
//!
//! Teardown is deterministic: a shutdown command (or dropping the command
//! sender) ends the loop, releasing any attached handle, so the poll tick
//! can never fire against a released handle.

use crate::event::PlayerEvent;
use crate::handle::{PlaybackHandle, TransportEvent};
use crate::model::PlayerModel;
use crate::state::PlayerUiState;
use bookplayer_catalog::Catalog;
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Period of the position poll keeping the progress display live between
/// the engine's discrete notifications
const POLL_PERIOD: Duration = Duration::from_secs(1);

/// Commands accepted by the controller task
pub enum PlayerCommand {
    /// A user event from the player screen
    Event(PlayerEvent),
    /// Attach the playback handle; the controller subscribes it to the
    /// transport notification channel first
    AttachHandle(Box<dyn PlaybackHandle>),
    /// Release and detach the playback handle
    ReleaseHandle,
    /// Stop the controller task
    Shutdown,
}

/// Handle to a running player task: a command sender plus the observable
/// state channel
pub struct PlayerController {
    commands: mpsc::UnboundedSender<PlayerCommand>,
    state: watch::Receiver<PlayerUiState>,
    task: JoinHandle<()>,
}

impl PlayerController {
    /// Spawns a controller over the given catalog and book, applying the
    /// catalog snapshot immediately
    pub fn spawn(catalog: Arc<Catalog>, book_index: usize) -> Self {
        Self::spawn_with_load_delay(catalog, book_index, Duration::ZERO)
    }

    /// Spawns a controller that waits `load_delay` before applying the
    /// catalog snapshot (the UI state stays at the empty default until
    /// then). Commands sent during the delay are processed normally;
    /// an early-attached handle gets its item list once the book loads.
    pub fn spawn_with_load_delay(
        catalog: Arc<Catalog>,
        book_index: usize,
        load_delay: Duration,
    ) -> Self {
        let model = PlayerModel::new(catalog, book_index);
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(model.state().clone());
        let task = tokio::spawn(run(model, command_rx, state_tx, load_delay));

        Self {
            commands,
            state,
            task,
        }
    }

    /// Returns an observer for the published state snapshots
    pub fn state(&self) -> watch::Receiver<PlayerUiState> {
        self.state.clone()
    }

    /// Submits a user event. Events are applied in submission order.
    pub fn send(&self, event: PlayerEvent) {
        self.command(PlayerCommand::Event(event));
    }

    /// Attaches a playback handle
    pub fn attach_handle(&self, handle: Box<dyn PlaybackHandle>) {
        self.command(PlayerCommand::AttachHandle(handle));
    }

    /// Releases the attached playback handle, if any
    pub fn release_handle(&self) {
        self.command(PlayerCommand::ReleaseHandle);
    }

    /// Stops the controller task and waits for it to finish. Any
    /// attached handle is released before the task exits.
    pub async fn shutdown(self) {
        self.command(PlayerCommand::Shutdown);
        let _ = self.task.await;
    }

    fn command(&self, command: PlayerCommand) {
        if self.commands.send(command).is_err() {
            debug!("player command dropped: controller task already stopped");
        }
    }
}

async fn run(
    mut model: PlayerModel,
    mut commands: mpsc::UnboundedReceiver<PlayerCommand>,
    state_tx: watch::Sender<PlayerUiState>,
    load_delay: Duration,
) {
    // Transport notifications from whichever handle is attached. The
    // loop keeps one sender clone alive so recv() never returns None.
    let (transport_tx, mut transport_rx) = mpsc::unbounded_channel::<TransportEvent>();

    let load = tokio::time::sleep(load_delay);
    tokio::pin!(load);
    let mut loaded = false;

    let mut poll = tokio::time::interval(POLL_PERIOD);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = &mut load, if !loaded => {
                loaded = true;
                model.load_book();
            }
            command = commands.recv() => {
                match command {
                    Some(PlayerCommand::Event(event)) => model.handle_event(event),
                    Some(PlayerCommand::AttachHandle(mut handle)) => {
                        handle.subscribe(transport_tx.clone());
                        model.attach_handle(handle);
                    }
                    Some(PlayerCommand::ReleaseHandle) => model.release_handle(),
                    Some(PlayerCommand::Shutdown) | None => break,
                }
            }
            Some(event) = transport_rx.recv() => {
                model.on_transport_event(event);
            }
            _ = poll.tick() => {
                model.poll();
            }
        }

        state_tx.send_replace(model.state().clone());
    }

    model.release_handle();
    debug!("player controller task stopped");
}

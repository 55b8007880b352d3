//! Player view-state core.
//!
//! The single writer of the player screen's UI state lives here:
//! [`PlayerModel`] maps user events to state transitions and calls into an
//! attached [`PlaybackHandle`], and [`PlayerController`] runs the model on
//! a tokio task, funneling user events, transport notifications and a
//! 1-second position poll through one loop so every transition sees the
//! latest state.
//!
//! The rendering layer and the media engine are external collaborators:
//! renderers observe the published [`PlayerUiState`] snapshots and send
//! events back; the engine sits behind the [`PlaybackHandle`] trait.

pub mod controller;
pub mod event;
pub mod handle;
pub mod home;
pub mod model;
pub mod state;

pub use controller::{PlayerCommand, PlayerController};
pub use event::PlayerEvent;
pub use handle::{PlaybackHandle, TransportEvent};
pub use home::{HomeModel, HomeState};
pub use model::PlayerModel;
pub use state::{ContentTab, MediaStatus, PlayerUiState, Summary};

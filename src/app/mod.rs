//! Application-Layer: Controller, State, Events und Session.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod session;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use session::{MarkerCreationSession, PendingCommit};
pub use state::{AppState, PhotoState, ViewState};

//! Application-Layer: Controller, State, Events, Szene und Pointer-Routing.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod router;
pub mod scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, Pointer, View, Tastatur).
pub mod state;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use intent_mapping::{KEY_EXIT, KEY_RESET_HANDLES};
pub use router::PointerRouter;
pub use scene::Scene;
pub use state::{AppState, KeyboardState, ViewState};

//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::FrameData;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            AppCommand::RoutePointer { event } => handlers::pointer::route(state, event),
            AppCommand::RefreshPointer { screen_pos } => {
                handlers::pointer::refresh(state, screen_pos)
            }
            AppCommand::TickHandles => handlers::pointer::tick(state),

            // === Viewport & Tastatur ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetKeyState { key, pressed } => {
                handlers::keyboard::set_key_state(state, &key, pressed)
            }

            // === Szene & Anwendungssteuerung ===
            AppCommand::ResetHandles => handlers::scene::reset_handles(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Frame-Daten für den aktuellen Zustand.
    pub fn build_frame(&self, state: &AppState) -> FrameData {
        state.scene.frame(state.router.snapshot())
    }
}

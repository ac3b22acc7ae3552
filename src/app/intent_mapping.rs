//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::RawPointerEvent;

/// Taste zum Zurücksetzen der Handles.
pub const KEY_RESET_HANDLES: &str = "R";
/// Taste zum Beenden.
pub const KEY_EXIT: &str = "Escape";

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            screen_pos,
            buttons,
        } => vec![AppCommand::RoutePointer {
            event: RawPointerEvent::down(screen_pos, buttons),
        }],
        AppIntent::PointerReleased {
            screen_pos,
            buttons,
        } => vec![AppCommand::RoutePointer {
            event: RawPointerEvent::up(screen_pos, buttons),
        }],
        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::RoutePointer {
            event: RawPointerEvent::moved(screen_pos),
        }],
        AppIntent::FrameStarted { hover_pos } => {
            let mut commands = Vec::with_capacity(2);
            if let Some(screen_pos) = hover_pos {
                commands.push(AppCommand::RefreshPointer { screen_pos });
            }
            commands.push(AppCommand::TickHandles);
            commands
        }
        AppIntent::ViewportResized { size } => {
            if state.view.viewport_size == size {
                Vec::new()
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
        AppIntent::KeyChanged { key, pressed } => {
            let mut commands = Vec::with_capacity(2);
            // Tastenwiederholung ändert nichts am Zustand
            let is_new_press = pressed && !state.keyboard.is_pressed(&key);
            if is_new_press && key == KEY_RESET_HANDLES {
                commands.push(AppCommand::ResetHandles);
            }
            if is_new_press && key == KEY_EXIT {
                commands.push(AppCommand::RequestExit);
            }
            commands.insert(0, AppCommand::SetKeyState { key, pressed });
            commands
        }
        AppIntent::ResetHandlesRequested => vec![AppCommand::ResetHandles],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;

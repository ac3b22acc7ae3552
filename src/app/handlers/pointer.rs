//! Handler für Pointer-Ereignisse und das Frame-Update der Handles.

use crate::app::AppState;
use crate::core::{PointerEventKind, RawPointerEvent};
use glam::Vec2;

/// Schreibt ein Rohereignis in den Snapshot und stellt es synchron zu.
pub fn route(state: &mut AppState, event: RawPointerEvent) {
    let started = state
        .router
        .route(&event, &state.view.camera, state.scene.handles_mut());
    if event.kind == PointerEventKind::Down && started > 1 {
        log::debug!("{} Handles ziehen gleichzeitig", started);
    }
}

/// Überschreibt den Snapshot einmal pro Frame.
pub fn refresh(state: &mut AppState, screen_pos: Vec2) {
    state.router.refresh(screen_pos, &state.view.camera);
}

/// Aktualisiert den Hover-Status aller Handles.
pub fn tick(state: &mut AppState) {
    let pointer = *state.router.snapshot();
    state.scene.tick(&pointer);
}

//! Handler für den Viewport.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
///
/// Die Handles bleiben an ihrer Position, es gibt kein Neu-Layout.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

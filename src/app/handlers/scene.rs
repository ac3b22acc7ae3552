//! Handler für Szenen-Operationen.

use crate::app::AppState;

/// Setzt alle Handles auf ihr Start-Layout zurück.
pub fn reset_handles(state: &mut AppState) {
    state.scene.reset();
}

//! Handler für den Tastaturzustand.

use crate::app::AppState;

/// Überschreibt den Zustand einer Taste.
pub fn set_key_state(state: &mut AppState, key: &str, pressed: bool) {
    state.keyboard.set(key, pressed);
}

//! Tastatur-Ereignisse → `AppIntent`.
//!
//! Jede Taste wird über ihren egui-Namen gemeldet; die Belegung (R, Escape)
//! löst erst das Intent-Mapping auf.

use crate::app::AppIntent;

/// Übersetzt ein egui-Tastenereignis. Wiederholungen werden verworfen.
pub(super) fn key_intent(event: &egui::Event) -> Option<AppIntent> {
    match event {
        egui::Event::Key {
            key,
            pressed,
            repeat: false,
            ..
        } => Some(AppIntent::KeyChanged {
            key: key.name().to_string(),
            pressed: *pressed,
        }),
        _ => None,
    }
}

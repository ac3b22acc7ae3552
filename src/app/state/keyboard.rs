use indexmap::IndexSet;

/// Aktuell gedrückte Tasten in der Reihenfolge des Drückens.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: IndexSet<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Überschreibt den Zustand einer Taste.
    pub fn set(&mut self, key: &str, pressed: bool) {
        if pressed {
            self.pressed.insert(key.to_owned());
        } else {
            self.pressed.shift_remove(key);
        }
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Gedrückte Tasten in Drück-Reihenfolge.
    pub fn pressed(&self) -> impl Iterator<Item = &str> {
        self.pressed.iter().map(String::as_str)
    }
}

use crate::app::{CommandLog, PointerRouter, Scene};
use crate::shared::EditorOptions;

use super::{KeyboardState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Handles und Kurven-Konfiguration
    pub scene: Scene,
    /// Pointer-Snapshot und Abo-Registry
    pub router: PointerRouter,
    /// View-State
    pub view: ViewState,
    /// Gedrückte Tasten
    pub keyboard: KeyboardState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Kurve)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Layout
    pub fn new() -> Self {
        let options = EditorOptions::default();
        let scene = Scene::default();
        let mut router = PointerRouter::new(options.drag_policy);
        scene.subscribe_handles(&mut router);

        Self::assemble(options, scene, router)
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    ///
    /// Schlägt fehl, wenn Layout oder Kurven-Konfiguration ungültig sind.
    pub fn from_options(options: EditorOptions) -> anyhow::Result<Self> {
        let scene = Scene::from_options(&options)?;
        let mut router = PointerRouter::new(options.drag_policy);
        scene.subscribe_handles(&mut router);

        Ok(Self::assemble(options, scene, router))
    }

    fn assemble(options: EditorOptions, scene: Scene, router: PointerRouter) -> Self {
        Self {
            scene,
            router,
            view: ViewState {
                viewport_size: options.window_size,
                ..ViewState::new()
            },
            keyboard: KeyboardState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der gerade gezogenen Handles zurück (für UI-Anzeige)
    pub fn dragging_count(&self) -> usize {
        self.scene.dragging_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Pointer-Taste gedrückt (Bildschirm-Koordinaten, Tasten-Bitmaske nach dem Drücken)
    PointerPressed { screen_pos: Vec2, buttons: u8 },
    /// Pointer-Taste losgelassen (Tasten-Bitmaske nach dem Loslassen)
    PointerReleased { screen_pos: Vec2, buttons: u8 },
    /// Zeiger bewegt
    PointerMoved { screen_pos: Vec2 },
    /// Neuer Frame beginnt; `hover_pos` ist die letzte bekannte Zeigerposition
    FrameStarted { hover_pos: Option<Vec2> },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Taste gedrückt oder losgelassen (egui-Tastenname, z.B. "R", "Escape")
    KeyChanged { key: String, pressed: bool },
    /// Handles auf Start-Layout zurücksetzen
    ResetHandlesRequested,
    /// Anwendung beenden
    ExitRequested,
}

use crate::core::RawPointerEvent;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Rohes Pointer-Ereignis in den Snapshot schreiben und an die Handles zustellen
    RoutePointer { event: RawPointerEvent },
    /// Snapshot einmal pro Frame überschreiben, ohne Zustellung
    RefreshPointer { screen_pos: Vec2 },
    /// Frame-Update aller Handles (Hover-Status)
    TickHandles,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Tastenzustand überschreiben
    SetKeyState { key: String, pressed: bool },
    /// Handles auf Start-Layout zurücksetzen
    ResetHandles,
    /// Anwendung beenden
    RequestExit,
}

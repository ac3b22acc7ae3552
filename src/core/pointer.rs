//! Pointer-Zustand: Rohereignisse und der zuletzt bekannte Snapshot.

use super::geometry::Point;

/// Art eines Pointer-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Taste gedrückt
    Down,
    /// Taste losgelassen
    Up,
    /// Zeiger bewegt
    Move,
}

/// Gedrückte Pointer-Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons {
    pub primary: bool,
    pub middle: bool,
    pub secondary: bool,
}

impl PointerButtons {
    /// Bit für die Primärtaste.
    pub const PRIMARY: u8 = 1;
    /// Bit für die Sekundärtaste.
    pub const SECONDARY: u8 = 2;
    /// Bit für die Mitteltaste.
    pub const MIDDLE: u8 = 4;

    /// Dekodiert eine Tasten-Bitmaske (1 = primär, 2 = sekundär, 4 = mittel).
    pub fn from_bits(bits: u8) -> Self {
        Self {
            primary: bits & Self::PRIMARY != 0,
            middle: bits & Self::MIDDLE != 0,
            secondary: bits & Self::SECONDARY != 0,
        }
    }

    /// Ist irgendeine Taste gedrückt?
    pub fn any(&self) -> bool {
        self.primary || self.middle || self.secondary
    }
}

/// Rohes Pointer-Ereignis vom Host (Bildschirm-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPointerEvent {
    pub kind: PointerEventKind,
    /// Position in Bildschirm-Koordinaten (relativ zur Zeichenfläche)
    pub position: Point,
    /// Tasten-Bitmaske zum Zeitpunkt des Ereignisses
    pub buttons: u8,
}

impl RawPointerEvent {
    pub fn down(position: Point, buttons: u8) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position,
            buttons,
        }
    }

    pub fn up(position: Point, buttons: u8) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position,
            buttons,
        }
    }

    pub fn moved(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
            buttons: 0,
        }
    }
}

/// Zuletzt bekannter Pointer-Zustand in Szenen-Koordinaten.
///
/// Wird bei jedem Ereignis und einmal pro Frame vollständig überschrieben.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSnapshot {
    pub position: Point,
    pub previous_position: Point,
    pub buttons: PointerButtons,
}

impl PointerSnapshot {
    /// Snapshot an einer Position ohne gedrückte Tasten.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            previous_position: position,
            buttons: PointerButtons::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_decode_dom_bitmask() {
        let b = PointerButtons::from_bits(1);
        assert!(b.primary && !b.middle && !b.secondary);
        let b = PointerButtons::from_bits(2);
        assert!(!b.primary && !b.middle && b.secondary);
        let b = PointerButtons::from_bits(4);
        assert!(!b.primary && b.middle && !b.secondary);
        let b = PointerButtons::from_bits(7);
        assert!(b.primary && b.middle && b.secondary);
        assert!(!PointerButtons::from_bits(0).any());
    }
}

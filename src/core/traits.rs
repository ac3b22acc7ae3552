//! Fähigkeits-Traits für Szenenobjekte und die Renderer-Schnittstelle.
//!
//! Statt einer Vererbungskette (zeichenbar → verschiebbar → Handle) setzen
//! Szenenobjekte kleine Traits zusammen.

use super::geometry::{HitBox, Point};
use super::pointer::{PointerEventKind, PointerSnapshot};

/// Objekt mit einer Position in der Szene.
pub trait Positioned {
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);
}

/// Objekt mit Trefferprüfung.
pub trait HitTestable {
    /// Achsenparallele Hitbox des Objekts.
    fn hit_box(&self) -> HitBox;

    /// Punkt-in-Box-Test (Rand exklusiv).
    fn contains_point(&self, p: Point) -> bool {
        self.hit_box().contains(p)
    }

    /// Kreis-Test: euklidischer Abstand zum Mittelpunkt <= Radius.
    fn intersects_radius(&self, p: Point) -> bool;
}

/// Darstellungsdaten eines Handles für den Renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleVisual {
    pub position: Point,
    /// Zeichenradius
    pub radius: f32,
    /// Hervorgehoben (Hover oder Drag)
    pub emphasized: bool,
}

/// Objekt, das Darstellungsdaten liefern kann.
pub trait Renderable {
    fn visual(&self) -> HandleVisual;
}

/// Objekt mit Aktualisierung pro Frame.
pub trait Tickable {
    fn tick(&mut self, pointer: &PointerSnapshot);
}

/// Externer Renderer: zeichnet Polylinie und Handles.
pub trait ScenePainter {
    /// Zeichnet die Kurve als offenen Pfad.
    fn stroke_polyline(&mut self, points: &[Point]);

    /// Zeichnet einen Handle.
    fn draw_handle(&mut self, handle: &HandleVisual);
}

/// Eine einzelne Zustellung eines Pointer-Ereignisses an einen Beobachter.
#[derive(Debug, Clone, Copy)]
pub struct PointerDispatch<'a> {
    pub kind: PointerEventKind,
    pub pointer: &'a PointerSnapshot,
    /// `false`, wenn ein früherer Beobachter den Drag bereits übernommen hat
    pub drag_start_allowed: bool,
}

/// Empfänger von Pointer-Ereignissen.
pub trait PointerObserver {
    /// Verarbeitet das Ereignis. Gibt `true` zurück, wenn dadurch ein Drag begann.
    fn on_pointer(&mut self, dispatch: &PointerDispatch<'_>) -> bool;
}

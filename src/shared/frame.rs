//! Frame-Daten als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{HandleVisual, Point};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameData {
    /// Abgetastete Kurve als offener Pfad (leer, wenn keine Kurve entsteht)
    pub polyline: Vec<Point>,
    /// Alle Handles in Steuerpunkt-Reihenfolge
    pub handles: Vec<HandleVisual>,
    /// Zeigerposition zum Zeitpunkt des Frames (Szenen-Koordinaten)
    pub pointer: Point,
}

impl FrameData {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        self.polyline.len() >= 2
    }

    /// Anzahl hervorgehobener Handles (Hover oder Drag).
    pub fn emphasized_count(&self) -> usize {
        self.handles.iter().filter(|h| h.emphasized).count()
    }
}

//! Geometrie-Grundtypen: Punkt, Interpolation und Hitbox.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D-Punkt in Szenen-Koordinaten.
///
/// Reiner Werttyp, Gleichheit ist strukturell. Addition, Subtraktion und
/// Skalierung kommen von `glam::Vec2`.
pub type Point = Vec2;

/// Lineare Interpolation zwischen `a` und `b`, getrennt pro Achse.
///
/// Entspricht `a + (b - a) * alpha`, liefert aber bei `alpha = 0` exakt `a`
/// und bei `alpha = 1` exakt `b`. `alpha` wird nicht geklemmt.
pub fn lerp(a: Point, b: Point, alpha: f32) -> Point {
    a * (1.0 - alpha) + b * alpha
}

/// Achsenparallele Hitbox `{x, y, width, height}`.
///
/// Dient gleichzeitig als Konfigurations-Datensatz für die Start-Handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitBox {
    /// Erstellt eine Hitbox aus Ursprung und Größe.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Ursprung der Box.
    pub fn origin(&self) -> Point {
        Vec2::new(self.x, self.y)
    }

    /// Größe der Box.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Verschiebt die Box um `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Punkt-in-Rechteck-Test mit strikten Ungleichungen (Rand gehört nicht dazu).
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
    }
}

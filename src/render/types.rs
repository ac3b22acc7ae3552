//! Rendering-Typen und Farbkonfiguration.

use crate::shared::EditorOptions;
use egui::{Color32, Stroke};

/// Aufgelöste Farben und Strichstärken für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub background: Color32,
    pub curve: Stroke,
    pub handle_fill_emphasized: Color32,
    pub handle_stroke_emphasized: Stroke,
    pub handle_fill_idle: Color32,
    pub handle_stroke_idle: Stroke,
}

impl PaintStyle {
    /// Übernimmt Farben und Breiten aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            background: to_color32(options.background_color),
            curve: Stroke::new(options.curve_thickness_px, to_color32(options.curve_color)),
            handle_fill_emphasized: to_color32(options.handle_fill_emphasized),
            handle_stroke_emphasized: Stroke::new(
                options.handle_stroke_px,
                to_color32(options.handle_stroke_emphasized),
            ),
            handle_fill_idle: to_color32(options.handle_fill_idle),
            handle_stroke_idle: Stroke::new(
                options.handle_stroke_px,
                to_color32(options.handle_stroke_idle),
            ),
        }
    }

    /// Füllung und Rand eines Handles je nach Hervorhebung.
    pub fn handle_colors(&self, emphasized: bool) -> (Color32, Stroke) {
        if emphasized {
            (self.handle_fill_emphasized, self.handle_stroke_emphasized)
        } else {
            (self.handle_fill_idle, self.handle_stroke_idle)
        }
    }
}

/// Konvertiert RGBA-Floats (0..1) in eine egui-Farbe.
pub fn to_color32(rgba: [f32; 4]) -> Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

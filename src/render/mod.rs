//! Zeichnen der Frame-Daten mit dem egui-Painter.

mod painter;
mod types;

pub use crate::shared::FrameData;
pub use painter::EguiScenePainter;
pub use types::{to_color32, PaintStyle};

use crate::app::Scene;
use crate::core::Camera2D;

/// Füllt den Hintergrund und zeichnet Kurve und Handles in `rect`.
pub fn paint_frame(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    style: &PaintStyle,
    frame: &FrameData,
) {
    painter.rect_filled(rect, 0.0, style.background);
    let mut scene_painter = EguiScenePainter::new(painter, rect.min, *camera, style);
    Scene::draw(frame, &mut scene_painter);
}

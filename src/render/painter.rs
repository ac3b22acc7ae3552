//! `ScenePainter` auf Basis von `egui::Painter`.

use super::PaintStyle;
use crate::core::{Camera2D, HandleVisual, Point, ScenePainter};
use egui::{Painter, Pos2, Shape};

/// Zeichnet Polylinie und Handles in eine egui-Zeichenfläche.
pub struct EguiScenePainter<'a> {
    painter: &'a Painter,
    origin: Pos2,
    camera: Camera2D,
    style: &'a PaintStyle,
}

impl<'a> EguiScenePainter<'a> {
    /// `origin` ist die linke obere Ecke der Zeichenfläche in egui-Koordinaten.
    pub fn new(painter: &'a Painter, origin: Pos2, camera: Camera2D, style: &'a PaintStyle) -> Self {
        Self {
            painter,
            origin,
            camera,
            style,
        }
    }

    fn to_screen(&self, p: Point) -> Pos2 {
        scene_to_egui(self.origin, &self.camera, p)
    }
}

/// Szenen-Koordinate → egui-Bildschirmposition.
pub(crate) fn scene_to_egui(origin: Pos2, camera: &Camera2D, p: Point) -> Pos2 {
    let local = camera.scene_to_screen(p);
    Pos2::new(origin.x + local.x, origin.y + local.y)
}

impl ScenePainter for EguiScenePainter<'_> {
    fn stroke_polyline(&mut self, points: &[Point]) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(Shape::line(screen, self.style.curve));
    }

    fn draw_handle(&mut self, handle: &HandleVisual) {
        let (fill, stroke) = self.style.handle_colors(handle.emphasized);
        self.painter
            .circle(self.to_screen(handle.position), handle.radius, fill, stroke);
    }
}

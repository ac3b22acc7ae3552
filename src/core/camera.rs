//! 2D-Kamera: Umrechnung zwischen Bildschirm- und Szenen-Koordinaten.

use glam::Vec2;

/// 2D-Kamera mit reinem Versatz (kein Zoom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera2D {
    /// Versatz der Szene gegenüber dem Bildschirm
    pub offset: Vec2,
}

impl Camera2D {
    /// Erstellt eine Kamera ohne Versatz.
    pub fn new() -> Self {
        Self { offset: Vec2::ZERO }
    }

    /// Konvertiert Bildschirm-Koordinaten zu Szenen-Koordinaten.
    pub fn screen_to_scene(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos + self.offset
    }

    /// Konvertiert Szenen-Koordinaten zu Bildschirm-Koordinaten.
    pub fn scene_to_screen(&self, scene_pos: Vec2) -> Vec2 {
        scene_pos - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_camera_is_identity() {
        let camera = Camera2D::new();
        let p = Vec2::new(123.0, -45.0);
        assert_eq!(camera.screen_to_scene(p), p);
        assert_eq!(camera.scene_to_screen(p), p);
    }

    #[test]
    fn test_offset_roundtrip() {
        let camera = Camera2D {
            offset: Vec2::new(10.0, -5.0),
        };
        let scene = camera.screen_to_scene(Vec2::new(1.0, 2.0));
        assert_relative_eq!(scene.x, 11.0);
        assert_relative_eq!(scene.y, -3.0);
        assert_eq!(camera.scene_to_screen(scene), Vec2::new(1.0, 2.0));
    }
}

//! Szene: geordnete Handles plus Kurven-Konfiguration.
//!
//! Liest pro Frame die aktuellen Handle-Positionen, schneidet sie auf die
//! führenden `use_points` zu und tastet daraus die Kurve ab.

use super::PointerRouter;
use crate::core::{
    tessellate, CurveConfig, DraggableHandle, HitBox, Point, PointerSnapshot, Positioned,
    Renderable, SceneError, ScenePainter, Tickable,
};
use crate::shared::options::HANDLE_HIT_RADIUS;
use crate::shared::{EditorOptions, FrameData};

/// Besitzt die Handles in fester Steuerpunkt-Reihenfolge.
#[derive(Debug)]
pub struct Scene {
    handles: Vec<DraggableHandle>,
    initial_positions: Vec<Point>,
    config: CurveConfig,
}

impl Scene {
    /// Baut die Szene aus den Laufzeit-Optionen.
    pub fn from_options(options: &EditorOptions) -> Result<Self, SceneError> {
        let config = CurveConfig::new(options.resolution, options.use_points)?;
        let scene = Self::new(&options.initial_handles(), options.hit_radius, config)?;
        log::info!(
            "Szene aufgebaut: {} Handles, Auflösung {}, genutzte Punkte {}",
            scene.handle_count(),
            config.resolution(),
            config.use_points()
        );
        Ok(scene)
    }

    /// Baut die Szene aus Hitboxen in Szenen-Koordinaten.
    ///
    /// `config` ist bereits durch `CurveConfig::new` validiert, der
    /// Trefferradius wird hier pro Handle geprüft.
    pub fn new(layout: &[HitBox], hit_radius: f32, config: CurveConfig) -> Result<Self, SceneError> {
        if layout.is_empty() {
            return Err(SceneError::NoHandles);
        }
        let handles = layout
            .iter()
            .enumerate()
            .map(|(index, hit_box)| DraggableHandle::new(index, *hit_box, hit_radius))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::build(handles, config))
    }

    fn build(handles: Vec<DraggableHandle>, config: CurveConfig) -> Self {
        let initial_positions = handles.iter().map(Positioned::position).collect();
        Self {
            handles,
            initial_positions,
            config,
        }
    }

    /// Registriert alle Handles beim Router (Registrierungsreihenfolge = Steuerpunkt-Reihenfolge).
    pub fn subscribe_handles(&self, router: &mut PointerRouter) {
        for handle in &self.handles {
            router.subscribe_all(handle.index());
        }
    }

    pub fn config(&self) -> CurveConfig {
        self.config
    }

    pub fn handles(&self) -> &[DraggableHandle] {
        &self.handles
    }

    /// Mutabler Zugriff für den Pointer-Router.
    pub fn handles_mut(&mut self) -> &mut [DraggableHandle] {
        &mut self.handles
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Anzahl der Handles im Zustand `Dragging`.
    pub fn dragging_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_dragging()).count()
    }

    /// Positionen aller Handles in Steuerpunkt-Reihenfolge.
    pub fn control_points(&self) -> Vec<Point> {
        self.handles.iter().map(Positioned::position).collect()
    }

    /// Die führenden `min(handle_count, use_points)` Positionen.
    pub fn curve_points(&self) -> Vec<Point> {
        self.handles
            .iter()
            .take(self.config.use_points())
            .map(Positioned::position)
            .collect()
    }

    /// Frame-Update aller Handles (Hover-Status).
    pub fn tick(&mut self, pointer: &PointerSnapshot) {
        for handle in &mut self.handles {
            handle.tick(pointer);
        }
    }

    /// Setzt alle Handles auf ihre Startposition und `Idle` zurück.
    pub fn reset(&mut self) {
        for (handle, initial) in self.handles.iter_mut().zip(&self.initial_positions) {
            handle.reset_to(*initial);
        }
        log::info!("Handles auf Start-Layout zurückgesetzt");
    }

    /// Baut die Frame-Daten aus den aktuellen Handle-Positionen.
    ///
    /// Weniger als zwei führende Punkte ergeben keine Kurve.
    pub fn frame(&self, pointer: &PointerSnapshot) -> FrameData {
        let points = self.curve_points();
        let polyline = if points.len() < 2 {
            Vec::new()
        } else {
            // Konfiguration und Punktzahl sind beim Aufbau validiert
            tessellate(&points, self.config.resolution()).unwrap_or_else(|e| {
                log::error!("Kurvenabtastung fehlgeschlagen: {}", e);
                Vec::new()
            })
        };

        FrameData {
            polyline,
            handles: self.handles.iter().map(Renderable::visual).collect(),
            pointer: pointer.position,
        }
    }

    /// Zeichnet zuerst die Kurve, dann jeden Handle.
    pub fn draw(frame: &FrameData, painter: &mut dyn ScenePainter) {
        if frame.has_curve() {
            painter.stroke_polyline(&frame.polyline);
        }
        for handle in &frame.handles {
            painter.draw_handle(handle);
        }
    }
}

impl Default for Scene {
    /// Standard-Layout mit fünf Handles um die Mitte des Start-Fensters.
    fn default() -> Self {
        let handles = EditorOptions::default()
            .initial_handles()
            .into_iter()
            .enumerate()
            .map(|(index, hit_box)| DraggableHandle::with_radius(index, hit_box, HANDLE_HIT_RADIUS))
            .collect();
        Self::build(handles, CurveConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurveError, HandleVisual};
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[derive(Default)]
    struct RecordingPainter {
        calls: Vec<String>,
    }

    impl ScenePainter for RecordingPainter {
        fn stroke_polyline(&mut self, points: &[Point]) {
            self.calls.push(format!("polyline:{}", points.len()));
        }

        fn draw_handle(&mut self, handle: &HandleVisual) {
            self.calls.push(format!("handle:{}", handle.emphasized));
        }
    }

    fn line_layout() -> Vec<HitBox> {
        (0..4)
            .map(|i| HitBox::new(i as f32 * 100.0, 0.0, 10.0, 10.0))
            .collect()
    }

    fn scene(resolution: i64, use_points: i64) -> Scene {
        let config = CurveConfig::new(resolution, use_points).unwrap();
        Scene::new(&line_layout(), 10.0, config).unwrap()
    }

    #[test]
    fn empty_layout_fails_fast() {
        let config = CurveConfig::new(25, 5).unwrap();
        assert_eq!(
            Scene::new(&[], 10.0, config).unwrap_err(),
            SceneError::NoHandles
        );
    }

    #[test]
    fn non_positive_hit_radius_is_rejected() {
        let config = CurveConfig::new(25, 5).unwrap();
        assert!(matches!(
            Scene::new(&line_layout(), 0.0, config),
            Err(SceneError::InvalidHitRadius { .. })
        ));
    }

    #[test]
    fn nan_hit_radius_is_rejected() {
        let config = CurveConfig::new(25, 5).unwrap();
        assert!(matches!(
            Scene::new(&line_layout(), f32::NAN, config),
            Err(SceneError::InvalidHitRadius { .. })
        ));
    }

    #[test]
    fn resolution_below_two_never_reaches_a_scene() {
        for resolution in [-3, 0, 1] {
            let options = EditorOptions {
                resolution,
                use_points: 2,
                ..EditorOptions::default()
            };
            assert_eq!(
                Scene::from_options(&options).unwrap_err(),
                SceneError::Curve(CurveError::ResolutionTooSmall { resolution })
            );
        }
    }

    #[test]
    fn built_scenes_always_draw_a_curve_from_two_points() {
        let two_points = [
            HitBox::new(0.0, 0.0, 10.0, 10.0),
            HitBox::new(100.0, 0.0, 10.0, 10.0),
        ];
        let built = [
            Scene::default(),
            Scene::new(&two_points, 10.0, CurveConfig::new(2, 2).unwrap()).unwrap(),
        ];
        for scene in &built {
            assert!(scene.config().step_denominator() >= 2);
            assert!(scene.frame(&PointerSnapshot::default()).has_curve());
        }
    }

    #[test]
    fn invalid_curve_config_in_options_fails_fast() {
        let options = EditorOptions {
            resolution: 1,
            ..EditorOptions::default()
        };
        assert!(matches!(
            Scene::from_options(&options),
            Err(SceneError::Curve(_))
        ));
    }

    #[test]
    fn default_options_build_five_handles() {
        let scene = Scene::from_options(&EditorOptions::default()).unwrap();
        assert_eq!(scene.handle_count(), 5);
        assert_eq!(scene.control_points()[0], Vec2::new(490.0, 410.0));
        let frame = scene.frame(&PointerSnapshot::default());
        assert_eq!(frame.polyline.len(), 25);
        assert_eq!(frame.handles.len(), 5);
    }

    #[test]
    fn default_scene_matches_default_options() {
        let from_options = Scene::from_options(&EditorOptions::default()).unwrap();
        let default = Scene::default();
        assert_eq!(default.control_points(), from_options.control_points());
        assert_eq!(default.config(), from_options.config());
    }

    #[test]
    fn use_points_truncates_leading_handles() {
        let scene = scene(4, 2);
        assert_eq!(
            scene.curve_points(),
            vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]
        );
        let frame = scene.frame(&PointerSnapshot::default());
        assert_eq!(frame.polyline.len(), 5);
        assert_relative_eq!(frame.polyline[2].x, 50.0);
        assert_eq!(frame.handles.len(), 4);
    }

    #[test]
    fn use_points_larger_than_handle_count_uses_all() {
        let scene = scene(2, 99);
        assert_eq!(scene.curve_points().len(), 4);
    }

    #[test]
    fn fewer_than_two_points_gives_no_curve() {
        for use_points in [0, 1] {
            let frame = scene(10, use_points).frame(&PointerSnapshot::default());
            assert!(frame.polyline.is_empty());
            assert!(!frame.has_curve());
        }
    }

    #[test]
    fn moving_truncated_handle_leaves_curve_unchanged() {
        let mut scene = scene(10, 2);
        let before = scene.frame(&PointerSnapshot::default()).polyline;
        scene.handles_mut()[3].set_position(Vec2::new(-999.0, 999.0));
        let after = scene.frame(&PointerSnapshot::default()).polyline;
        assert_eq!(before, after);
    }

    #[test]
    fn reset_restores_initial_layout() {
        let mut scene = scene(10, 4);
        scene.handles_mut()[1].set_position(Vec2::new(5.0, 5.0));
        scene.reset();
        assert_eq!(scene.control_points()[1], Vec2::new(100.0, 0.0));
        assert_eq!(scene.dragging_count(), 0);
    }

    #[test]
    fn tick_marks_hovered_handle_emphasized() {
        let mut scene = scene(10, 4);
        scene.tick(&PointerSnapshot::at(Vec2::new(101.0, 2.0)));
        let frame = scene.frame(&PointerSnapshot::default());
        assert_eq!(frame.emphasized_count(), 1);
        assert!(frame.handles[1].emphasized);
    }

    #[test]
    fn draw_strokes_curve_before_handles() {
        let scene = scene(2, 4);
        let frame = scene.frame(&PointerSnapshot::default());
        let mut painter = RecordingPainter::default();
        Scene::draw(&frame, &mut painter);
        assert_eq!(painter.calls[0], "polyline:3");
        assert_eq!(painter.calls.len(), 5);
    }

    #[test]
    fn draw_without_curve_only_draws_handles() {
        let scene = scene(2, 1);
        let frame = scene.frame(&PointerSnapshot::default());
        let mut painter = RecordingPainter::default();
        Scene::draw(&frame, &mut painter);
        assert!(painter.calls.iter().all(|c| c.starts_with("handle:")));
    }
}

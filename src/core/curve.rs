//! Bézier-Auswertung per rekursiver linearer Interpolation (de Casteljau).
//!
//! `evaluate` reduziert N Steuerpunkte schrittweise auf einen Kurvenpunkt,
//! `tessellate` tastet die Kurve über den Parameterbereich `[0, 1]` ab.
//! Beide Funktionen sind rein und deterministisch.

use super::error::CurveError;
use super::geometry::{lerp, Point};

/// Standard-Abtastauflösung.
pub const DEFAULT_RESOLUTION: usize = 25;
/// Standard-Anzahl genutzter Steuerpunkte.
pub const DEFAULT_USE_POINTS: usize = 5;

/// Unveränderliche, validierte Kurven-Konfiguration.
///
/// Nur über `CurveConfig::new` oder `Default` erzeugbar, daher gilt immer
/// `resolution >= 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConfig {
    resolution: usize,
    use_points: usize,
}

impl CurveConfig {
    /// Validiert die Rohwerte aus der Konfiguration.
    ///
    /// Schlägt sofort fehl statt später eine degenerierte Abtastung zu liefern.
    pub fn new(resolution: i64, use_points: i64) -> Result<Self, CurveError> {
        if resolution < 2 {
            return Err(CurveError::ResolutionTooSmall { resolution });
        }
        if use_points < 0 {
            return Err(CurveError::NegativeUsePoints { use_points });
        }
        if resolution % 2 != 0 {
            log::warn!(
                "Ungerade Auflösung {} wird wie {} abgetastet",
                resolution,
                resolution - 1
            );
        }
        Ok(Self {
            resolution: resolution as usize,
            use_points: use_points as usize,
        })
    }

    /// Abtast-Auflösung (>= 2).
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Anzahl der führenden Steuerpunkte, die in die Kurve eingehen.
    pub fn use_points(&self) -> usize {
        self.use_points
    }

    /// Effektiver Nenner der Schrittweite für diese Konfiguration (>= 2).
    pub fn step_denominator(&self) -> usize {
        step_denominator(self.resolution)
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            use_points: DEFAULT_USE_POINTS,
        }
    }
}

/// Effektiver Nenner der Schrittweite: `resolution - resolution % 2`.
///
/// Ungerade Auflösungen verhalten sich wie `resolution - 1`.
pub fn step_denominator(resolution: usize) -> usize {
    resolution - resolution % 2
}

/// Ein Reduktionsschritt: k Punkte → k−1 Punkte.
///
/// `out[j] = lerp(points[j], points[j + 1], t)`
pub fn reduce_once(points: &[Point], t: f32) -> Vec<Point> {
    points.windows(2).map(|p| lerp(p[0], p[1], t)).collect()
}

/// Kurvenpunkt bei Parameter `t`.
///
/// Wiederholt `reduce_once`, bis genau ein Punkt übrig ist. Ein einzelner
/// Steuerpunkt ist bereits das Ergebnis. `t` wird nicht geklemmt.
pub fn evaluate(control_points: &[Point], t: f32) -> Result<Point, CurveError> {
    let (&first, rest) = control_points
        .split_first()
        .ok_or(CurveError::EmptyControlPoints)?;
    if rest.is_empty() {
        return Ok(first);
    }

    let mut layer = reduce_once(control_points, t);
    while layer.len() > 1 {
        layer = reduce_once(&layer, t);
    }
    Ok(layer[0])
}

/// Renderbare Polylinie der Kurve.
///
/// Abtastung bei `t = i / d` für `i = 0..=d` mit `d = step_denominator(resolution)`.
/// Über einen Zähler statt eines akkumulierten Floats, damit `t = 1` genau
/// einmal enthalten ist. Ergebnis hat `d + 1` Punkte.
pub fn tessellate(control_points: &[Point], resolution: usize) -> Result<Vec<Point>, CurveError> {
    if resolution < 2 {
        return Err(CurveError::ResolutionTooSmall {
            resolution: resolution as i64,
        });
    }
    if control_points.is_empty() {
        return Err(CurveError::EmptyControlPoints);
    }

    let denominator = step_denominator(resolution);
    (0..=denominator)
        .map(|i| evaluate(control_points, i as f32 / denominator as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn arch() -> Vec<Point> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 0.0),
        ]
    }

    #[test]
    fn evaluate_empty_is_error() {
        assert_eq!(evaluate(&[], 0.5), Err(CurveError::EmptyControlPoints));
    }

    #[test]
    fn evaluate_single_point_is_base_case() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(evaluate(&[p], 0.0), Ok(p));
        assert_eq!(evaluate(&[p], 0.7), Ok(p));
    }

    #[test]
    fn evaluate_linear_midpoint() {
        let p = evaluate(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], 0.5).unwrap();
        assert_eq!(p, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn evaluate_quadratic_midpoint() {
        let p = evaluate(&arch(), 0.5).unwrap();
        assert_eq!(p, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn evaluate_endpoints_match_first_and_last() {
        let points = vec![
            Vec2::new(0.3, 1.7),
            Vec2::new(-4.1, 9.2),
            Vec2::new(7.7, 3.3),
            Vec2::new(2.9, -8.6),
        ];
        assert_eq!(evaluate(&points, 0.0).unwrap(), points[0]);
        assert_eq!(evaluate(&points, 1.0).unwrap(), points[3]);
    }

    #[test]
    fn evaluate_matches_cubic_bernstein_form() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(3.0, 10.0);
        let p2 = Vec2::new(7.0, 10.0);
        let p3 = Vec2::new(10.0, 0.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let inv = 1.0 - t;
            let expected = inv * inv * inv * p0
                + 3.0 * inv * inv * t * p1
                + 3.0 * inv * t * t * p2
                + t * t * t * p3;
            let got = evaluate(&[p0, p1, p2, p3], t).unwrap();
            assert_relative_eq!(got.x, expected.x, epsilon = 1e-4);
            assert_relative_eq!(got.y, expected.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn evaluate_is_bit_identical_on_repeat() {
        let points = arch();
        let a = evaluate(&points, 0.3141).unwrap();
        let b = evaluate(&points, 0.3141).unwrap();
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn evaluate_is_continuous_in_t() {
        let points = arch();
        let mut prev = evaluate(&points, 0.0).unwrap();
        for i in 1..=1000 {
            let p = evaluate(&points, i as f32 / 1000.0).unwrap();
            assert!(prev.distance(p) < 0.1, "Sprung bei Schritt {}", i);
            prev = p;
        }
    }

    #[test]
    fn reduce_once_shrinks_by_one() {
        let reduced = reduce_once(&arch(), 0.5);
        assert_eq!(reduced, vec![Vec2::new(5.0, 5.0), Vec2::new(15.0, 5.0)]);
    }

    #[test]
    fn step_denominator_drops_odd_resolution() {
        assert_eq!(step_denominator(2), 2);
        assert_eq!(step_denominator(3), 2);
        assert_eq!(step_denominator(24), 24);
        assert_eq!(step_denominator(25), 24);
    }

    #[test]
    fn tessellate_sample_count_is_denominator_plus_one() {
        let points = arch();
        assert_eq!(tessellate(&points, 24).unwrap().len(), 25);
        assert_eq!(tessellate(&points, 25).unwrap().len(), 25);
        assert_eq!(tessellate(&points, 2).unwrap().len(), 3);
        assert_eq!(tessellate(&points, 3).unwrap().len(), 3);
    }

    #[test]
    fn tessellate_ends_exactly_at_last_point_once() {
        let points = arch();
        for resolution in [2usize, 3, 7, 10, 25, 100] {
            let line = tessellate(&points, resolution).unwrap();
            assert_eq!(line[0], points[0]);
            assert_eq!(*line.last().unwrap(), points[2]);
            let hits = line.iter().filter(|p| **p == points[2]).count();
            assert_eq!(hits, 1, "Auflösung {}", resolution);
        }
    }

    #[test]
    fn tessellate_rejects_bad_input() {
        assert_eq!(
            tessellate(&arch(), 1),
            Err(CurveError::ResolutionTooSmall { resolution: 1 })
        );
        assert_eq!(tessellate(&[], 10), Err(CurveError::EmptyControlPoints));
    }

    #[test]
    fn config_validates_raw_values() {
        assert_eq!(
            CurveConfig::new(1, 5),
            Err(CurveError::ResolutionTooSmall { resolution: 1 })
        );
        assert_eq!(
            CurveConfig::new(25, -1),
            Err(CurveError::NegativeUsePoints { use_points: -1 })
        );
        let config = CurveConfig::new(25, 0).unwrap();
        assert_eq!(config.resolution(), 25);
        assert_eq!(config.use_points(), 0);
        assert_eq!(config.step_denominator(), 24);
    }

    #[test]
    fn smallest_valid_resolution_keeps_positive_denominator() {
        let config = CurveConfig::new(2, 2).unwrap();
        assert_eq!(config.step_denominator(), 2);
        assert_eq!(
            CurveConfig::new(0, 2),
            Err(CurveError::ResolutionTooSmall { resolution: 0 })
        );
    }

    #[test]
    fn default_config_matches_validated_defaults() {
        let validated =
            CurveConfig::new(DEFAULT_RESOLUTION as i64, DEFAULT_USE_POINTS as i64).unwrap();
        assert_eq!(CurveConfig::default(), validated);
        assert!(CurveConfig::default().step_denominator() >= 2);
    }
}

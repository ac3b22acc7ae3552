//! Typisierte Fehler für Kurvenauswertung und Szenenaufbau.

use thiserror::Error;

/// Fehler der Kurvenauswertung bzw. Kurven-Konfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Auswertung ohne Steuerpunkte ist nicht definiert.
    #[error("Kurvenauswertung ohne Steuerpunkte nicht möglich")]
    EmptyControlPoints,
    /// Auflösung unter 2 würde keine oder eine endlose Abtastung ergeben.
    #[error("Auflösung muss mindestens 2 sein (erhalten: {resolution})")]
    ResolutionTooSmall { resolution: i64 },
    /// Negative Anzahl genutzter Steuerpunkte.
    #[error("use_points darf nicht negativ sein (erhalten: {use_points})")]
    NegativeUsePoints { use_points: i64 },
}

/// Fehler beim Aufbau der Szene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Die Szene braucht mindestens einen Handle vor dem ersten Frame.
    #[error("Szene ohne Handles: mindestens ein Steuerpunkt erforderlich")]
    NoHandles,
    /// Trefferradius muss positiv sein.
    #[error("Trefferradius muss positiv sein (erhalten: {hit_radius})")]
    InvalidHitRadius { hit_radius: f32 },
    /// Ungültige Kurven-Konfiguration.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

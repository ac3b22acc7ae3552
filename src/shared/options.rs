//! Zentrale Konfiguration für den Bézier-Handle-Editor.
//!
//! `EditorOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::curve::{DEFAULT_RESOLUTION, DEFAULT_USE_POINTS};
use crate::core::HitBox;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Start-Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Abtast-Auflösung der Kurve.
pub const CURVE_RESOLUTION: i64 = DEFAULT_RESOLUTION as i64;
/// Anzahl der führenden Handles, die in die Kurve eingehen.
pub const CURVE_USE_POINTS: i64 = DEFAULT_USE_POINTS as i64;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_THICKNESS_PX: f32 = 1.0;
/// Kurvenfarbe (RGBA: Schwarz).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Handles ─────────────────────────────────────────────────────────

/// Trefferradius der Handles in Szenen-Einheiten.
pub const HANDLE_HIT_RADIUS: f32 = 10.0;
/// Kantenlänge der Handle-Hitbox.
pub const HANDLE_SIZE: f32 = 10.0;
/// Füllfarbe hervorgehobener Handles (RGBA: Weiß).
pub const HANDLE_FILL_EMPHASIZED: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Randfarbe hervorgehobener Handles (RGBA: Schwarz, halbtransparent).
pub const HANDLE_STROKE_EMPHASIZED: [f32; 4] = [0.0, 0.0, 0.0, 128.0 / 255.0];
/// Füllfarbe ruhender Handles (RGBA: Grau 0x88).
pub const HANDLE_FILL_IDLE: [f32; 4] = [136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0, 1.0];
/// Randfarbe ruhender Handles (RGBA: Dunkelgrau, schwach).
pub const HANDLE_STROKE_IDLE: [f32; 4] = [80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0, 50.0 / 255.0];
/// Randstärke der Handles in Pixeln.
pub const HANDLE_STROKE_PX: f32 = 1.0;

/// Start-Versätze der fünf Standard-Handles relativ zur Fenstermitte.
const DEFAULT_HANDLE_OFFSETS: [[f32; 2]; 5] = [
    [-150.0, 50.0],
    [-50.0, -50.0],
    [0.0, -75.0],
    [50.0, -50.0],
    [150.0, 50.0],
];

/// Verhalten bei überlappenden Trefferradien auf einem Pointer-Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPolicy {
    /// Nur der erste getroffene Handle (Registrierungsreihenfolge) wird gezogen
    #[default]
    FirstMatch,
    /// Jeder getroffene Handle wird gezogen
    AllMatch,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Editor-Optionen.
/// Wird als `bezier_handle_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Start-Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Abtast-Auflösung (>= 2, ungerade Werte wirken wie Wert − 1)
    pub resolution: i64,
    /// Anzahl der führenden Handles für die Kurve (>= 0)
    pub use_points: i64,
    /// Linienstärke der Kurve
    pub curve_thickness_px: f32,
    /// Kurvenfarbe (RGBA)
    pub curve_color: [f32; 4],

    // ── Handles ─────────────────────────────────────────────────
    /// Hitboxen sind Versätze relativ zur Mitte des Start-Fensters
    pub center_layout: bool,
    /// Trefferradius (> 0)
    pub hit_radius: f32,
    /// Verhalten bei überlappenden Trefferradien
    pub drag_policy: DragPolicy,
    /// Füllfarbe hervorgehobener Handles
    pub handle_fill_emphasized: [f32; 4],
    /// Randfarbe hervorgehobener Handles
    pub handle_stroke_emphasized: [f32; 4],
    /// Füllfarbe ruhender Handles
    pub handle_fill_idle: [f32; 4],
    /// Randfarbe ruhender Handles
    pub handle_stroke_idle: [f32; 4],
    /// Randstärke der Handles
    pub handle_stroke_px: f32,
    /// Start-Hitboxen der Handles in Steuerpunkt-Reihenfolge
    /// (als letztes Feld, TOML-Tabellen-Arrays folgen den einfachen Werten)
    pub handles: Vec<HitBox>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            background_color: BACKGROUND_COLOR,

            resolution: CURVE_RESOLUTION,
            use_points: CURVE_USE_POINTS,
            curve_thickness_px: CURVE_THICKNESS_PX,
            curve_color: CURVE_COLOR,

            center_layout: true,
            hit_radius: HANDLE_HIT_RADIUS,
            drag_policy: DragPolicy::default(),
            handle_fill_emphasized: HANDLE_FILL_EMPHASIZED,
            handle_stroke_emphasized: HANDLE_STROKE_EMPHASIZED,
            handle_fill_idle: HANDLE_FILL_IDLE,
            handle_stroke_idle: HANDLE_STROKE_IDLE,
            handle_stroke_px: HANDLE_STROKE_PX,
            handles: default_handle_layout(),
        }
    }
}

/// Standard-Layout: fünf Handles als flacher Bogen um die Mitte.
fn default_handle_layout() -> Vec<HitBox> {
    DEFAULT_HANDLE_OFFSETS
        .iter()
        .map(|[x, y]| HitBox::new(*x, *y, HANDLE_SIZE, HANDLE_SIZE))
        .collect()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text. Fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_handle_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_handle_editor.toml")
    }

    /// Ursprung des Handle-Layouts in Szenen-Koordinaten.
    pub fn layout_origin(&self) -> Vec2 {
        if self.center_layout {
            Vec2::new(self.window_size[0], self.window_size[1]) * 0.5
        } else {
            Vec2::ZERO
        }
    }

    /// Start-Hitboxen in Szenen-Koordinaten.
    pub fn initial_handles(&self) -> Vec<HitBox> {
        let origin = self.layout_origin();
        self.handles.iter().map(|hb| hb.translated(origin)).collect()
    }
}

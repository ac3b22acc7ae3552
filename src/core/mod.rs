//! Core-Domänentypen: Punkt, Kurvenauswertung, Handles, Pointer, Kamera.

pub mod camera;
/// Bézier-Auswertung (de Casteljau) und Abtastung zur Polylinie
pub mod curve;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod pointer;
pub mod traits;

pub use camera::Camera2D;
pub use curve::{evaluate, tessellate, CurveConfig};
pub use error::{CurveError, SceneError};
pub use geometry::{lerp, HitBox, Point};
pub use handle::{DragState, DraggableHandle, HandleHooks, NoHooks};
pub use pointer::{PointerButtons, PointerEventKind, PointerSnapshot, RawPointerEvent};
pub use traits::{
    HandleVisual, HitTestable, PointerDispatch, PointerObserver, Positioned, Renderable,
    ScenePainter, Tickable,
};

//! Bézier-Handle-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PointerRouter, Scene};
pub use core::{
    evaluate, tessellate, Camera2D, CurveConfig, CurveError, DragState, DraggableHandle, HitBox,
    Point, PointerSnapshot, RawPointerEvent, SceneError,
};
pub use shared::{DragPolicy, EditorOptions, FrameData};

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod frame;
pub mod options;

pub use frame::FrameData;
pub use options::{DragPolicy, EditorOptions};

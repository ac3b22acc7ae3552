//! Application State: zentrale Datenhaltung.

mod app_state;
mod keyboard;
mod view;

pub use app_state::AppState;
pub use keyboard::KeyboardState;
pub use view::ViewState;

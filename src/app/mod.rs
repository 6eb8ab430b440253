//! Application state and logic

mod event;
mod state;
mod ui;

pub use event::{Event, Handler};
pub use state::App;
pub use ui::UiState;

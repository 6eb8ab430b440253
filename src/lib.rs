//! Levelforge - Terminal front panel for a procedural level generator
//!
//! Levelforge presents the generator's configuration in a TUI: a front panel
//! summarizing the active settings, a read-only about dialog, and a modal
//! options editor that stages edits and commits them atomically on save.

pub mod about;
pub mod app;
pub mod config;
pub mod paths;
pub mod state;
pub mod tui;

pub use app::App;
pub use config::Settings;
pub use state::AppMode;

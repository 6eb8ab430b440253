//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `front_panel`: Front panel rendering (banner, settings summary, status line)
//! - `modals`: Modal/overlay rendering

pub mod colors;
pub mod front_panel;
pub mod modals;

use crate::app::App;
use crate::state::AppMode;
use ratatui::Frame;

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    front_panel::render_front_panel(frame, app);

    match &app.mode {
        AppMode::Normal => {}
        AppMode::About(state) => modals::render_about_overlay(frame, app, state),
        AppMode::OptionsEditor(state) => modals::render_options_editor_overlay(frame, state),
    }
}

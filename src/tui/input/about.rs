//! About dialog key handling.
//!
//! Scroll keys adjust the view; any other key dismisses the dialog. The
//! dialog is read-only, so dismissal never has anything to commit.

use ratatui::crossterm::event::KeyCode;

use crate::app::App;

const PAGE: usize = 10;

/// Handle a key press while the about dialog is open
pub fn handle(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.ui.about_scroll = app.ui.about_scroll.saturating_sub(1),
        KeyCode::Down => app.ui.about_scroll = app.ui.about_scroll.saturating_add(1),
        KeyCode::PageUp => app.ui.about_scroll = app.ui.about_scroll.saturating_sub(PAGE),
        KeyCode::PageDown => app.ui.about_scroll = app.ui.about_scroll.saturating_add(PAGE),
        KeyCode::Home | KeyCode::Char('g') => app.ui.about_scroll = 0,
        // Rendering clamps the scroll position to the last line.
        KeyCode::End | KeyCode::Char('G') => app.ui.about_scroll = usize::MAX,
        _ => app.close_dialog(),
    }
}

//! Mode-specific key handling
//!
//! Input is routed to the handler for the current mode; while a dialog is
//! open, the front panel receives no keys. This is what makes both dialogs
//! modal.

mod about;
mod normal;
mod options_editor;

use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::state::AppMode;

/// Handle a key event based on the current mode
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match &app.mode {
        AppMode::Normal => normal::handle(app, code, modifiers),
        AppMode::About(_) => about::handle(app, code),
        AppMode::OptionsEditor(_) => options_editor::handle(app, code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::path::PathBuf;

    fn app() -> App {
        App::with_settings_path(Settings::default(), PathBuf::from("/nonexistent/settings.json"))
    }

    #[test]
    fn test_keys_route_to_current_mode() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::About(_)));

        // While the about dialog is open, 'o' closes it rather than
        // opening the options editor.
        handle_key_event(&mut app, KeyCode::Char('o'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Normal));
    }
}

//! Front panel key handling (no dialog open).

use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;

/// Handle a key press on the front panel
pub fn handle(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('a') => app.open_about(),
        KeyCode::Char('o') => app.open_options(),
        KeyCode::Esc => app.ui.clear_status(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::AppMode;
    use std::path::PathBuf;

    fn app() -> App {
        App::with_settings_path(Settings::default(), PathBuf::from("/nonexistent/settings.json"))
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        handle(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        handle(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_a_opens_about() {
        let mut app = app();
        handle(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::About(_)));
    }

    #[test]
    fn test_o_opens_options() {
        let mut app = app();
        handle(&mut app, KeyCode::Char('o'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::OptionsEditor(_)));
    }

    #[test]
    fn test_esc_clears_status() {
        let mut app = app();
        app.ui.set_status("saved");
        handle(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.ui.status_message.is_none());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = app();
        handle(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.should_quit);
    }
}

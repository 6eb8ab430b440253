//! Options editor key handling.
//!
//! Two sub-modes: while a text edit is in progress keys go to the edit
//! buffer, otherwise they navigate the field list. Saving and cancelling
//! are only reachable from the navigation sub-mode.

use ratatui::crossterm::event::KeyCode;

use crate::app::App;
use crate::state::AppMode;

/// Handle a key press while the options editor is open
pub fn handle(app: &mut App, code: KeyCode) {
    let AppMode::OptionsEditor(state) = &mut app.mode else {
        return;
    };

    if state.editing.is_some() {
        match code {
            KeyCode::Enter => {
                state.commit_edit();
            }
            KeyCode::Esc => state.cancel_edit(),
            KeyCode::Backspace => state.edit_backspace(),
            KeyCode::Char(c) => state.edit_char(c),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Up => state.select_prev(),
        KeyCode::Down => state.select_next(),
        KeyCode::Left => state.cycle_left(),
        KeyCode::Right => state.cycle_right(),
        KeyCode::Char(' ') => state.toggle(),
        KeyCode::Enter => {
            if state.selected_field().is_text() {
                state.begin_edit();
            } else {
                state.toggle();
            }
        }
        KeyCode::Char('s') => app.save_options(),
        KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}

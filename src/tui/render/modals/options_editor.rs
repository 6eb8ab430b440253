//! Options editor overlay rendering.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use crate::state::{OptionsEditorState, OptionsField};
use crate::tui::render::colors;

/// Render the options editor overlay.
pub fn render_options_editor_overlay(frame: &mut Frame<'_>, state: &OptionsEditorState) {
    // Header + blank + 6 fields + blank + error? + help, plus borders.
    let content_lines = 10u16.saturating_add(u16::from(state.error.is_some()));
    let area = centered_rect_absolute(60, content_lines.saturating_add(2), frame.area());

    let total = OptionsField::ALL.len();
    let selected_idx = state.selected.min(total.saturating_sub(1));

    let mut lines: Vec<Line<'_>> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Edit options (applied on save):",
        Style::default().fg(colors::TEXT_DIM),
    )));
    lines.push(Line::from(""));

    for (idx, field) in OptionsField::ALL.iter().copied().enumerate() {
        let is_selected = idx == selected_idx;
        lines.push(field_line(state, field, is_selected));
    }

    lines.push(Line::from(""));

    if let Some(error) = state.error {
        lines.push(Line::from(Span::styled(
            format!("✗ {error}"),
            Style::default().fg(colors::MODAL_BORDER_ERROR),
        )));
    }

    let hints = if state.editing.is_some() {
        "Enter apply • Esc cancel edit"
    } else {
        "↑/↓ select • ←/→ change • Enter edit • s save • Esc cancel"
    };
    lines.push(Line::from(Span::styled(
        hints,
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let border_color = if state.error.is_some() {
        colors::MODAL_BORDER_ERROR
    } else {
        colors::SELECTED
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Options ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .border_type(colors::BORDER_TYPE),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn field_line(state: &OptionsEditorState, field: OptionsField, is_selected: bool) -> Line<'_> {
    let prefix = if is_selected { "▶ " } else { "  " };
    let label_style = if is_selected {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::SURFACE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    };

    let mut spans = vec![Span::styled(
        format!("{prefix}{:<18}", field.label()),
        label_style,
    )];

    // An in-progress edit replaces the stored value for the selected field.
    if is_selected && state.editing.is_some() {
        let buffer = state.editing.as_deref().unwrap_or_default();
        spans.push(Span::styled(
            format!("{buffer}│"),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .bg(colors::INPUT_BG),
        ));
    } else {
        spans.push(Span::styled(
            field_value(state, field),
            Style::default().fg(colors::TEXT_DIM),
        ));
    }

    Line::from(spans)
}

fn field_value(state: &OptionsEditorState, field: OptionsField) -> String {
    match field {
        OptionsField::Theme => state.draft.theme.label().to_string(),
        OptionsField::Backups => on_off(state.draft.backups),
        OptionsField::BackupCount => state.draft.backup_count.to_string(),
        OptionsField::OverwriteWarning => on_off(state.draft.overwrite_warning),
        OptionsField::DebugMessages => on_off(state.draft.debug_messages),
        OptionsField::Author => {
            if state.draft.author.is_empty() {
                "(none)".to_string()
            } else {
                state.draft.author.clone()
            }
        }
    }
}

fn on_off(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_options_editor_overlay_renders_content() -> Result<(), std::io::Error> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend)?;

        let mut state = OptionsEditorState::new(Settings::default());
        state.selected = 2;

        terminal.draw(|frame| {
            render_options_editor_overlay(frame, &state);
        })?;

        assert!(!terminal.backend().buffer().content.is_empty());
        Ok(())
    }

    #[test]
    fn test_render_shows_edit_buffer_and_error() -> Result<(), std::io::Error> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend)?;

        let mut state = OptionsEditorState::new(Settings::default());
        state.selected = 2;
        state.begin_edit();
        state.edit_char('9'); // "39", out of range
        state.commit_edit();

        terminal.draw(|frame| {
            render_options_editor_overlay(frame, &state);
        })?;

        assert!(!terminal.backend().buffer().content.is_empty());
        Ok(())
    }

    #[test]
    fn test_field_values_reflect_draft() {
        let mut state = OptionsEditorState::new(Settings::default());
        state.draft.backups = false;
        state.draft.author = "Ada".to_string();

        assert_eq!(field_value(&state, OptionsField::Backups), "off");
        assert_eq!(field_value(&state, OptionsField::BackupCount), "3");
        assert_eq!(field_value(&state, OptionsField::Author), "Ada");
    }

    #[test]
    fn test_empty_author_shows_placeholder() {
        let state = OptionsEditorState::new(Settings::default());
        assert_eq!(field_value(&state, OptionsField::Author), "(none)");
    }
}

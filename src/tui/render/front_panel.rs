//! Front panel rendering: banner, settings summary, key hints, status line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::render::colors;

/// Render the front panel filling the whole frame.
pub fn render_front_panel(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_panel_body(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
}

fn render_panel_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let accent = colors::theme_accent(app.settings.theme);

    let mut lines: Vec<Line<'_>> = Vec::new();
    lines.push(Line::from(Span::styled(
        concat!("Levelforge v", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (label, value) in settings_summary(app) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<20}"), Style::default().fg(colors::TEXT_DIM)),
            Span::styled(value, Style::default().fg(colors::TEXT_PRIMARY)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .border_type(colors::BORDER_TYPE),
    );

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = app.ui.status_message.as_ref().map_or_else(
        || {
            Line::from(Span::styled(
                "a about • o options • q quit",
                Style::default().fg(colors::TEXT_MUTED),
            ))
        },
        |message| {
            Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(colors::ACCENT_POSITIVE),
            ))
        },
    );

    frame.render_widget(Paragraph::new(line), area);
}

fn settings_summary(app: &App) -> Vec<(&'static str, String)> {
    let settings = &app.settings;
    vec![
        ("Theme", settings.theme.label().to_string()),
        ("Keep backups", yes_no(settings.backups)),
        ("Backup copies", settings.backup_count.to_string()),
        ("Overwrite warning", yes_no(settings.overwrite_warning)),
        ("Debug messages", yes_no(settings.debug_messages)),
        (
            "Author",
            if settings.author.is_empty() {
                "(not set)".to_string()
            } else {
                settings.author.clone()
            },
        ),
    ]
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn app() -> App {
        App::with_settings_path(Settings::default(), PathBuf::from("/nonexistent/settings.json"))
    }

    #[test]
    fn test_render_front_panel() -> Result<(), std::io::Error> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend)?;
        let app = app();
        terminal.draw(|frame| render_front_panel(frame, &app))?;
        assert!(!terminal.backend().buffer().content.is_empty());
        Ok(())
    }

    #[test]
    fn test_status_message_replaces_hints() -> Result<(), std::io::Error> {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend)?;
        let mut app = app();
        app.ui.set_status("Options saved");
        terminal.draw(|frame| render_front_panel(frame, &app))?;
        assert!(!terminal.backend().buffer().content.is_empty());
        Ok(())
    }

    #[test]
    fn test_settings_summary_covers_every_field() {
        let app = app();
        let summary = settings_summary(&app);
        assert_eq!(summary.len(), 6);
        assert_eq!(summary[2].1, "3");
        assert_eq!(summary[5].1, "(not set)");
    }
}

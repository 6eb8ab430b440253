//! About dialog overlay rendering.

use ratatui::layout::Margin;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::centered_rect_absolute;
use crate::app::App;
use crate::state::AboutMode;
use crate::tui::render::colors;

/// Render the about overlay.
pub fn render_about_overlay(frame: &mut Frame<'_>, app: &App, state: &AboutMode) {
    let total_lines = state.lines.len();

    // Attempt to fit the whole text, but don't exceed the frame.
    let max_height = frame.area().height.saturating_sub(4);
    let min_height = 12u16.min(max_height);
    let desired_height = u16::try_from(total_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let height = desired_height.min(max_height).max(min_height);

    let area = centered_rect_absolute(70, height, frame.area());

    let visible_height = usize::from(area.height.saturating_sub(2));
    let inner_width = area.width.saturating_sub(2);

    let mut wrapped = wrap_and_style_lines(&state.lines, inner_width);
    if inner_width != 0 && wrapped.len() > visible_height {
        // Leave a column for the scrollbar.
        let reserved_width = inner_width.saturating_sub(1);
        if reserved_width != inner_width {
            wrapped = wrap_and_style_lines(&state.lines, reserved_width);
        }
    }

    let wrapped_lines = wrapped.len();
    let max_scroll = wrapped_lines.saturating_sub(visible_height);
    let scroll = app.ui.about_scroll.min(max_scroll);
    let scroll_pos = u16::try_from(scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(wrapped)
        .scroll((scroll_pos, 0))
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ACCENT_POSITIVE))
                .border_type(colors::BORDER_TYPE),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);

    if wrapped_lines > visible_height && area.width != 0 {
        let scrollbar_area = area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        });

        if scrollbar_area.width != 0 && scrollbar_area.height != 0 {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_symbol(Some("░"))
                .track_style(Style::default().fg(colors::TEXT_MUTED))
                .thumb_style(Style::default().fg(colors::TEXT_PRIMARY));

            let mut scrollbar_state = ScrollbarState::new(max_scroll.saturating_add(1))
                .position(scroll)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
        }
    }
}

fn wrap_and_style_lines(lines: &[String], width: u16) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    let width = usize::from(width);
    let mut out = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.is_empty() {
            out.push(Line::from(""));
            continue;
        }

        let style = style_for_line(idx, line);
        for wrapped in wrap_single_line(line, width) {
            out.push(Line::from(Span::styled(wrapped, style)));
        }
    }

    out
}

fn style_for_line(idx: usize, line: &str) -> Style {
    if idx == 0 {
        return Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD);
    }

    if line.starts_with("http") {
        return Style::default().fg(colors::TEXT_DIM);
    }

    Style::default().fg(colors::TEXT_PRIMARY)
}

fn wrap_single_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in line.split_whitespace() {
        let word_chars = word.chars().count();

        if current_chars != 0 && current_chars.saturating_add(1).saturating_add(word_chars) > width
        {
            out.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        if current_chars != 0 {
            current.push(' ');
            current_chars = current_chars.saturating_add(1);
        }
        current.push_str(word);
        current_chars = current_chars.saturating_add(word_chars);
    }

    if !current.is_empty() {
        out.push(current);
    }

    out
}

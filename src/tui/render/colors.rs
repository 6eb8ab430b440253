//! Color palette for the TUI
//!
//! Modern color palette - cohesive, muted colors for a clean look

use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::config::Theme;

/// Border style used by every bordered block.
pub const BORDER_TYPE: BorderType = BorderType::Rounded;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const SELECTED: Color = Color::Rgb(100, 180, 220);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Modals
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
pub const MODAL_BORDER_ERROR: Color = Color::Rgb(200, 100, 100);
pub const INPUT_BG: Color = Color::Rgb(35, 40, 50);

// Accent (for confirmations)
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
pub const ACCENT_WARNING: Color = Color::Rgb(200, 160, 80);

/// Front panel accent color for the configured theme.
#[must_use]
pub const fn theme_accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => SELECTED,
        Theme::Light => ACCENT_WARNING,
        Theme::System => BORDER,
    }
}

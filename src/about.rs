//! Static "About" text shown by the about dialog.
//!
//! The text is an immutable ordered sequence of display lines: title,
//! version, credits, and license notice. It is assembled when the dialog
//! opens and never mutated.

/// One-line description shown under the title.
const TAGLINE: &str = "Terminal front panel for a procedural level generator";

/// Credits block, one entry per line.
const CREDITS: &[&str] = &[
    "Design and programming by the Levelforge contributors.",
    "Inspired by a long tradition of random level makers.",
];

/// License notice (GPL-2.0-or-later), wrapped for an 80-column modal.
const LICENSE_NOTICE: &[&str] = &[
    "This program is free software; you can redistribute it and/or",
    "modify it under the terms of the GNU General Public License",
    "as published by the Free Software Foundation; either version 2",
    "of the License, or (at your option) any later version.",
    "",
    "This program is distributed in the hope that it will be useful,",
    "but WITHOUT ANY WARRANTY; without even the implied warranty of",
    "MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.",
];

/// Project homepage shown at the bottom of the dialog.
const HOMEPAGE: &str = "https://github.com/levelforge/levelforge";

/// Build the about text, top to bottom.
#[must_use]
pub fn about_lines() -> Vec<String> {
    let mut lines = vec![
        format!("Levelforge v{}", env!("CARGO_PKG_VERSION")),
        String::new(),
        TAGLINE.to_string(),
        String::new(),
    ];

    lines.extend(CREDITS.iter().map(|credit| (*credit).to_string()));
    lines.push(String::new());
    lines.extend(LICENSE_NOTICE.iter().map(|notice| (*notice).to_string()));
    lines.push(String::new());
    lines.push(HOMEPAGE.to_string());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_carries_name_and_version() {
        let lines = about_lines();
        let first = lines.first().map(String::as_str).unwrap_or_default();
        assert!(first.starts_with("Levelforge v"));
        assert!(first.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_contains_license_notice() {
        let lines = about_lines();
        assert!(
            lines
                .iter()
                .any(|line| line.contains("GNU General Public License"))
        );
    }

    #[test]
    fn test_lines_fit_in_modal_width() {
        for line in about_lines() {
            assert!(line.chars().count() <= 76, "line too wide: {line}");
        }
    }
}

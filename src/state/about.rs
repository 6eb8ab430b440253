//! About dialog mode state.

/// About mode - displays the program's descriptive text in a scrollable modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutMode {
    /// Content lines (rendered top-to-bottom).
    pub lines: Vec<String>,
}

impl AboutMode {
    /// Create the about mode with the standard program text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: crate::about::about_lines(),
        }
    }
}

impl Default for AboutMode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_content() {
        let mode = AboutMode::new();
        assert!(!mode.lines.is_empty());
    }
}

//! Per-mode state types.
//!
//! Each dialog carries its own state struct; `AppMode` holds at most one of
//! them, so two dialogs can never be open at the same time.

mod about;
mod options_editor;

pub use about::AboutMode;
pub use options_editor::{OptionsEditorState, OptionsField};

/// Application mode/state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Front panel, no dialog open.
    #[default]
    Normal,
    /// Read-only about dialog.
    About(AboutMode),
    /// Modal options editor staging edits to the settings.
    OptionsEditor(OptionsEditorState),
}

impl AppMode {
    /// Whether a modal dialog is currently open.
    #[must_use]
    pub const fn is_dialog_open(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_dialog_open() {
        assert!(!AppMode::Normal.is_dialog_open());
        assert!(AppMode::About(AboutMode::default()).is_dialog_open());
    }
}

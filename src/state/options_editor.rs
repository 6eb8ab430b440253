//! Options editor mode state: a staged draft of the settings.
//!
//! The editor never touches the committed configuration directly. It works on
//! `draft`, a copy taken when the dialog opens, and the application applies
//! the draft atomically on save. Cancelling simply drops this state.

use crate::config::{InvalidValue, Settings};

/// A single editable field in the options editor, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsField {
    /// Color theme (enumerated).
    Theme,
    /// Keep-backups toggle.
    Backups,
    /// Number of backup copies to keep (integer).
    BackupCount,
    /// Overwrite-warning toggle.
    OverwriteWarning,
    /// Debug-messages toggle.
    DebugMessages,
    /// Author name (free text).
    Author,
}

impl OptionsField {
    /// All fields, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Theme,
        Self::Backups,
        Self::BackupCount,
        Self::OverwriteWarning,
        Self::DebugMessages,
        Self::Author,
    ];

    /// Label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::Backups => "Keep backups",
            Self::BackupCount => "Backup copies",
            Self::OverwriteWarning => "Overwrite warning",
            Self::DebugMessages => "Debug messages",
            Self::Author => "Author",
        }
    }

    /// Whether the field is edited as free text (rather than toggled/cycled).
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::BackupCount | Self::Author)
    }
}

/// State for the modal options editor.
///
/// `draft` holds the staged (uncommitted) values; `original` is the committed
/// configuration at dialog open time, kept for cancel/compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsEditorState {
    /// Staged settings; mutated by edits, committed only on save.
    pub draft: Settings,
    /// Committed settings at dialog open time.
    pub original: Settings,
    /// Index of the selected field in [`OptionsField::ALL`].
    pub selected: usize,
    /// Text buffer for the field currently being edited, if any.
    pub editing: Option<String>,
    /// Inline validation message for the last rejected input.
    pub error: Option<InvalidValue>,
}

impl OptionsEditorState {
    /// Open the editor over the given committed settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            draft: settings.clone(),
            original: settings,
            selected: 0,
            editing: None,
            error: None,
        }
    }

    /// Return the currently highlighted field.
    #[must_use]
    pub const fn selected_field(&self) -> OptionsField {
        match self.selected {
            1 => OptionsField::Backups,
            2 => OptionsField::BackupCount,
            3 => OptionsField::OverwriteWarning,
            4 => OptionsField::DebugMessages,
            5 => OptionsField::Author,
            _ => OptionsField::Theme,
        }
    }

    /// Select the next field, wrapping at the end.
    pub const fn select_next(&mut self) {
        self.selected = (self.selected + 1) % OptionsField::ALL.len();
    }

    /// Select the previous field, wrapping at the start.
    pub const fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = OptionsField::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Toggle or advance the selected field in the draft.
    ///
    /// Text fields are not affected; they are edited via [`Self::begin_edit`].
    pub const fn toggle(&mut self) {
        match self.selected_field() {
            OptionsField::Theme => self.draft.theme = self.draft.theme.next(),
            OptionsField::Backups => self.draft.backups = !self.draft.backups,
            OptionsField::OverwriteWarning => {
                self.draft.overwrite_warning = !self.draft.overwrite_warning;
            }
            OptionsField::DebugMessages => {
                self.draft.debug_messages = !self.draft.debug_messages;
            }
            OptionsField::BackupCount | OptionsField::Author => {}
        }
    }

    /// Cycle the selected field backwards (left arrow).
    pub const fn cycle_left(&mut self) {
        match self.selected_field() {
            OptionsField::Theme => self.draft.theme = self.draft.theme.prev(),
            OptionsField::Backups
            | OptionsField::OverwriteWarning
            | OptionsField::DebugMessages => self.toggle(),
            OptionsField::BackupCount | OptionsField::Author => {}
        }
    }

    /// Cycle the selected field forwards (right arrow).
    pub const fn cycle_right(&mut self) {
        match self.selected_field() {
            OptionsField::Theme => self.draft.theme = self.draft.theme.next(),
            OptionsField::Backups
            | OptionsField::OverwriteWarning
            | OptionsField::DebugMessages => self.toggle(),
            OptionsField::BackupCount | OptionsField::Author => {}
        }
    }

    /// Begin inline text editing of the selected field.
    ///
    /// Has no effect on toggled/cycled fields.
    pub fn begin_edit(&mut self) {
        let buffer = match self.selected_field() {
            OptionsField::BackupCount => self.draft.backup_count.to_string(),
            OptionsField::Author => self.draft.author.clone(),
            _ => return,
        };
        self.editing = Some(buffer);
        self.error = None;
    }

    /// Append a character to the edit buffer.
    pub fn edit_char(&mut self, c: char) {
        if let Some(buffer) = &mut self.editing {
            buffer.push(c);
        }
    }

    /// Remove the last character from the edit buffer.
    pub fn edit_backspace(&mut self) {
        if let Some(buffer) = &mut self.editing {
            buffer.pop();
        }
    }

    /// Validate the edit buffer and write it into the draft.
    ///
    /// On success the buffer is consumed and any inline error cleared; on
    /// failure the inline error is set and editing continues (local
    /// re-prompt). Returns whether the edit was accepted.
    pub fn commit_edit(&mut self) -> bool {
        let Some(buffer) = self.editing.clone() else {
            return false;
        };

        let result = match self.selected_field() {
            OptionsField::BackupCount => Settings::validate_backup_count(&buffer)
                .map(|count| self.draft.backup_count = count),
            OptionsField::Author => {
                Settings::validate_author(&buffer).map(|author| self.draft.author = author)
            }
            _ => Ok(()),
        };

        match result {
            Ok(()) => {
                self.editing = None;
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// Abandon the current field edit, leaving the draft unchanged.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.error = None;
    }
}

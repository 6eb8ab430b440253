//! Persistent application settings.
//!
//! This is the process-wide configuration edited by the options dialog.
//! Settings are loaded once at startup; the options editor stages its changes
//! on a local draft and commits back here only on explicit confirmation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::paths;

/// Color theme applied to the front panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark palette.
    Dark,
    /// Light palette.
    Light,
    /// Follow the terminal's own colors.
    #[default]
    System,
}

impl Theme {
    /// All themes, in display/cycle order.
    pub const ALL: &'static [Self] = &[Self::Dark, Self::Light, Self::System];

    /// Lowercase label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    /// The next theme in cycle order, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::System,
            Self::System => Self::Dark,
        }
    }

    /// The previous theme in cycle order, wrapping at the start.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Dark => Self::System,
            Self::Light => Self::Dark,
            Self::System => Self::Light,
        }
    }
}

/// Why an edited option value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidValue {
    /// The backup count could not be parsed as a whole number.
    #[error("backup count must be a whole number")]
    BackupCountNotANumber,

    /// The backup count was outside the accepted range.
    #[error("backup count must be between {min} and {max}")]
    BackupCountOutOfRange {
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// The author name was longer than the accepted maximum.
    #[error("author name must be at most {max} characters")]
    AuthorTooLong {
        /// Largest accepted length in characters.
        max: usize,
    },

    /// The author name contained control characters.
    #[error("author name must not contain control characters")]
    AuthorNotPrintable,
}

/// Persistent user settings
///
/// Stores the tunable options shown in the options editor, such as backup
/// behavior and the author name recorded in generated levels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Color theme for the front panel.
    #[serde(default)]
    pub theme: Theme,

    /// Whether to keep backup copies of generated output.
    #[serde(default = "default_backups")]
    pub backups: bool,

    /// How many backup copies to keep.
    #[serde(default = "default_backup_count")]
    pub backup_count: u32,

    /// Whether to warn before overwriting an existing output file.
    #[serde(default = "default_overwrite_warning")]
    pub overwrite_warning: bool,

    /// Whether to emit debug-level log messages.
    #[serde(default)]
    pub debug_messages: bool,

    /// Author name recorded in generated level metadata.
    #[serde(default)]
    pub author: String,
}

const fn default_backups() -> bool {
    true
}

const fn default_backup_count() -> u32 {
    3
}

const fn default_overwrite_warning() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            backups: default_backups(),
            backup_count: default_backup_count(),
            overwrite_warning: default_overwrite_warning(),
            debug_messages: false,
            author: String::new(),
        }
    }
}

impl Settings {
    /// Smallest accepted backup count.
    pub const BACKUP_COUNT_MIN: u32 = 1;

    /// Largest accepted backup count.
    pub const BACKUP_COUNT_MAX: u32 = 10;

    /// Largest accepted author name length, in characters.
    pub const AUTHOR_MAX_CHARS: usize = 40;

    /// Get the settings file path
    #[must_use]
    pub fn path() -> PathBuf {
        paths::settings_path()
    }

    /// Load settings from disk, returning defaults if the file doesn't exist
    /// or cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            debug!("Settings file not found, using defaults");
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("Failed to load settings: {e:#}");
            Self::default()
        })
    }

    /// Load settings from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;
        Ok(settings)
    }

    /// Save settings to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the settings directory cannot be created or the
    /// file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::path();
        self.save_to(&path)
    }

    /// Save settings to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Parse and validate a backup count entered as text.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValue`] if the input is not a whole number in
    /// `BACKUP_COUNT_MIN..=BACKUP_COUNT_MAX`.
    pub fn validate_backup_count(input: &str) -> Result<u32, InvalidValue> {
        let count: u32 = input
            .trim()
            .parse()
            .map_err(|_| InvalidValue::BackupCountNotANumber)?;

        if !(Self::BACKUP_COUNT_MIN..=Self::BACKUP_COUNT_MAX).contains(&count) {
            return Err(InvalidValue::BackupCountOutOfRange {
                min: Self::BACKUP_COUNT_MIN,
                max: Self::BACKUP_COUNT_MAX,
            });
        }

        Ok(count)
    }

    /// Validate an author name entered as text.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValue`] if the name is longer than
    /// `AUTHOR_MAX_CHARS` characters or contains control characters.
    pub fn validate_author(input: &str) -> Result<String, InvalidValue> {
        if input.chars().count() > Self::AUTHOR_MAX_CHARS {
            return Err(InvalidValue::AuthorTooLong {
                max: Self::AUTHOR_MAX_CHARS,
            });
        }
        if input.chars().any(char::is_control) {
            return Err(InvalidValue::AuthorNotPrintable);
        }
        Ok(input.to_string())
    }

    /// Validate every field of this settings value.
    ///
    /// Field-level edits are validated as they are entered; this is the final
    /// check before a draft is committed.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidValue`] found.
    pub fn validate(&self) -> Result<(), InvalidValue> {
        if !(Self::BACKUP_COUNT_MIN..=Self::BACKUP_COUNT_MAX).contains(&self.backup_count) {
            return Err(InvalidValue::BackupCountOutOfRange {
                min: Self::BACKUP_COUNT_MIN,
                max: Self::BACKUP_COUNT_MAX,
            });
        }
        Self::validate_author(&self.author)?;
        Ok(())
    }
}

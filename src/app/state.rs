//! Application state
//!
//! The `App` struct owns the committed configuration and the current mode.
//! Dialogs are opened by switching the mode; the options editor mutates the
//! configuration only through [`App::commit_options`].

use std::path::PathBuf;
use tracing::{error, info};

use super::UiState;
use crate::config::Settings;
use crate::paths;
use crate::state::{AboutMode, AppMode, OptionsEditorState};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Committed application settings (the process-wide configuration)
    pub settings: Settings,

    /// Where committed settings are persisted
    pub settings_path: PathBuf,

    /// Current application mode
    pub mode: AppMode,

    /// UI state (scroll positions, status line)
    pub ui: UiState,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application with the given settings, persisting to the
    /// default settings path
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_settings_path(settings, paths::settings_path())
    }

    /// Create a new application persisting settings to a specific path
    #[must_use]
    pub const fn with_settings_path(settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            settings,
            settings_path,
            mode: AppMode::Normal,
            ui: UiState::new(),
            should_quit: false,
        }
    }

    /// Open the about dialog.
    ///
    /// Does nothing if a dialog is already open. Mutates no configuration
    /// state; only the mode and the transient scroll position change.
    pub fn open_about(&mut self) {
        if self.mode.is_dialog_open() {
            return;
        }
        self.ui.about_scroll = 0;
        self.mode = AppMode::About(AboutMode::new());
        info!("Opened about dialog");
    }

    /// Open the options editor over the committed settings.
    ///
    /// Does nothing if a dialog is already open. The editor receives a copy
    /// of the committed configuration as its draft.
    pub fn open_options(&mut self) {
        if self.mode.is_dialog_open() {
            return;
        }
        self.mode = AppMode::OptionsEditor(OptionsEditorState::new(self.settings.clone()));
        info!("Opened options editor");
    }

    /// Close the current dialog without committing anything.
    ///
    /// For the options editor this is cancellation: the staged draft is
    /// dropped and the committed configuration is untouched.
    pub fn close_dialog(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Validate and save the options editor draft.
    ///
    /// On validation failure the editor stays open with an inline error.
    /// Does nothing when the options editor is not open.
    pub fn save_options(&mut self) {
        let AppMode::OptionsEditor(state) = &mut self.mode else {
            return;
        };

        match state.draft.validate() {
            Ok(()) => {
                let draft = state.draft.clone();
                self.commit_options(draft);
            }
            Err(e) => state.error = Some(e),
        }
    }

    /// Commit new settings atomically and persist them.
    ///
    /// The in-memory commit always succeeds. A persistence failure is logged
    /// and surfaced as a status message rather than propagated; the rest of
    /// the application keeps running with the committed values.
    pub fn commit_options(&mut self, draft: Settings) {
        self.settings = draft;
        self.mode = AppMode::Normal;

        if let Err(e) = self.settings.save_to(&self.settings_path) {
            error!("Failed to save settings: {e:#}");
            self.ui
                .set_status(format!("Options applied, but saving failed: {e:#}"));
        } else {
            info!("Options committed and saved");
            self.ui.set_status("Options saved");
        }
    }

    /// Request application shutdown
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

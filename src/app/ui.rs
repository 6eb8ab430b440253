//! UI-related state: scroll positions and the status line.

/// UI-related state for the application
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Scroll position in the about dialog (clamped during rendering)
    pub about_scroll: usize,

    /// Status message shown on the front panel, if any
    pub status_message: Option<String>,
}

impl UiState {
    /// Create a new UI state with default values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            about_scroll: 0,
            status_message: None,
        }
    }

    /// Set the status message shown on the front panel
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

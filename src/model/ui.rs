//! UI state - transient notices and the settings form

use std::time::{Duration, Instant};

use crate::view::SettingsForm;

/// A transient notice that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI state - notices and the open settings form
#[derive(Debug, Clone)]
pub struct UiState {
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Rendered settings form, present while the settings tab is open
    pub settings_form: Option<SettingsForm>,
    /// Number of full settings form renders (for diagnostics)
    pub settings_renders: u64,
    /// Settings writes issued but not yet reported back
    pub pending_settings_writes: usize,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            transient_message: None,
            settings_form: None,
            settings_renders: 0,
            pending_settings_writes: 0,
        }
    }

    /// Check if the settings form is open
    pub fn has_settings_form(&self) -> bool {
        self.settings_form.is_some()
    }

    /// Whether any settings write is still in flight
    pub fn is_saving_settings(&self) -> bool {
        self.pending_settings_writes > 0
    }

    /// Text of the current notice, if it has not expired
    pub fn notice(&self) -> Option<&str> {
        self.transient_message
            .as_ref()
            .filter(|m| !m.is_expired())
            .map(|m| m.text.as_str())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::commands::CommandId;
use crate::rules::RuleField;

/// Settings form messages (rule list CRUD)
#[derive(Debug, Clone)]
pub enum SettingsMsg {
    /// Open the settings form
    Open,
    /// Close the settings form
    Close,
    /// Append a new empty rule (the "Add" button)
    AddRule,
    /// A text input changed
    SetField {
        index: usize,
        field: RuleField,
        value: String,
    },
    /// Delete the rule at index (the "Delete" button)
    DeleteRule(usize),
}

/// UI-specific messages (transient notices)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Show a transient notice using the configured duration
    Notify(String),
    /// Set a transient message that auto-expires
    SetTransientMessage { text: String, duration_ms: u64 },
    /// Clear the transient message
    ClearTransientMessage,
    /// Periodic tick; expires stale notices
    Tick,
}

/// Application-level messages (commands, persistence results)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Run a registered command
    RunCommand(CommandId),
    /// Settings write completed (async result)
    SettingsSaved(Result<(), String>),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Settings form messages
    Settings(SettingsMsg),
    /// UI messages (notices)
    Ui(UiMsg),
    /// App messages (commands, persistence results)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Run a registered command
    pub fn command(id: CommandId) -> Self {
        Msg::App(AppMsg::RunCommand(id))
    }

    /// Edit a rule field from the settings form
    pub fn set_field(index: usize, field: RuleField, value: impl Into<String>) -> Self {
        Msg::Settings(SettingsMsg::SetField {
            index,
            field,
            value: value.into(),
        })
    }
}

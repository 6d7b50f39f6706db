//! Command types for the Elm-style architecture
//!
//! `CommandId` names the user-invocable actions the extension registers with
//! the host. `Cmd` represents side effects that should be performed after an
//! update.

use std::path::PathBuf;

use crate::model::AppModel;

// ============================================================================
// Command Registry
// ============================================================================

/// Identifies a command that can be invoked from the host's command list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Apply every active substitution rule to the focused document
    ReplaceCharacters,
    /// Open the substitution rule settings form
    OpenSettings,
}

/// A command definition for the host's command list
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Stable identifier used by the host
    pub key: &'static str,
    pub label: &'static str,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::ReplaceCharacters,
        key: "replace-characters",
        label: "Replace predefined characters",
    },
    CommandDef {
        id: CommandId::OpenSettings,
        key: "open-settings",
        label: "Character replacement settings",
    },
];

impl CommandId {
    /// Look up the registry entry for this command
    pub fn def(self) -> &'static CommandDef {
        COMMANDS
            .iter()
            .find(|cmd| cmd.id == self)
            .unwrap_or(&COMMANDS[0])
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// Find a command by its stable key
    pub fn from_key(key: &str) -> Option<Self> {
        COMMANDS.iter().find(|cmd| cmd.key == key).map(|cmd| cmd.id)
    }

    /// Whether the command can run against the current model.
    ///
    /// Replacing requires an open document; the host hides the command
    /// otherwise.
    pub fn is_available(self, model: &AppModel) -> bool {
        match self {
            CommandId::ReplaceCharacters => model.document.is_some(),
            CommandId::OpenSettings => true,
        }
    }
}

/// Commands the host may currently offer
pub fn available_commands(model: &AppModel) -> Vec<&'static CommandDef> {
    COMMANDS
        .iter()
        .filter(|cmd| cmd.id.is_available(model))
        .collect()
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Persist the settings object (fire-and-forget)
    SaveSettings { path: PathBuf, content: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine with another command, flattening `None`
    pub fn and(self, other: Cmd) -> Self {
        match (self, other) {
            (Cmd::None, other) => other,
            (this, Cmd::None) => this,
            (Cmd::Batch(mut cmds), other) => {
                cmds.push(other);
                Cmd::Batch(cmds)
            }
            (this, other) => Cmd::Batch(vec![this, other]),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::SaveSettings { .. } => false,
        }
    }

    /// Number of settings writes this command will issue
    pub fn settings_writes(&self) -> usize {
        match self {
            Cmd::SaveSettings { .. } => 1,
            Cmd::Batch(cmds) => cmds.iter().map(Cmd::settings_writes).sum(),
            _ => 0,
        }
    }
}

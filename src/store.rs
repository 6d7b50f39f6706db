//! Rule store - the canonical in-memory rule set and its persistence
//!
//! Mutations apply to memory immediately and hand back a [`Cmd`] that writes
//! the whole settings object in the background. Callers never wait for the
//! write; later reads see the new state regardless of whether it landed.

use std::path::{Path, PathBuf};

use crate::commands::Cmd;
use crate::rules::{RuleField, RuleSet, SubstitutionRule};
use crate::settings::Settings;

/// Owner of the persisted rule set
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    settings: Settings,
    /// Where settings are persisted (None = memory only)
    path: Option<PathBuf>,
}

impl RuleStore {
    /// Create an in-memory store (nothing is persisted)
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            settings,
            path: None,
        }
    }

    /// Load from `path`, falling back to a single empty rule
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = Settings::load_from(&path);
        Self {
            settings,
            path: Some(path),
        }
    }

    /// Load from the default settings file location
    pub fn load_default() -> Self {
        match crate::config_paths::settings_file() {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config directory available, rules are not persisted");
                Self::default()
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.settings.character_mappings
    }

    /// Snapshot view of the rules, in application order
    pub fn rules(&self) -> &[SubstitutionRule] {
        self.settings.character_mappings.as_slice()
    }

    pub fn len(&self) -> usize {
        self.settings.character_mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.character_mappings.is_empty()
    }

    /// Build the command that persists the current state
    pub fn save(&self) -> Cmd {
        let Some(path) = self.path.clone() else {
            tracing::debug!("Rule store has no path, skipping save");
            return Cmd::None;
        };
        match self.settings.to_json() {
            Ok(content) => Cmd::SaveSettings { path, content },
            Err(e) => {
                tracing::warn!("{:#}", e);
                Cmd::None
            }
        }
    }

    /// Append a rule
    pub fn add(&mut self, rule: SubstitutionRule) -> Cmd {
        self.settings.character_mappings.push(rule);
        tracing::debug!(count = self.len(), "Added rule");
        self.save()
    }

    /// Set the `from` or `to` side of the rule at `index`
    pub fn update(&mut self, index: usize, field: RuleField, value: impl Into<String>) -> Cmd {
        if !self
            .settings
            .character_mappings
            .set_field(index, field, value)
        {
            tracing::debug!(index, "Ignoring update for missing rule");
            return Cmd::None;
        }
        self.save()
    }

    /// Remove the rule at `index`. Never drops below one rule.
    pub fn remove(&mut self, index: usize) -> Cmd {
        match self.settings.character_mappings.remove(index) {
            Some(_) => {
                tracing::debug!(index, count = self.len(), "Removed rule");
                self.save()
            }
            None => {
                tracing::debug!(index, count = self.len(), "Rule removal rejected");
                Cmd::None
            }
        }
    }
}

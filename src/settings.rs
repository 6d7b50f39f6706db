//! Persisted extension settings
//!
//! The whole persisted state is a single flat object:
//!
//! ```json
//! { "characterMappings": [{ "from": "--", "to": " - " }] }
//! ```
//!
//! It is read and written wholesale. Stored data is merged over the defaults,
//! and anything unreadable degrades to the defaults without surfacing an error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;

/// Everything the extension persists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "characterMappings", default)]
    pub character_mappings: RuleSet,
}

impl Settings {
    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn parse_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Malformed settings data, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Read settings from disk. Missing or unreadable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings = Self::parse_or_default(&content);
                tracing::info!(
                    "Loaded {} rule(s) from {}",
                    settings.character_mappings.len(),
                    path.display()
                );
                settings
            }
            Err(e) => {
                tracing::debug!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize for persistence
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize settings")
    }
}

/// Write serialized settings to `path`, creating the parent directory.
///
/// The content goes to a sibling temp file first and is renamed into place,
/// so readers never observe a partially written file.
pub fn write_settings(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let written = std::fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write settings to {}", tmp_path.display()))
        .and_then(|()| {
            std::fs::rename(&tmp_path, path)
                .with_context(|| format!("Failed to move settings into {}", path.display()))
        });
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    written?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}

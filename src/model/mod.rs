//! Application model - the complete state of the extension
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod ui;

pub use document::Document;
pub use ui::{TransientMessage, UiState};

use crate::config::HostConfig;
use crate::store::RuleStore;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The focused document, if any
    pub document: Option<Document>,
    /// Canonical rule set and its persistence
    pub store: RuleStore,
    /// UI state (notices, settings form)
    pub ui: UiState,
    /// Persisted host configuration
    pub config: HostConfig,
}

impl AppModel {
    /// Create a model from a loaded rule store and host config
    pub fn new(store: RuleStore, config: HostConfig) -> Self {
        Self {
            document: None,
            store,
            ui: UiState::new(),
            config,
        }
    }

    /// Load rules and host config from their default locations
    pub fn load() -> Self {
        Self::new(RuleStore::load_default(), HostConfig::load())
    }

    /// Builder: open a document
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }
}

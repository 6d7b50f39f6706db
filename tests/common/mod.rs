//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use set_replace::config::HostConfig;
use set_replace::model::{AppModel, Document};
use set_replace::rules::{RuleSet, SubstitutionRule};
use set_replace::settings::Settings;
use set_replace::store::RuleStore;

/// Shorthand for building a rule
pub fn rule(from: &str, to: &str) -> SubstitutionRule {
    SubstitutionRule::new(from, to)
}

/// In-memory store holding the given rules
pub fn store_with(rules: Vec<SubstitutionRule>) -> RuleStore {
    RuleStore::in_memory(Settings {
        character_mappings: RuleSet::from_rules(rules),
    })
}

/// Create a test model with the given document text and rules (nothing persisted)
pub fn test_model(text: &str, rules: Vec<SubstitutionRule>) -> AppModel {
    AppModel::new(store_with(rules), HostConfig::default())
        .with_document(Document::with_text(text))
}

/// Create a test model with no open document
pub fn test_model_without_document(rules: Vec<SubstitutionRule>) -> AppModel {
    AppModel::new(store_with(rules), HostConfig::default())
}

/// Helper to get document content as string
pub fn document_text(model: &AppModel) -> String {
    model
        .document
        .as_ref()
        .map(|d| d.text())
        .unwrap_or_default()
}

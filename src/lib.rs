//! set-replace - predefined character replacement for editor documents
//!
//! This crate provides the rule store, substitution engine and settings form
//! for a text editor extension, implementing the Elm Architecture pattern.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod engine;
pub mod logging;
pub mod messages;
pub mod model;
pub mod rules;
pub mod runtime;
pub mod settings;
pub mod store;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::{Cmd, CommandId};
pub use config::HostConfig;
pub use engine::{apply, Substitution};
pub use messages::Msg;
pub use model::AppModel;
pub use rules::{RuleField, RuleSet, SubstitutionRule};
pub use settings::Settings;
pub use store::RuleStore;

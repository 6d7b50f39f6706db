//! Runtime tests
//!
//! Settings writes executed on the background writer and fed back through
//! the message channel.

mod common;

use std::time::Duration;

use common::rule;
use set_replace::config::HostConfig;
use set_replace::messages::{Msg, SettingsMsg};
use set_replace::model::{AppModel, Document};
use set_replace::rules::RuleField;
use set_replace::runtime::App;
use set_replace::settings::Settings;
use set_replace::store::RuleStore;
use tempfile::TempDir;

const WAIT: Duration = Duration::from_secs(5);

fn app_with_store(dir: &TempDir) -> App {
    let store = RuleStore::load(dir.path().join("data.json"));
    App::new(AppModel::new(store, HostConfig::default()))
}

#[test]
fn test_mutation_is_persisted_in_background() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with_store(&dir);

    app.dispatch(Msg::set_field(0, RuleField::From, "--"));
    // In-memory state changes immediately
    assert_eq!(app.model().store.rules()[0].from, "--");
    assert!(app.model().ui.is_saving_settings());

    assert!(app.wait_one(WAIT));
    assert!(!app.model().ui.is_saving_settings());

    let saved = Settings::load_from(&dir.path().join("data.json"));
    assert_eq!(saved.character_mappings.get(0), Some(&rule("--", "")));
}

#[test]
fn test_rules_survive_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = app_with_store(&dir);
        app.dispatch(Msg::set_field(0, RuleField::From, "..."));
        assert!(app.wait_one(WAIT));
        app.dispatch(Msg::set_field(0, RuleField::To, "…"));
        assert!(app.wait_one(WAIT));
        app.dispatch(Msg::Settings(SettingsMsg::AddRule));
        assert!(app.wait_one(WAIT));
    }

    let store = RuleStore::load(dir.path().join("data.json"));
    assert_eq!(store.rules(), &[rule("...", "…"), rule("", "")]);
}

#[test]
fn test_failed_settings_write_keeps_memory_state() {
    let dir = TempDir::new().unwrap();
    // A directory where the settings file should be makes the write fail
    let path = dir.path().join("data.json");
    std::fs::create_dir(&path).unwrap();

    let mut app = App::new(AppModel::new(RuleStore::load(&path), HostConfig::default()));
    app.dispatch(Msg::Settings(SettingsMsg::AddRule));
    assert!(app.wait_one(WAIT));

    assert_eq!(app.model().store.len(), 2);
    assert!(!app.model().ui.is_saving_settings());
    // The failed write leaves no temp file behind
    assert!(!dir.path().join("data.json.tmp").exists());
}

#[test]
fn test_back_to_back_mutations_persist_latest_state() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with_store(&dir);

    // A large first write followed by small ones, all issued without waiting
    app.dispatch(Msg::set_field(0, RuleField::From, "x".repeat(256 * 1024)));
    app.dispatch(Msg::Settings(SettingsMsg::AddRule));
    app.dispatch(Msg::set_field(0, RuleField::From, "a"));
    app.dispatch(Msg::set_field(0, RuleField::To, "b"));
    app.dispatch(Msg::set_field(1, RuleField::From, "c"));
    assert_eq!(app.model().ui.pending_settings_writes, 5);

    assert!(app.wait_for_settings(WAIT));
    assert_eq!(app.model().ui.pending_settings_writes, 0);

    let path = dir.path().join("data.json");
    let content = std::fs::read_to_string(&path).unwrap();
    let on_disk: Settings = serde_json::from_str(&content).unwrap();
    assert_eq!(&on_disk, app.model().store.settings());
    assert_eq!(on_disk.character_mappings.as_slice(), &[rule("a", "b"), rule("c", "")]);
}

#[test]
fn test_saving_flag_tracks_every_pending_write() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with_store(&dir);

    app.dispatch(Msg::set_field(0, RuleField::From, "1"));
    app.dispatch(Msg::set_field(0, RuleField::From, "12"));
    assert_eq!(app.model().ui.pending_settings_writes, 2);

    assert!(app.wait_one(WAIT));
    assert!(app.model().ui.is_saving_settings());

    assert!(app.wait_one(WAIT));
    assert!(!app.model().ui.is_saving_settings());
}

#[test]
fn test_replace_command_through_runtime() {
    let store = common::store_with(vec![rule("--", " - ")]);
    let model = AppModel::new(store, HostConfig::default())
        .with_document(Document::with_text("Hello--World"));
    let mut app = App::new(model);

    assert!(app.run_command("replace-characters"));
    assert_eq!(common::document_text(app.model()), "Hello - World");
    assert_eq!(app.model().ui.notice(), Some("Replaced 1 character(s)"));
    // In-memory stores issue no writes
    assert!(!app.model().ui.is_saving_settings());
    assert_eq!(app.pump(), 0);
}

#[test]
fn test_unknown_command_key() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with_store(&dir);
    assert!(!app.run_command("does-not-exist"));
}

#[test]
fn test_pump_without_pending_messages() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with_store(&dir);
    assert_eq!(app.pump(), 0);
}

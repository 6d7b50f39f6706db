//! "Replace predefined characters" command tests
//!
//! End-to-end: rules in the store, command dispatched through update, document
//! content and status notice checked afterwards.

mod common;

use common::{document_text, rule, test_model, test_model_without_document};
use set_replace::commands::{available_commands, CommandId};
use set_replace::messages::{Msg, UiMsg};
use set_replace::rules::RuleField;
use set_replace::update::update;

fn run_replace(model: &mut set_replace::AppModel) {
    update(model, Msg::command(CommandId::ReplaceCharacters));
}

#[test]
fn test_hello_world_scenario() {
    let mut model = test_model("Hello--World", vec![rule("--", " - ")]);
    run_replace(&mut model);

    assert_eq!(document_text(&model), "Hello - World");
    assert_eq!(model.ui.notice(), Some("Replaced 1 character(s)"));
    assert!(model.document.as_ref().unwrap().is_modified);
}

#[test]
fn test_no_matches_reports_distinct_notice() {
    let mut model = test_model("Hello World", vec![rule("--", " - ")]);
    run_replace(&mut model);

    assert_eq!(document_text(&model), "Hello World");
    assert_eq!(model.ui.notice(), Some("No characters found to replace"));
    let doc = model.document.as_ref().unwrap();
    assert!(!doc.is_modified);
    assert_eq!(doc.revision, 0);
}

#[test]
fn test_only_placeholder_rule_reports_no_matches() {
    let mut model = test_model("anything", vec![rule("", "")]);
    run_replace(&mut model);
    assert_eq!(model.ui.notice(), Some("No characters found to replace"));
}

#[test]
fn test_total_counts_across_rules() {
    let mut model = test_model(
        "\"Quote\" -- and... more...",
        vec![rule("--", "–"), rule("...", "…"), rule("\"", "”")],
    );
    run_replace(&mut model);
    assert_eq!(document_text(&model), "”Quote” – and… more…");
    assert_eq!(model.ui.notice(), Some("Replaced 5 character(s)"));
}

#[test]
fn test_identity_rule_still_reports_count() {
    let mut model = test_model("banana", vec![rule("a", "a")]);
    run_replace(&mut model);
    assert_eq!(document_text(&model), "banana");
    assert_eq!(model.ui.notice(), Some("Replaced 3 character(s)"));
}

#[test]
fn test_document_replaced_as_single_edit() {
    let mut model = test_model("a b", vec![rule("a", "x"), rule("b", "y")]);
    run_replace(&mut model);
    assert_eq!(model.document.as_ref().unwrap().revision, 1);
}

#[test]
fn test_notice_cleared_on_request() {
    let mut model = test_model("Hello--World", vec![rule("--", " - ")]);
    run_replace(&mut model);
    assert_eq!(model.ui.notice(), Some("Replaced 1 character(s)"));

    update(&mut model, Msg::Ui(UiMsg::ClearTransientMessage));
    assert_eq!(model.ui.notice(), None);
}

#[test]
fn test_expired_notice_cleared_on_tick() {
    let mut model = test_model("", vec![rule("", "")]);
    update(
        &mut model,
        Msg::Ui(UiMsg::SetTransientMessage {
            text: "old".to_string(),
            duration_ms: 0,
        }),
    );
    update(&mut model, Msg::Ui(UiMsg::Tick));
    assert!(model.ui.transient_message.is_none());
}

// ========================================================================
// Availability
// ========================================================================

#[test]
fn test_unavailable_without_document() {
    let mut model = test_model_without_document(vec![rule("a", "b")]);
    assert!(!CommandId::ReplaceCharacters.is_available(&model));
    assert!(available_commands(&model)
        .iter()
        .all(|c| c.id != CommandId::ReplaceCharacters));

    let cmd = update(&mut model, Msg::command(CommandId::ReplaceCharacters));
    assert!(cmd.is_none());
    assert!(model.ui.notice().is_none());
}

#[test]
fn test_available_with_document() {
    let model = test_model("", vec![rule("a", "b")]);
    assert!(available_commands(&model)
        .iter()
        .any(|c| c.key == "replace-characters"));
}

#[test]
fn test_open_settings_command() {
    let mut model = test_model_without_document(vec![rule("a", "b")]);
    update(&mut model, Msg::command(CommandId::OpenSettings));
    assert!(model.ui.has_settings_form());
}

#[test]
fn test_rules_edited_then_applied() {
    let mut model = test_model("1 + 1", vec![rule("", "")]);
    update(&mut model, Msg::set_field(0, RuleField::From, "+"));
    update(&mut model, Msg::set_field(0, RuleField::To, "plus"));
    run_replace(&mut model);
    assert_eq!(document_text(&model), "1 plus 1");
    assert_eq!(model.ui.notice(), Some("Replaced 1 character(s)"));
}

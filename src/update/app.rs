//! App message handlers (commands, persistence results)

use crate::commands::{Cmd, CommandId};
use crate::engine;
use crate::messages::{AppMsg, SettingsMsg};
use crate::model::AppModel;

use super::settings::update_settings;
use super::ui::notify;

/// Handle app messages (commands, persistence results)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::RunCommand(id) => execute_command(model, id),

        AppMsg::SettingsSaved(result) => {
            model.ui.pending_settings_writes = model.ui.pending_settings_writes.saturating_sub(1);
            if let Err(e) = result {
                // Rules stay as edited in memory; the next mutation retries the write
                tracing::warn!("Failed to persist settings: {}", e);
            }
            None
        }
    }
}

/// Execute a registered command
pub fn execute_command(model: &mut AppModel, id: CommandId) -> Option<Cmd> {
    if !id.is_available(model) {
        tracing::debug!(command = ?id, "Command unavailable, ignoring");
        return None;
    }

    match id {
        CommandId::ReplaceCharacters => replace_characters(model),
        CommandId::OpenSettings => update_settings(model, SettingsMsg::Open),
    }
}

/// Run the substitution engine over the focused document.
///
/// The document is only touched when at least one replacement happened; a
/// run with zero matches leaves it unmodified and shows a distinct notice.
pub fn replace_characters(model: &mut AppModel) -> Option<Cmd> {
    let doc = model.document.as_mut()?;
    let result = engine::apply(&doc.text(), model.store.rules());

    let notice = if result.is_empty() {
        "No characters found to replace".to_string()
    } else {
        doc.set_text(&result.text);
        format!("Replaced {} character(s)", result.replacements)
    };

    notify(model, notice);
    Some(Cmd::Redraw)
}

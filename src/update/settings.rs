//! Settings form message handlers (rule list CRUD)
//!
//! Add and delete rebuild the whole form from the store. Field edits only
//! patch the edited input so the user's typing isn't disturbed.

use crate::commands::Cmd;
use crate::messages::SettingsMsg;
use crate::model::AppModel;
use crate::rules::SubstitutionRule;
use crate::view::SettingsForm;

/// Rebuild the settings form from the current rule set
fn render_form(model: &mut AppModel) {
    model.ui.settings_form = Some(SettingsForm::build(model.store.rules()));
    model.ui.settings_renders += 1;
}

/// Handle settings form messages
pub fn update_settings(model: &mut AppModel, msg: SettingsMsg) -> Option<Cmd> {
    match msg {
        SettingsMsg::Open => {
            render_form(model);
            Some(Cmd::Redraw)
        }

        SettingsMsg::Close => {
            model.ui.settings_form = None;
            Some(Cmd::Redraw)
        }

        SettingsMsg::AddRule => {
            let save = model.store.add(SubstitutionRule::default());
            mark_saving(model, &save);
            if model.ui.has_settings_form() {
                render_form(model);
            }
            Some(save.and(Cmd::Redraw))
        }

        SettingsMsg::SetField {
            index,
            field,
            value,
        } => {
            if let Some(form) = model.ui.settings_form.as_mut() {
                form.set_input(index, field, &value);
            }
            let save = model.store.update(index, field, value);
            mark_saving(model, &save);
            Some(save)
        }

        SettingsMsg::DeleteRule(index) => {
            let save = model.store.remove(index);
            mark_saving(model, &save);
            if model.ui.has_settings_form() {
                render_form(model);
            }
            Some(save.and(Cmd::Redraw))
        }
    }
}

fn mark_saving(model: &mut AppModel, cmd: &Cmd) {
    model.ui.pending_settings_writes += cmd.settings_writes();
}

//! UI message handlers (transient notices)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, TransientMessage};

/// Show a transient notice for the configured duration
pub fn notify(model: &mut AppModel, text: impl Into<String>) {
    let duration = Duration::from_millis(model.config.notice_duration_ms);
    let text = text.into();
    tracing::info!(notice = %text);
    model.ui.transient_message = Some(TransientMessage::new(text, duration));
}

/// Handle UI messages (transient notices)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Notify(text) => {
            notify(model, text);
            Some(Cmd::Redraw)
        }

        UiMsg::SetTransientMessage { text, duration_ms } => {
            model.ui.transient_message =
                Some(TransientMessage::new(text, Duration::from_millis(duration_ms)));
            Some(Cmd::Redraw)
        }

        UiMsg::ClearTransientMessage => {
            model.ui.transient_message = None;
            Some(Cmd::Redraw)
        }

        UiMsg::Tick => {
            let expired = model
                .ui
                .transient_message
                .as_ref()
                .is_some_and(|m| m.is_expired());
            if expired {
                model.ui.transient_message = None;
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}

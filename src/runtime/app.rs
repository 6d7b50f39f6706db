use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::commands::{Cmd, CommandId};
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::settings::write_settings;
use crate::update::update;

/// Single background writer for settings.
///
/// Writes are applied one at a time in the order they were issued, so the
/// file on disk always ends up holding the most recent settings object.
struct SettingsWriter {
    tx: Sender<(PathBuf, String)>,
}

impl SettingsWriter {
    fn spawn(msg_tx: Sender<Msg>) -> Self {
        let (tx, rx) = mpsc::channel::<(PathBuf, String)>();
        std::thread::spawn(move || {
            for (path, content) in rx {
                let result = write_settings(&path, &content).map_err(|e| format!("{:#}", e));
                if msg_tx.send(Msg::App(AppMsg::SettingsSaved(result))).is_err() {
                    break;
                }
            }
        });
        Self { tx }
    }

    fn write(&self, path: PathBuf, content: String) -> Result<(), String> {
        self.tx
            .send((path, content))
            .map_err(|_| "Settings writer has stopped".to_string())
    }
}

/// Headless host: owns the model and runs side effects
pub struct App {
    model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    settings_writer: SettingsWriter,
}

impl App {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let settings_writer = SettingsWriter::spawn(msg_tx.clone());
        Self {
            model,
            msg_tx,
            msg_rx,
            settings_writer,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Sender for feeding messages from other threads
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Run a message through update and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Run a registered command by its stable key (e.g. "replace-characters")
    pub fn run_command(&mut self, key: &str) -> bool {
        match CommandId::from_key(key) {
            Some(id) => {
                self.dispatch(Msg::command(id));
                true
            }
            None => {
                tracing::warn!("Unknown command: {}", key);
                false
            }
        }
    }

    /// Dispatch every message already queued by background work.
    /// Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Wait for one queued message and dispatch it.
    /// Returns false if nothing arrived within `timeout`.
    pub fn wait_one(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            // We hold a sender ourselves, so this cannot happen while `self` lives
            Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Wait until every issued settings write has completed.
    /// Returns false if `timeout` elapsed first.
    pub fn wait_for_settings(&mut self, timeout: Duration) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        while self.model.ui.is_saving_settings() {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            if remaining.is_zero() || !self.wait_one(remaining) {
                return false;
            }
        }
        true
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::SaveSettings { path, content } => {
                if let Err(e) = self.settings_writer.write(path, content) {
                    self.dispatch(Msg::App(AppMsg::SettingsSaved(Err(e))));
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

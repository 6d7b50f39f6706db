//! View layer - pure descriptions of what the host should draw

pub mod settings_form;

pub use settings_form::{AddRow, Button, ButtonStyle, MappingRow, SettingsForm, TextInput};

//! Settings form for the substitution rules
//!
//! A pure description of the form: callers rebuild it from the rule store
//! after every structural change (add/delete) and render it however the host
//! draws widgets. No widget tree or stored callbacks. Controls carry the
//! message they emit when activated.

use crate::messages::{Msg, SettingsMsg};
use crate::rules::{RuleField, SubstitutionRule};

pub const HEADING: &str = "Character Replacement Settings";
pub const DESCRIPTION: &str = "Configure character mappings. Each row defines a character or string to be replaced with another character or string.";
pub const FROM_PLACEHOLDER: &str = "Character(s) to replace";
pub const TO_PLACEHOLDER: &str = "Replacement character(s)";

/// Visual emphasis of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Normal,
    /// Call to action
    Cta,
    /// Destructive action
    Warning,
}

/// A clickable button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub style: ButtonStyle,
}

/// A single-line text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub placeholder: &'static str,
    pub value: String,
}

/// The "Add new mapping" row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRow {
    pub name: &'static str,
    pub description: &'static str,
    pub button: Button,
}

/// One row per rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub index: usize,
    /// "Mapping N", 1-based
    pub name: String,
    pub description: &'static str,
    pub from: TextInput,
    pub to: TextInput,
    /// Absent when this is the only rule
    pub delete: Option<Button>,
}

impl MappingRow {
    fn new(index: usize, rule: &SubstitutionRule, deletable: bool) -> Self {
        Self {
            index,
            name: format!("Mapping {}", index + 1),
            description: "Replace \"from\" with \"to\"",
            from: TextInput {
                placeholder: FROM_PLACEHOLDER,
                value: rule.from.clone(),
            },
            to: TextInput {
                placeholder: TO_PLACEHOLDER,
                value: rule.to.clone(),
            },
            delete: deletable.then_some(Button {
                label: "Delete",
                style: ButtonStyle::Warning,
            }),
        }
    }

    /// The input for one side of the rule
    pub fn input(&self, field: RuleField) -> &TextInput {
        match field {
            RuleField::From => &self.from,
            RuleField::To => &self.to,
        }
    }

    fn input_mut(&mut self, field: RuleField) -> &mut TextInput {
        match field {
            RuleField::From => &mut self.from,
            RuleField::To => &mut self.to,
        }
    }

    /// Message emitted by editing one of the inputs
    pub fn edit_msg(&self, field: RuleField, value: impl Into<String>) -> Msg {
        Msg::set_field(self.index, field, value)
    }

    /// Message emitted by the delete button, if shown
    pub fn delete_msg(&self) -> Option<Msg> {
        self.delete
            .as_ref()
            .map(|_| Msg::Settings(SettingsMsg::DeleteRule(self.index)))
    }
}

/// The whole settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub heading: &'static str,
    pub description: &'static str,
    pub add: AddRow,
    pub rows: Vec<MappingRow>,
}

impl SettingsForm {
    /// Build the form for the given rules (full render)
    pub fn build(rules: &[SubstitutionRule]) -> Self {
        let deletable = rules.len() > 1;
        Self {
            heading: HEADING,
            description: DESCRIPTION,
            add: AddRow {
                name: "Add new mapping",
                description: "Add a new character replacement mapping",
                button: Button {
                    label: "Add",
                    style: ButtonStyle::Cta,
                },
            },
            rows: rules
                .iter()
                .enumerate()
                .map(|(i, rule)| MappingRow::new(i, rule, deletable))
                .collect(),
        }
    }

    /// Message emitted by the add button
    pub fn add_msg(&self) -> Msg {
        Msg::Settings(SettingsMsg::AddRule)
    }

    /// Reflect a typed value in the input without rebuilding the form
    pub fn set_input(&mut self, index: usize, field: RuleField, value: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.input_mut(field).value = value.to_string();
        }
    }

    /// Plain-text rendering for logs and headless hosts
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(self.heading);
        out.push('\n');
        out.push_str(self.description);
        out.push_str("\n\n");
        out.push_str(&format!(
            "{} - {} [{}]\n",
            self.add.name, self.add.description, self.add.button.label
        ));

        for row in &self.rows {
            let show = |input: &TextInput| {
                if input.value.is_empty() {
                    format!("<{}>", input.placeholder)
                } else {
                    format!("\"{}\"", input.value)
                }
            };
            out.push_str(&format!(
                "{}: {} -> {}",
                row.name,
                show(&row.from),
                show(&row.to)
            ));
            if let Some(button) = &row.delete {
                out.push_str(&format!(" [{}]", button.label));
            }
            out.push('\n');
        }
        out
    }
}

//! Substitution rules and the ordered rule set
//!
//! A rule is a literal `from` → `to` pair. The rule set keeps insertion order
//! (rules are applied in sequence) and never drops below a single rule.

use serde::{Deserialize, Serialize};

/// A single literal substitution pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    /// Text to search for
    #[serde(default)]
    pub from: String,
    /// Replacement text
    #[serde(default)]
    pub to: String,
}

impl SubstitutionRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// A rule only runs when both sides are non-empty.
    /// Incomplete rules stay stored so users can fill them in later.
    pub fn is_active(&self) -> bool {
        !self.from.is_empty() && !self.to.is_empty()
    }

    /// Get the value of one side of the rule
    pub fn field(&self, field: RuleField) -> &str {
        match field {
            RuleField::From => &self.from,
            RuleField::To => &self.to,
        }
    }

    /// Set one side of the rule (stored verbatim)
    pub fn set_field(&mut self, field: RuleField, value: impl Into<String>) {
        match field {
            RuleField::From => self.from = value.into(),
            RuleField::To => self.to = value.into(),
        }
    }
}

/// Which side of a rule an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    From,
    To,
}

/// Ordered, non-empty list of substitution rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    /// Build a rule set from a list, falling back to the default when empty
    pub fn from_rules(rules: Vec<SubstitutionRule>) -> Self {
        if rules.is_empty() {
            Self::default()
        } else {
            Self { rules }
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn as_slice(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubstitutionRule> {
        self.rules.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SubstitutionRule> {
        self.rules.get(index)
    }

    /// Number of rules eligible to run
    pub fn active_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_active()).count()
    }

    /// Append a rule at the end
    pub fn push(&mut self, rule: SubstitutionRule) {
        self.rules.push(rule);
    }

    /// Set a field of the rule at `index`. Returns false if out of range.
    pub fn set_field(&mut self, index: usize, field: RuleField, value: impl Into<String>) -> bool {
        match self.rules.get_mut(index) {
            Some(rule) => {
                rule.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Whether a rule can be removed without emptying the set
    pub fn can_remove(&self) -> bool {
        self.rules.len() > 1
    }

    /// Remove the rule at `index`.
    ///
    /// Returns the removed rule, or `None` when the set would become empty
    /// or the index is out of range (both leave the set unchanged).
    pub fn remove(&mut self, index: usize) -> Option<SubstitutionRule> {
        if !self.can_remove() || index >= self.rules.len() {
            return None;
        }
        Some(self.rules.remove(index))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![SubstitutionRule::default()],
        }
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rules = Vec::<SubstitutionRule>::deserialize(deserializer)?;
        Ok(Self::from_rules(rules))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a SubstitutionRule;
    type IntoIter = std::slice::Iter<'a, SubstitutionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

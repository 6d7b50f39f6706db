//! Substitution engine
//!
//! Applies an ordered list of rules to a piece of text. Each active rule
//! replaces every literal occurrence of its `from` text in the output of the
//! previous rule, so later rules see (and may match) earlier replacements.
//!
//! Matching is plain substring equality. Nothing in `from` is ever treated as
//! a wildcard, class or anchor.

use crate::rules::SubstitutionRule;

/// Result of running the engine over a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Text after all rules ran
    pub text: String,
    /// Total number of replacements performed across all rules
    pub replacements: usize,
}

impl Substitution {
    /// True when no rule matched anything
    pub fn is_empty(&self) -> bool {
        self.replacements == 0
    }
}

/// Count non-overlapping occurrences of `needle`, scanning left to right
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.match_indices(needle).count()
}

/// Apply `rules` to `text` in order.
///
/// Inactive rules (empty `from` or `to`) are skipped. The replacement count is
/// taken against each rule's intermediate input, and a rule whose `from`
/// equals its `to` still counts its matches.
pub fn apply(text: &str, rules: &[SubstitutionRule]) -> Substitution {
    let mut result = text.to_string();
    let mut replacements = 0;

    for rule in rules {
        if !rule.is_active() {
            continue;
        }

        let matches = count_occurrences(&result, &rule.from);
        if matches == 0 {
            continue;
        }

        tracing::trace!(from = %rule.from, to = %rule.to, matches, "rule matched");
        replacements += matches;
        result = result.replace(&rule.from, &rule.to);
    }

    Substitution {
        text: result,
        replacements,
    }
}

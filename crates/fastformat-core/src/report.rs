//! Per-rule change reporting.
//!
//! The pipeline records, for every rule it executed, whether that rule
//! changed the text. The report is observability output only — nothing
//! in the pipeline branches on it.

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping of executed rule name to whether it changed the text.
///
/// Iteration and serialization order is alphabetical by rule name, so
/// JSON output is deterministic. Use [`crate::rules::ALL_RULES`] when
/// execution order matters for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransformReport {
    rules: BTreeMap<&'static str, bool>,
}

impl TransformReport {
    /// Create an empty report.
    pub const fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Record whether `rule` changed the text.
    pub fn record(&mut self, rule: &'static str, changed: bool) {
        self.rules.insert(rule, changed);
    }

    /// Whether `rule` ran and changed the text. `None` if it did not run.
    pub fn changed(&self, rule: &str) -> Option<bool> {
        self.rules.get(rule).copied()
    }

    /// Names of rules that changed the text.
    pub fn changed_rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .filter(|(_, changed)| **changed)
            .map(|(name, _)| *name)
    }

    /// Whether any executed rule changed the text.
    pub fn any_changed(&self) -> bool {
        self.rules.values().any(|changed| *changed)
    }

    /// Number of rules that executed.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules executed (e.g., empty input).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(rule, changed)` entries, alphabetical by rule.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.rules.iter().map(|(name, changed)| (*name, *changed))
    }
}

//! Per-scenario results and the aggregated pass/fail report

use crate::diagnostic::Diagnostic;
use crate::scenario::Outcome;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Observed result of one scenario run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario name
    pub name: String,
    /// Observed outcome
    pub outcome: Outcome,
    /// Whether the check phase flagged an unsafe use
    pub potentially_unsafe: bool,
    /// Operations that completed
    pub executed: usize,
    /// Operation that stopped the scenario, if any
    pub halted_at: Option<usize>,
    /// Check-time warnings and errors, then the runtime failure
    pub diagnostics: Vec<Diagnostic>,
    /// Results of reads and tests
    pub observations: Vec<String>,
}

/// One report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Declared expectation
    pub expected: Outcome,
    /// Observed outcome
    pub actual: Outcome,
    /// `actual == expected`
    pub pass: bool,
}

impl ReportEntry {
    /// Compare an observed outcome with its expectation
    #[inline]
    #[must_use]
    pub fn new(expected: Outcome, actual: Outcome) -> Self {
        Self {
            expected,
            actual,
            pass: expected == actual,
        }
    }
}

/// Scenario name to entry, in run order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    entries: IndexMap<String, ReportEntry>,
}

impl Report {
    /// Empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, replacing any earlier entry of the same name
    pub fn record(&mut self, name: impl Into<String>, entry: ReportEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Entry for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.get(name)
    }

    /// Entries in run order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ReportEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of passing entries
    #[must_use]
    pub fn passed(&self) -> usize {
        self.entries.values().filter(|entry| entry.pass).count()
    }

    /// Names of failing entries
    #[must_use]
    pub fn failures(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.pass)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether every entry passed
    #[inline]
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.entries.values().all(|entry| entry.pass)
    }

    /// Process exit code: 0 when every entry passed, 1 otherwise
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.all_passed())
    }

    /// JSON rendering
    ///
    /// # Errors
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary
    #[must_use]
    pub fn render_text(&self) -> String {
        let width = self.entries.keys().map(String::len).max().unwrap_or(0);
        let mut text = String::new();

        text.push_str("=== Raw Type Demonstrations ===\n\n");
        for (name, entry) in &self.entries {
            let status = if entry.pass { "PASS" } else { "FAIL" };
            text.push_str(&format!(
                "{status}  {name:<width$}  expected {:<24} actual {}\n",
                entry.expected.as_str(),
                entry.actual.as_str()
            ));
        }

        text.push_str(&format!(
            "\nScenarios: {}  Passed: {}  Failed: {}\n",
            self.len(),
            self.passed(),
            self.len() - self.passed()
        ));
        text.push_str(&format!(
            "\n=== Result: {} ===\n",
            if self.all_passed() { "PASS" } else { "FAIL" }
        ));
        text
    }
}

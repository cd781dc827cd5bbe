//! Diagnostics produced while checking and executing scenarios

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Simulated compile-time checking
    Check,
    /// Execution against container state
    Runtime,
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Unsafe but accepted
    Warning,
    /// Stops the scenario
    Error,
}

/// A message attached to one operation of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Index of the operation within the scenario
    pub index: usize,
    /// Producing phase
    pub phase: Phase,
    /// Severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Check-time warning
    pub fn warning(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            phase: Phase::Check,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Check-time error
    pub fn rejection(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            phase: Phase::Check,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Runtime failure
    pub fn runtime(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            phase: Phase::Runtime,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Whether this diagnostic stops the scenario
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            Phase::Check => "check",
            Phase::Runtime => "runtime",
        };
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[op {}] {phase} {severity}: {}", self.index, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_phase_and_index() {
        let diag = Diagnostic::rejection(3, "incompatible types");
        assert_eq!(diag.to_string(), "[op 3] check error: incompatible types");
        assert!(diag.is_error());

        let diag = Diagnostic::warning(0, "unchecked call");
        assert_eq!(diag.to_string(), "[op 0] check warning: unchecked call");
        assert!(!diag.is_error());
    }
}

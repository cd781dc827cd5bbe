//! Error types for the runner
//!
//! Simulated outcomes are values, never errors. These errors cover the two
//! ways a run itself can go wrong:
//! - malformed scenario tables (setup errors)
//! - internal defects during dispatch

use crate::container::ContainerId;

/// Fatal runner error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunnerError {
    /// An operation or value refers to an undeclared container
    #[error("configuration error in scenario '{scenario}': unknown container '{id}'")]
    Configuration {
        /// Offending scenario
        scenario: String,
        /// Missing container id
        id: ContainerId,
    },

    /// A container id is declared twice in one scenario
    #[error("configuration error in scenario '{scenario}': container '{id}' declared twice")]
    DuplicateContainer {
        /// Offending scenario
        scenario: String,
        /// Duplicated container id
        id: ContainerId,
    },

    /// Two scenarios in one table share a name
    #[error("configuration error: scenario '{scenario}' defined twice")]
    DuplicateScenario {
        /// Duplicated scenario name
        scenario: String,
    },

    /// Broken runner invariant
    #[error("internal error: {0}")]
    Internal(String),
}

impl RunnerError {
    /// Whether this is a scenario setup error
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::DuplicateContainer { .. }
                | Self::DuplicateScenario { .. }
        )
    }

    /// Whether this is a runner defect
    #[inline]
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

//! Runner configuration

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::DemonstrationRunner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Write container state before and after each operation to the sink
    pub trace: bool,
    /// Stop `run_all` after the first failing report entry
    pub stop_on_first_failure: bool,
}

impl RunnerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With tracing enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// With early stop on the first failing entry
    #[inline]
    #[must_use]
    pub fn with_stop_on_first_failure(mut self, stop: bool) -> Self {
        self.stop_on_first_failure = stop;
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            trace: true,
            stop_on_first_failure: false,
        }
    }
}

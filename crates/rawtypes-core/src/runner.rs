//! Demonstration runner
//!
//! Two phases per scenario:
//! 1. **Check**: [`Checker`] validates every operation; a rejection means
//!    nothing runs.
//! 2. **Execute**: [`Executor`] applies the checked operations to fresh
//!    containers and observes runtime conversion failures.
//!
//! The runner keeps no state between scenarios; only `run_all` accumulates a
//! [`Report`].

use crate::checker::{CheckVerdict, Checker};
use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::executor::Executor;
use crate::report::{Report, ReportEntry, ScenarioResult};
use crate::scenario::{Outcome, Scenario};
use crate::sink::{NullSink, TraceSink};
use std::collections::HashSet;

/// Runs scenarios and compares observed outcomes with their expectations
#[derive(Debug, Clone, Default)]
pub struct DemonstrationRunner {
    config: RunnerConfig,
    checker: Checker,
}

impl DemonstrationRunner {
    /// Create a runner
    #[inline]
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            checker: Checker::new(),
        }
    }

    /// Run one scenario without trace output
    ///
    /// # Errors
    /// See [`DemonstrationRunner::run_scenario_traced`].
    pub fn run_scenario(&self, scenario: &Scenario) -> Result<ScenarioResult, RunnerError> {
        self.run_scenario_traced(scenario, &mut NullSink)
    }

    /// Run one scenario, writing trace lines to `sink`
    ///
    /// # Errors
    /// - [`RunnerError::Configuration`] / [`RunnerError::DuplicateContainer`]
    ///   for malformed scenarios
    /// - [`RunnerError::Internal`] for runner defects
    pub fn run_scenario_traced(
        &self,
        scenario: &Scenario,
        sink: &mut dyn TraceSink,
    ) -> Result<ScenarioResult, RunnerError> {
        let result = match self.checker.check(scenario)? {
            CheckVerdict::Rejected {
                diagnostics,
                index,
                potentially_unsafe,
            } => {
                if self.config.trace {
                    sink.write(&format!("== {}", scenario.name));
                    for diagnostic in &diagnostics {
                        sink.write(&format!("  {diagnostic}"));
                    }
                }
                ScenarioResult {
                    name: scenario.name.clone(),
                    outcome: Outcome::RejectedAtCheckTime,
                    potentially_unsafe,
                    executed: 0,
                    halted_at: Some(index),
                    diagnostics,
                    observations: Vec::new(),
                }
            }
            CheckVerdict::Accepted(checked) => {
                let execution = Executor::new(sink, self.config.trace).run(&checked)?;
                let potentially_unsafe = checked.potentially_unsafe();
                let warned = !checked.warnings().is_empty();
                let mut diagnostics = checked.warnings().to_vec();

                let (outcome, halted_at) = match execution.failure {
                    Some(failure) => {
                        let index = failure.index;
                        diagnostics.push(failure);
                        (Outcome::FailsAtRuntime, Some(index))
                    }
                    None if warned => (Outcome::CompilesWithWarning, None),
                    None => (Outcome::CompilesAndSucceeds, None),
                };

                ScenarioResult {
                    name: scenario.name.clone(),
                    outcome,
                    potentially_unsafe,
                    executed: execution.executed,
                    halted_at,
                    diagnostics,
                    observations: execution.observations,
                }
            }
        };

        tracing::debug!(
            scenario = %result.name,
            outcome = %result.outcome,
            executed = result.executed,
            "scenario finished"
        );
        Ok(result)
    }

    /// Run every scenario without trace output
    ///
    /// # Errors
    /// See [`DemonstrationRunner::run_all_traced`].
    pub fn run_all(&self, scenarios: &[Scenario]) -> Result<Report, RunnerError> {
        self.run_all_traced(scenarios, &mut NullSink)
    }

    /// Run every scenario in order and build the report
    ///
    /// # Errors
    /// - [`RunnerError::DuplicateScenario`] before anything runs if two
    ///   scenarios share a name
    /// - otherwise the first configuration or internal error aborts the run
    pub fn run_all_traced(
        &self,
        scenarios: &[Scenario],
        sink: &mut dyn TraceSink,
    ) -> Result<Report, RunnerError> {
        let mut names = HashSet::with_capacity(scenarios.len());
        if let Some(duplicate) = scenarios.iter().find(|s| !names.insert(s.name.as_str())) {
            return Err(RunnerError::DuplicateScenario {
                scenario: duplicate.name.clone(),
            });
        }

        let mut report = Report::new();

        for scenario in scenarios {
            let result = self.run_scenario_traced(scenario, sink)?;
            let entry = ReportEntry::new(scenario.expected, result.outcome);

            if entry.pass {
                tracing::info!(scenario = %scenario.name, outcome = %result.outcome, "pass");
            } else {
                tracing::warn!(
                    scenario = %scenario.name,
                    expected = %entry.expected,
                    actual = %entry.actual,
                    "fail"
                );
            }
            report.record(scenario.name.clone(), entry);

            if !entry.pass && self.config.stop_on_first_failure {
                break;
            }
        }

        Ok(report)
    }
}

//! rawtypes Core
//!
//! Demonstrates, operation by operation, what happens when generic containers
//! are used through their raw form rather than a parameterized or wildcard
//! type, and where the raw form is still the only legal spelling.
//!
//! # Overview
//!
//! - **Kinds**: [`KindTag`] is a closed runtime kind hierarchy; [`ElementKind`]
//!   is what a container declares about its elements.
//! - **Scenarios**: a [`Scenario`] owns its [`ContainerDecl`]s and an ordered
//!   list of [`Operation`]s, tagged with the [`Outcome`] it demonstrates.
//! - **Check phase**: [`Checker`] simulates compile-time type checking and
//!   hands out a [`CheckedScenario`] only when nothing is rejected.
//! - **Execution phase**: [`Executor`] runs a [`CheckedScenario`] on erased
//!   storage; fetch conversions are the only runtime kind checks.
//! - **Runner**: [`DemonstrationRunner`] ties both phases together and builds
//!   a [`Report`].
//!
//! # Example
//!
//! ```rust
//! use rawtypes_core::prelude::*;
//!
//! let scenario = Scenario::builder("raw-list")
//!     .container("C2", ElementKind::Unconstrained)
//!     .op(Operation::insert("ss", "C2"))
//!     .op(Operation::insert(42, "C2"))
//!     .op(Operation::fetch_as("C2", 1, KindTag::String))
//!     .expect(Outcome::FailsAtRuntime)
//!     .build();
//!
//! let runner = DemonstrationRunner::default();
//! let result = runner.run_scenario(&scenario).unwrap();
//! assert_eq!(result.outcome, Outcome::FailsAtRuntime);
//! assert_eq!(result.executed, 2);
//! ```

#![warn(missing_docs)]

pub mod checker;
pub mod config;
pub mod container;
pub mod diagnostic;
pub mod error;
pub mod executor;
pub mod kind;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod sink;
pub mod value;

// Re-exports
pub use checker::{CheckVerdict, CheckedScenario, Checker, Verdict};
pub use config::RunnerConfig;
pub use container::{Container, ContainerDecl, ContainerId};
pub use diagnostic::{Diagnostic, Phase, Severity};
pub use error::RunnerError;
pub use executor::{Execution, Executor};
pub use kind::{ElementKind, KindTag, TypeExpr};
pub use report::{Report, ReportEntry, ScenarioResult};
pub use runner::DemonstrationRunner;
pub use scenario::{Operation, Outcome, Scenario, ScenarioBuilder};
pub use sink::{NullSink, TraceSink, TracingSink};
pub use value::Value;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and running scenarios
    pub use crate::{
        DemonstrationRunner, ElementKind, KindTag, Operation, Outcome, Report, RunnerConfig,
        RunnerError, Scenario, ScenarioResult, TraceSink, TypeExpr, Value,
    };
}

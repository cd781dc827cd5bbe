//! Testing utilities for the rawtypes workspace
//!
//! Shared fixtures, runners and assertions.

#![allow(missing_docs)]

use rawtypes_core::{
    DemonstrationRunner, ElementKind, KindTag, Operation, Outcome, RunnerConfig, Scenario,
    ScenarioResult, Value,
};

pub fn quiet_runner() -> DemonstrationRunner {
    DemonstrationRunner::new(RunnerConfig::new().with_trace(false))
}

pub fn run(scenario: &Scenario) -> ScenarioResult {
    quiet_runner()
        .run_scenario(scenario)
        .unwrap_or_else(|e| panic!("scenario '{}' is malformed: {e}", scenario.name))
}

pub fn run_traced(scenario: &Scenario) -> (ScenarioResult, Vec<String>) {
    let mut lines: Vec<String> = Vec::new();
    let result = DemonstrationRunner::new(RunnerConfig::new().with_trace(true))
        .run_scenario_traced(scenario, &mut lines)
        .unwrap_or_else(|e| panic!("scenario '{}' is malformed: {e}", scenario.name));
    (result, lines)
}

pub fn assert_outcome(scenario: &Scenario, expected: Outcome) -> ScenarioResult {
    let result = run(scenario);
    assert_eq!(
        result.outcome, expected,
        "scenario '{}' produced {} (diagnostics: {:?})",
        scenario.name, result.outcome, result.diagnostics
    );
    result
}

/// `List<String>` receiving an Integer
pub fn fixed_string_insert_integer() -> Scenario {
    Scenario::builder("fixture-fixed-string")
        .describe("List<String> receiving an Integer")
        .container("C1", ElementKind::FixedType(KindTag::String))
        .op(Operation::insert(42, "C1"))
        .expect(Outcome::RejectedAtCheckTime)
        .build()
}

/// Raw list holding a String then an Integer, read back as String
///
/// Only index 0 holds a String; every other index fails the read.
pub fn raw_mixed_then_cast(index: usize) -> Scenario {
    let expected = if index == 0 {
        Outcome::CompilesWithWarning
    } else {
        Outcome::FailsAtRuntime
    };
    Scenario::builder("fixture-raw-mixed")
        .describe("raw List holding a String then an Integer")
        .container("C2", ElementKind::Unconstrained)
        .op(Operation::insert("ss", "C2"))
        .op(Operation::insert(42, "C2"))
        .op(Operation::fetch_as("C2", index, KindTag::String))
        .expect(expected)
        .build()
}

/// `List<?>` receiving one value
pub fn wildcard_insert(value: Value) -> Scenario {
    Scenario::builder("fixture-wildcard")
        .describe("List<?> receiving one value")
        .container("C3", ElementKind::UnknownWildcard)
        .op(Operation::insert(value, "C3"))
        .build()
}

/// `List<Object>` receiving a nested `List<String>`
pub fn any_type_nested() -> Scenario {
    Scenario::builder("fixture-any-type")
        .describe("List<Object> receiving a nested List<String>")
        .container("C4", ElementKind::AnyType)
        .container("nested", ElementKind::FixedType(KindTag::String))
        .op(Operation::insert(Value::container("nested"), "C4"))
        .expect(Outcome::CompilesWithWarning)
        .build()
}

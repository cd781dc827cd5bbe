//! Every built-in scenario reproduces the outcome it declares.

use pretty_assertions::assert_eq;
use rawtypes_catalog::{builtin, find};
use rawtypes_core::Outcome;
use rawtypes_test_utils::{quiet_runner, run};

#[test]
fn builtin_table_reproduces_expectations() {
    for scenario in builtin() {
        let result = run(scenario);
        assert_eq!(
            result.outcome, scenario.expected,
            "scenario '{}' diagnostics: {:?}",
            scenario.name, result.diagnostics
        );
    }
}

#[test]
fn run_all_passes_on_builtin_table() {
    let report = quiet_runner().run_all(builtin()).unwrap();
    assert_eq!(report.len(), builtin().len());
    assert!(report.failures().is_empty(), "failing: {:?}", report.failures());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn builtin_runs_are_idempotent() {
    let runner = quiet_runner();
    for scenario in builtin() {
        let first = runner.run_scenario(scenario).unwrap();
        let second = runner.run_scenario(scenario).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn table_covers_every_outcome() {
    for outcome in [
        Outcome::CompilesAndSucceeds,
        Outcome::CompilesWithWarning,
        Outcome::RejectedAtCheckTime,
        Outcome::FailsAtRuntime,
    ] {
        assert!(
            builtin().iter().any(|s| s.expected == outcome),
            "no scenario demonstrates {outcome}"
        );
    }
}

#[test]
fn raw_list_cast_stops_after_first_bad_read() {
    let scenario = find("raw-list-string-cast").unwrap();
    let result = run(scenario);
    assert_eq!(result.executed, 3);
    assert_eq!(result.halted_at, Some(3));
    assert_eq!(result.observations, vec!["(String) C2.get(0) = \"ss\"".to_string()]);
}

#[test]
fn mixed_kinds_list_fails_on_integer() {
    let result = run(find("raw-list-mixed-kinds").unwrap());
    assert_eq!(result.halted_at, Some(4));
    let failure = result.diagnostics.last().unwrap();
    assert!(failure.message.contains("Integer cannot be cast to String"));
}

#[test]
fn unsafe_add_fails_on_implicit_read() {
    let result = run(find("unsafe-add-through-raw-alias").unwrap());
    assert!(result.potentially_unsafe);
    assert_eq!(result.executed, 2);
    assert_eq!(result.halted_at, Some(2));
}

#[test]
fn wildcard_sets_count_without_warnings() {
    let result = run(find("common-elements-wildcard-sets").unwrap());
    assert!(!result.potentially_unsafe);
    assert!(result.diagnostics.is_empty());
    assert_eq!(
        result.observations,
        vec!["numElementsInCommon(s1, s2) = 0".to_string()]
    );
}

#[test]
fn instanceof_raw_observations() {
    let result = run(find("instanceof-raw-type").unwrap());
    assert_eq!(
        result.observations,
        vec![
            "&stringList instanceof List = true".to_string(),
            "\"x\" instanceof List = false".to_string(),
        ]
    );
}

//! Built-in scenario table
//!
//! Scenarios are constructed once, on first access, and never change
//! afterwards. They are grouped by what they demonstrate:
//! - [`raw`]: raw containers and raw aliases that compile but fail later
//! - [`parameterized`]: fixed and `Object` element kinds, invariance, numeric subtyping
//! - [`wildcard`]: the unbounded wildcard as the safe stand-in for raw types
//! - [`exceptions`]: class literals and `instanceof`, where raw types stay legal

#![warn(missing_docs)]

pub mod exceptions;
pub mod parameterized;
pub mod raw;
pub mod wildcard;

use once_cell::sync::Lazy;
use rawtypes_core::Scenario;

static BUILTIN: Lazy<Vec<Scenario>> = Lazy::new(|| {
    let mut scenarios = Vec::new();
    scenarios.extend(parameterized::scenarios());
    scenarios.extend(raw::scenarios());
    scenarios.extend(wildcard::scenarios());
    scenarios.extend(exceptions::scenarios());
    scenarios
});

/// Every built-in scenario, in report order
#[must_use]
pub fn builtin() -> &'static [Scenario] {
    &BUILTIN
}

/// Built-in scenario by name
#[must_use]
pub fn find(name: &str) -> Option<&'static Scenario> {
    BUILTIN.iter().find(|scenario| scenario.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = builtin().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), builtin().len());
    }

    #[test]
    fn every_scenario_is_described() {
        for scenario in builtin() {
            assert!(!scenario.description.is_empty(), "{} lacks a description", scenario.name);
        }
    }

    #[test]
    fn find_by_name() {
        assert!(find("fixed-type-rejects-integer").is_some());
        assert!(find("no-such-scenario").is_none());
    }
}

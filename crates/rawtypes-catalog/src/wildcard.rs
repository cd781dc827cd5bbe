//! Unbounded wildcard containers

use rawtypes_core::{ElementKind, KindTag, Operation, Outcome, Scenario, Value};

/// Scenarios in this group
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::builder("wildcard-accepts-null")
            .describe("List<?> allows inserting null and nothing else")
            .container("C3", ElementKind::UnknownWildcard)
            .op(Operation::insert(Value::Null, "C3"))
            .op(Operation::fetch("C3", 0))
            .expect(Outcome::CompilesAndSucceeds)
            .build(),
        Scenario::builder("wildcard-rejects-string")
            .describe("List<?> refuses a String at check time")
            .container("C3", ElementKind::UnknownWildcard)
            .op(Operation::insert("x", "C3"))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
        Scenario::builder("common-elements-wildcard-sets")
            .describe("Set<?> parameters read both sets safely, whatever their element kinds")
            .container("s1", ElementKind::FixedType(KindTag::String))
            .container("s2", ElementKind::FixedType(KindTag::Integer))
            .op(Operation::insert("a", "s1"))
            .op(Operation::insert(1, "s2"))
            .op(Operation::pass("s1", ElementKind::UnknownWildcard))
            .op(Operation::pass("s2", ElementKind::UnknownWildcard))
            .op(Operation::count_common("s1", "s2"))
            .expect(Outcome::CompilesAndSucceeds)
            .build(),
    ]
}

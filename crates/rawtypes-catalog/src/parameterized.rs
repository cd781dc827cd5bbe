//! Parameterized containers: fixed element kinds, `List<Object>` and invariance

use rawtypes_core::{ElementKind, KindTag, Operation, Outcome, Scenario, Value};

const STRINGS: ElementKind = ElementKind::FixedType(KindTag::String);

/// Scenarios in this group
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::builder("fixed-type-rejects-integer")
            .describe("List<String> refuses an Integer before anything runs")
            .container("C1", STRINGS)
            .op(Operation::insert(42, "C1"))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
        Scenario::builder("fixed-type-round-trip")
            .describe("List<String> inserts and reads back without a cast")
            .container("strings", STRINGS)
            .op(Operation::insert("a", "strings"))
            .op(Operation::insert(Value::Null, "strings"))
            .op(Operation::fetch("strings", 0))
            .op(Operation::fetch("strings", 1))
            .expect(Outcome::CompilesAndSucceeds)
            .build(),
        Scenario::builder("numeric-upcast-accepted")
            .describe("List<Number> takes Integer, BigInteger and BigDecimal")
            .container("numbers", ElementKind::FixedType(KindTag::Number))
            .op(Operation::insert(20, "numbers"))
            .op(Operation::insert(Value::BigInt(225_553_135), "numbers"))
            .op(Operation::insert(Value::BigDec("2.5".to_string()), "numbers"))
            .op(Operation::fetch_as("numbers", 1, KindTag::BigInteger))
            .expect(Outcome::CompilesAndSucceeds)
            .build(),
        Scenario::builder("big-integer-into-big-decimal-list")
            .describe("a BigInteger does not fit List<BigDecimal>; siblings are not subtypes")
            .container("decimals", ElementKind::FixedType(KindTag::BigDecimal))
            .op(Operation::insert(Value::BigDec("1.0".to_string()), "decimals"))
            .op(Operation::insert(Value::BigInt(225_553_135), "decimals"))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
        Scenario::builder("any-type-holds-nested-list")
            .describe("List<Object> accepts a List<String>, but the element kind is lost")
            .container("C4", ElementKind::AnyType)
            .container("strings", STRINGS)
            .op(Operation::insert(Value::container("strings"), "C4"))
            .expect(Outcome::CompilesWithWarning)
            .build(),
        Scenario::builder("string-list-to-object-parameter")
            .describe("List<String> is not a List<Object>; generics are invariant")
            .container("strings", STRINGS)
            .op(Operation::pass("strings", ElementKind::AnyType))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
        Scenario::builder("fixed-type-inconvertible-cast")
            .describe("an element of List<String> cannot be cast to Integer")
            .container("strings", STRINGS)
            .op(Operation::insert("7", "strings"))
            .op(Operation::fetch_as("strings", 0, KindTag::Integer))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
    ]
}

//! Raw containers: accepted by the checker, broken at runtime

use rawtypes_core::{ElementKind, KindTag, Operation, Outcome, Scenario, Value};

/// Scenarios in this group
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    vec![
        // The first fetch reads "ss" and succeeds; the second reads 42.
        Scenario::builder("raw-list-string-cast")
            .describe("raw List takes a String and an Integer; treating them as String fails")
            .container("C2", ElementKind::Unconstrained)
            .op(Operation::insert("ss", "C2"))
            .op(Operation::insert(42, "C2"))
            .op(Operation::fetch_as("C2", 0, KindTag::String))
            .op(Operation::fetch_as("C2", 1, KindTag::String))
            .expect(Outcome::FailsAtRuntime)
            .build(),
        Scenario::builder("raw-list-mixed-kinds")
            .describe("a list meant for integers collects a String, an Integer and a BigInteger")
            .container("intList", ElementKind::Unconstrained)
            .op(Operation::insert("ss", "intList"))
            .op(Operation::insert(20, "intList"))
            .op(Operation::insert(Value::BigInt(225_553_135), "intList"))
            .op(Operation::fetch_as("intList", 0, KindTag::String))
            .op(Operation::fetch_as("intList", 1, KindTag::String))
            .op(Operation::fetch_as("intList", 2, KindTag::String))
            .expect(Outcome::FailsAtRuntime)
            .build(),
        Scenario::builder("raw-list-holds-string-list")
            .describe("raw List happily stores a whole List<String> as an element")
            .container("intList", ElementKind::Unconstrained)
            .container("stringList", ElementKind::FixedType(KindTag::String))
            .op(Operation::insert(Value::container("stringList"), "intList"))
            .op(Operation::fetch("intList", 0))
            .expect(Outcome::CompilesWithWarning)
            .build(),
        Scenario::builder("unsafe-add-through-raw-alias")
            .describe("a List<String> passed as raw List receives an Integer; the implicit read cast fails")
            .container("strings", ElementKind::FixedType(KindTag::String))
            .op(Operation::pass("strings", ElementKind::Unconstrained))
            .op(Operation::insert_unchecked(42, "strings"))
            .op(Operation::fetch("strings", 0))
            .expect(Outcome::FailsAtRuntime)
            .build(),
        Scenario::builder("raw-parameter-accepts-string-list")
            .describe("passing List<String> to a raw List parameter compiles with a warning")
            .container("strings", ElementKind::FixedType(KindTag::String))
            .op(Operation::insert("a", "strings"))
            .op(Operation::pass("strings", ElementKind::Unconstrained))
            .expect(Outcome::CompilesWithWarning)
            .build(),
        Scenario::builder("common-elements-raw-sets")
            .describe("counting shared elements through raw sets works, unsafely")
            .container("s1", ElementKind::Unconstrained)
            .container("s2", ElementKind::Unconstrained)
            .op(Operation::insert("a", "s1"))
            .op(Operation::insert(1, "s1"))
            .op(Operation::insert("a", "s2"))
            .op(Operation::count_common("s1", "s2"))
            .expect(Outcome::CompilesWithWarning)
            .build(),
    ]
}

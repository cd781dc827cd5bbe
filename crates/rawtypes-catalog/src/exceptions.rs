//! Where the raw form is still required: class literals and `instanceof`

use rawtypes_core::{ElementKind, KindTag, Operation, Outcome, Scenario, TypeExpr, Value};

const RAW_LIST: TypeExpr = TypeExpr::Container(ElementKind::Unconstrained);

/// Scenarios in this group
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::builder("class-literal-raw")
            .describe("List.class and String.class are legal")
            .op(Operation::class_literal(RAW_LIST))
            .op(Operation::class_literal(TypeExpr::Simple(KindTag::String)))
            .expect(Outcome::CompilesAndSucceeds)
            .build(),
        Scenario::builder("class-literal-parameterized")
            .describe("List<String>.class does not exist")
            .op(Operation::class_literal(TypeExpr::Container(
                ElementKind::FixedType(KindTag::String),
            )))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
        Scenario::builder("class-literal-wildcard")
            .describe("List<?>.class does not exist either")
            .op(Operation::class_literal(TypeExpr::Container(
                ElementKind::UnknownWildcard,
            )))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
        Scenario::builder("instanceof-raw-type")
            .describe("instanceof against the raw List is the idiomatic form")
            .container("stringList", ElementKind::FixedType(KindTag::String))
            .op(Operation::type_check(Value::container("stringList"), RAW_LIST))
            .op(Operation::type_check(Value::from("x"), RAW_LIST))
            .expect(Outcome::CompilesAndSucceeds)
            .build(),
        Scenario::builder("instanceof-parameterized-type")
            .describe("instanceof List<String> is illegal: the type argument is erased")
            .container("stringList", ElementKind::FixedType(KindTag::String))
            .op(Operation::type_check(
                Value::container("stringList"),
                TypeExpr::Container(ElementKind::FixedType(KindTag::String)),
            ))
            .expect(Outcome::RejectedAtCheckTime)
            .build(),
        Scenario::builder("instanceof-then-wildcard-view")
            .describe("after instanceof Set, viewing the value as Set<?> needs no unchecked cast")
            .container("o", ElementKind::FixedType(KindTag::Integer))
            .op(Operation::insert(3, "o"))
            .op(Operation::type_check(Value::container("o"), RAW_LIST))
            .op(Operation::pass("o", ElementKind::UnknownWildcard))
            .op(Operation::fetch_as("o", 0, KindTag::Object))
            .expect(Outcome::CompilesAndSucceeds)
            .build(),
    ]
}

//! Check phase: simulated compile-time validation
//!
//! The checker is the only way to obtain a [`CheckedScenario`], and the
//! executor only accepts a [`CheckedScenario`]. A scenario rejected here
//! never runs a single operation.

use crate::container::ContainerId;
use crate::diagnostic::Diagnostic;
use crate::error::RunnerError;
use crate::kind::{ElementKind, KindTag, TypeExpr};
use crate::scenario::{Operation, Scenario};
use crate::value::Value;
use indexmap::IndexMap;

/// Result of checking a single operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Legal and safe
    Accept,
    /// Legal without a warning, but the scenario is potentially unsafe
    Unsafe,
    /// Legal, but the scenario becomes potentially unsafe
    Warn(String),
    /// Illegal; the scenario is rejected
    Reject(String),
}

/// Scenario that passed the check phase
#[derive(Debug, Clone)]
pub struct CheckedScenario<'a> {
    scenario: &'a Scenario,
    declared: IndexMap<ContainerId, ElementKind>,
    warnings: Vec<Diagnostic>,
    potentially_unsafe: bool,
}

impl<'a> CheckedScenario<'a> {
    /// Underlying scenario
    #[inline]
    #[must_use]
    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }

    /// Declared containers in declaration order
    #[inline]
    #[must_use]
    pub fn declared(&self) -> &IndexMap<ContainerId, ElementKind> {
        &self.declared
    }

    /// Check-time warnings
    #[inline]
    #[must_use]
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Whether any operation was flagged as unsafe, with or without a warning
    #[inline]
    #[must_use]
    pub fn potentially_unsafe(&self) -> bool {
        self.potentially_unsafe
    }
}

/// Outcome of the check phase
#[derive(Debug, Clone)]
pub enum CheckVerdict<'a> {
    /// Every operation is legal
    Accepted(CheckedScenario<'a>),
    /// An operation is illegal
    Rejected {
        /// Warnings raised before the rejection, then the rejection itself
        diagnostics: Vec<Diagnostic>,
        /// Index of the rejected operation
        index: usize,
        /// Whether an earlier operation was flagged as unsafe
        potentially_unsafe: bool,
    },
}

/// Simulated type checker
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker;

impl Checker {
    /// Create a checker
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve container declarations and every reference to them
    ///
    /// # Errors
    /// - [`RunnerError::DuplicateContainer`] if an id is declared twice
    /// - [`RunnerError::Configuration`] if an operation names an undeclared id
    pub fn resolve(
        &self,
        scenario: &Scenario,
    ) -> Result<IndexMap<ContainerId, ElementKind>, RunnerError> {
        let mut declared = IndexMap::with_capacity(scenario.containers.len());
        for decl in &scenario.containers {
            if declared.insert(decl.id.clone(), decl.declared).is_some() {
                return Err(RunnerError::DuplicateContainer {
                    scenario: scenario.name.clone(),
                    id: decl.id.clone(),
                });
            }
        }

        for operation in &scenario.operations {
            for id in operation.referenced_ids() {
                if !declared.contains_key(id) {
                    return Err(RunnerError::Configuration {
                        scenario: scenario.name.clone(),
                        id: id.clone(),
                    });
                }
            }
        }

        Ok(declared)
    }

    /// Check every operation of `scenario` in order
    ///
    /// Stops at the first rejection.
    ///
    /// # Errors
    /// Configuration errors from [`Checker::resolve`].
    pub fn check<'a>(&self, scenario: &'a Scenario) -> Result<CheckVerdict<'a>, RunnerError> {
        let declared = self.resolve(scenario)?;
        let mut warnings = Vec::new();
        let mut potentially_unsafe = false;

        for (index, operation) in scenario.operations.iter().enumerate() {
            match self.check_operation(operation, &declared)? {
                Verdict::Accept => {}
                Verdict::Unsafe => potentially_unsafe = true,
                Verdict::Warn(message) => {
                    tracing::debug!(scenario = %scenario.name, index, %message, "check warning");
                    potentially_unsafe = true;
                    warnings.push(Diagnostic::warning(index, message));
                }
                Verdict::Reject(message) => {
                    tracing::debug!(scenario = %scenario.name, index, %message, "check rejection");
                    warnings.push(Diagnostic::rejection(index, message));
                    return Ok(CheckVerdict::Rejected {
                        diagnostics: warnings,
                        index,
                        potentially_unsafe,
                    });
                }
            }
        }

        Ok(CheckVerdict::Accepted(CheckedScenario {
            scenario,
            declared,
            warnings,
            potentially_unsafe,
        }))
    }

    /// Check one operation against resolved declarations
    ///
    /// # Errors
    /// [`RunnerError::Internal`] if a referenced id was not resolved.
    pub fn check_operation(
        &self,
        operation: &Operation,
        declared: &IndexMap<ContainerId, ElementKind>,
    ) -> Result<Verdict, RunnerError> {
        let lookup = |id: &ContainerId| {
            declared
                .get(id)
                .copied()
                .ok_or_else(|| RunnerError::Internal(format!("unresolved container '{id}'")))
        };

        let verdict = match operation {
            Operation::Insert { value, target } => {
                Self::check_insert(target, lookup(target)?, value)
            }
            Operation::InsertUnchecked { value, target } => Verdict::Warn(format!(
                "unchecked call to add(E) as a member of raw type List; {} reaches {target}: {} unchecked",
                value.kind_of(),
                lookup(target)?
            )),
            Operation::Fetch { target, cast, .. } => {
                Self::check_fetch(target, lookup(target)?, *cast)
            }
            Operation::TypeCheck { asserted, .. } => Self::check_type_test(*asserted),
            Operation::ClassLiteral { ty } => Self::check_class_literal(*ty),
            Operation::CountCommon { left, right } => {
                let raw: Vec<&ContainerId> = [(left, lookup(left)?), (right, lookup(right)?)]
                    .into_iter()
                    .filter(|(_, kind)| kind.is_raw())
                    .map(|(id, _)| id)
                    .collect();
                if raw.is_empty() {
                    Verdict::Accept
                } else {
                    let names: Vec<String> = raw.iter().map(ToString::to_string).collect();
                    Verdict::Warn(format!(
                        "raw type List used for {}; List<?> gives the same reads safely",
                        names.join(", ")
                    ))
                }
            }
            Operation::Pass { source, parameter } => {
                Self::check_pass(source, lookup(source)?, *parameter)
            }
        };

        Ok(verdict)
    }

    /// Insert through the declared type of `target`
    ///
    /// Exact match and upcast are legal for fixed element kinds; a downcast
    /// or an unrelated kind is rejected. Raw and `List<Object>` targets accept
    /// everything: a non-null value warns, null only flags the scenario.
    #[must_use]
    pub fn check_insert(target: &ContainerId, declared: ElementKind, value: &Value) -> Verdict {
        let kind = value.kind_of();
        match declared {
            ElementKind::FixedType(element) => {
                if kind.is_subtype_of(element) {
                    Verdict::Accept
                } else {
                    Verdict::Reject(format!(
                        "incompatible types: {kind} cannot be converted to {element} ({target}: {declared})"
                    ))
                }
            }
            ElementKind::UnknownWildcard => {
                if value.is_null() {
                    Verdict::Accept
                } else {
                    Verdict::Reject(format!(
                        "incompatible types: {kind} cannot be converted to capture of ? ({target}: {declared} accepts only null)"
                    ))
                }
            }
            ElementKind::Unconstrained if !value.is_null() => Verdict::Warn(format!(
                "unchecked call to add(E) as a member of raw type List ({target} receives {kind})"
            )),
            ElementKind::AnyType if !value.is_null() => Verdict::Warn(format!(
                "{kind} stored in {target}: {declared}; its element kind is no longer tracked"
            )),
            ElementKind::Unconstrained | ElementKind::AnyType => Verdict::Unsafe,
        }
    }

    fn check_fetch(target: &ContainerId, declared: ElementKind, cast: Option<KindTag>) -> Verdict {
        match (declared, cast) {
            (ElementKind::FixedType(element), Some(cast))
                if !element.is_subtype_of(cast) && !cast.is_subtype_of(element) =>
            {
                Verdict::Reject(format!(
                    "incompatible types: {element} cannot be converted to {cast} (reading {target}: {declared})"
                ))
            }
            _ => Verdict::Accept,
        }
    }

    /// `instanceof` accepts only reifiable types: simple kinds, the raw form
    /// and the unbounded wildcard
    #[must_use]
    pub fn check_type_test(asserted: TypeExpr) -> Verdict {
        match asserted {
            TypeExpr::Container(element) if element.is_parameterized() => {
                Verdict::Reject(format!("illegal generic type for instanceof: {asserted}"))
            }
            TypeExpr::Simple(KindTag::Null) => {
                Verdict::Reject("null is not a type usable with instanceof".to_string())
            }
            _ => Verdict::Accept,
        }
    }

    /// Class literals exist only for raw and simple types
    #[must_use]
    pub fn check_class_literal(ty: TypeExpr) -> Verdict {
        match ty {
            TypeExpr::Container(element) if !element.is_raw() => {
                Verdict::Reject(format!("cannot select a class literal from {ty}"))
            }
            TypeExpr::Simple(KindTag::Null) => {
                Verdict::Reject("null has no class literal".to_string())
            }
            _ => Verdict::Accept,
        }
    }

    /// Passing a container to a parameter; generic containers are invariant
    #[must_use]
    pub fn check_pass(
        source: &ContainerId,
        declared: ElementKind,
        parameter: ElementKind,
    ) -> Verdict {
        match parameter {
            ElementKind::UnknownWildcard => Verdict::Accept,
            ElementKind::Unconstrained => Verdict::Warn(format!(
                "{source}: {declared} passed as raw List; element kind is lost inside the callee"
            )),
            _ if parameter == declared => Verdict::Accept,
            _ if declared.is_raw() => Verdict::Warn(format!(
                "unchecked conversion: {source}: {declared} passed as {parameter}"
            )),
            _ => Verdict::Reject(format!(
                "incompatible types: {declared} cannot be converted to {parameter} ({source})"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Outcome;
    use proptest::prelude::*;

    fn id(s: &str) -> ContainerId {
        ContainerId::new(s)
    }

    #[test]
    fn fixed_type_rejects_foreign_kind() {
        let verdict = Checker::check_insert(
            &id("C1"),
            ElementKind::FixedType(KindTag::String),
            &Value::from(42),
        );
        assert!(matches!(
            verdict,
            Verdict::Reject(msg) if msg.contains("Integer cannot be converted to String")
        ));
    }

    #[test]
    fn fixed_type_allows_upcast_not_downcast() {
        let numbers = ElementKind::FixedType(KindTag::Number);
        assert_eq!(
            Checker::check_insert(&id("n"), numbers, &Value::BigInt(7)),
            Verdict::Accept
        );

        let decimals = ElementKind::FixedType(KindTag::BigDecimal);
        assert!(matches!(
            Checker::check_insert(&id("d"), decimals, &Value::BigInt(7)),
            Verdict::Reject(_)
        ));
    }

    #[test]
    fn wildcard_accepts_only_null() {
        assert_eq!(
            Checker::check_insert(&id("q"), ElementKind::UnknownWildcard, &Value::Null),
            Verdict::Accept
        );
        assert!(matches!(
            Checker::check_insert(&id("q"), ElementKind::UnknownWildcard, &Value::from("x")),
            Verdict::Reject(_)
        ));
    }

    #[test]
    fn raw_and_any_type_warn() {
        assert!(matches!(
            Checker::check_insert(&id("r"), ElementKind::Unconstrained, &Value::from(1)),
            Verdict::Warn(_)
        ));
        assert!(matches!(
            Checker::check_insert(&id("a"), ElementKind::AnyType, &Value::container("s")),
            Verdict::Warn(_)
        ));
        assert_eq!(
            Checker::check_insert(&id("r"), ElementKind::Unconstrained, &Value::Null),
            Verdict::Unsafe
        );
    }

    #[test]
    fn null_into_raw_flags_without_warning() {
        let scenario = Scenario::builder("raw-null")
            .container("R", ElementKind::Unconstrained)
            .op(Operation::insert(Value::Null, "R"))
            .build();

        match Checker::new().check(&scenario).unwrap() {
            CheckVerdict::Accepted(checked) => {
                assert!(checked.potentially_unsafe());
                assert!(checked.warnings().is_empty());
            }
            CheckVerdict::Rejected { .. } => panic!("null fits a raw list"),
        }
    }

    #[test]
    fn null_flag_carries_into_rejection() {
        let scenario = Scenario::builder("raw-null-then-reject")
            .container("R", ElementKind::Unconstrained)
            .container("q", ElementKind::UnknownWildcard)
            .op(Operation::insert(Value::Null, "R"))
            .op(Operation::insert("x", "q"))
            .build();

        match Checker::new().check(&scenario).unwrap() {
            CheckVerdict::Rejected {
                diagnostics,
                potentially_unsafe,
                ..
            } => {
                assert!(potentially_unsafe);
                assert_eq!(diagnostics.len(), 1);
            }
            CheckVerdict::Accepted(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn instanceof_rules() {
        assert_eq!(
            Checker::check_type_test(TypeExpr::Container(ElementKind::Unconstrained)),
            Verdict::Accept
        );
        assert_eq!(
            Checker::check_type_test(TypeExpr::Container(ElementKind::UnknownWildcard)),
            Verdict::Accept
        );
        assert!(matches!(
            Checker::check_type_test(TypeExpr::Container(ElementKind::FixedType(KindTag::String))),
            Verdict::Reject(msg) if msg.contains("illegal generic type for instanceof")
        ));
    }

    #[test]
    fn class_literal_rules() {
        assert_eq!(
            Checker::check_class_literal(TypeExpr::Container(ElementKind::Unconstrained)),
            Verdict::Accept
        );
        assert_eq!(
            Checker::check_class_literal(TypeExpr::Simple(KindTag::String)),
            Verdict::Accept
        );
        for element in [
            ElementKind::UnknownWildcard,
            ElementKind::AnyType,
            ElementKind::FixedType(KindTag::String),
        ] {
            assert!(matches!(
                Checker::check_class_literal(TypeExpr::Container(element)),
                Verdict::Reject(_)
            ));
        }
    }

    #[test]
    fn pass_is_invariant() {
        let strings = ElementKind::FixedType(KindTag::String);
        assert!(matches!(
            Checker::check_pass(&id("s"), strings, ElementKind::AnyType),
            Verdict::Reject(_)
        ));
        assert_eq!(Checker::check_pass(&id("s"), strings, strings), Verdict::Accept);
        assert_eq!(
            Checker::check_pass(&id("s"), strings, ElementKind::UnknownWildcard),
            Verdict::Accept
        );
        assert!(matches!(
            Checker::check_pass(&id("s"), strings, ElementKind::Unconstrained),
            Verdict::Warn(_)
        ));
        assert!(matches!(
            Checker::check_pass(&id("r"), ElementKind::Unconstrained, strings),
            Verdict::Warn(_)
        ));
    }

    #[test]
    fn inconvertible_cast_rejected() {
        let strings = ElementKind::FixedType(KindTag::String);
        assert!(matches!(
            Checker::check_fetch(&id("s"), strings, Some(KindTag::Integer)),
            Verdict::Reject(_)
        ));
        assert_eq!(
            Checker::check_fetch(&id("s"), strings, Some(KindTag::Object)),
            Verdict::Accept
        );
    }

    #[test]
    fn resolve_reports_missing_id() {
        let scenario = Scenario::builder("broken")
            .container("C1", ElementKind::Unconstrained)
            .op(Operation::insert(1, "C1"))
            .op(Operation::fetch("C9", 0))
            .build();

        let err = Checker::new().resolve(&scenario).unwrap_err();
        assert_eq!(
            err,
            RunnerError::Configuration {
                scenario: "broken".to_string(),
                id: id("C9"),
            }
        );
    }

    #[test]
    fn resolve_reports_duplicate_declaration() {
        let scenario = Scenario::builder("twice")
            .container("C1", ElementKind::Unconstrained)
            .container("C1", ElementKind::AnyType)
            .build();

        assert!(matches!(
            Checker::new().resolve(&scenario),
            Err(RunnerError::DuplicateContainer { .. })
        ));
    }

    #[test]
    fn check_stops_at_first_rejection() {
        let scenario = Scenario::builder("stop")
            .container("raw", ElementKind::Unconstrained)
            .container("q", ElementKind::UnknownWildcard)
            .op(Operation::insert("a", "raw"))
            .op(Operation::insert("x", "q"))
            .op(Operation::insert(1, "q"))
            .expect(Outcome::RejectedAtCheckTime)
            .build();

        match Checker::new().check(&scenario).unwrap() {
            CheckVerdict::Rejected {
                diagnostics,
                index,
                potentially_unsafe,
            } => {
                assert_eq!(index, 1);
                assert!(potentially_unsafe);
                assert_eq!(diagnostics.len(), 2);
                assert!(diagnostics[1].is_error());
            }
            CheckVerdict::Accepted(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn unchecked_insert_always_warns() {
        let scenario = Scenario::builder("alias")
            .container("strings", ElementKind::FixedType(KindTag::String))
            .op(Operation::insert_unchecked(42, "strings"))
            .build();

        match Checker::new().check(&scenario).unwrap() {
            CheckVerdict::Accepted(checked) => {
                assert!(checked.potentially_unsafe());
                assert_eq!(checked.warnings().len(), 1);
            }
            CheckVerdict::Rejected { .. } => panic!("raw alias must pass the check phase"),
        }
    }

    proptest! {
        #[test]
        fn prop_null_fits_every_fixed_type(kind in proptest::sample::select(KindTag::ALL.to_vec())) {
            let verdict = Checker::check_insert(&id("c"), ElementKind::FixedType(kind), &Value::Null);
            prop_assert_eq!(verdict, Verdict::Accept);
        }

        #[test]
        fn prop_wildcard_rejects_non_null(n in any::<i64>(), s in "[a-z]{0,8}") {
            for value in [Value::Int(n), Value::Str(s.clone()), Value::BigInt(i128::from(n))] {
                let verdict = Checker::check_insert(&id("q"), ElementKind::UnknownWildcard, &value);
                prop_assert!(matches!(verdict, Verdict::Reject(_)));
            }
        }
    }
}

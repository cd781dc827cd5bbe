//! Scenarios, their operations and the outcomes they demonstrate

use crate::container::{ContainerDecl, ContainerId};
use crate::kind::{ElementKind, KindTag, TypeExpr};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Observable outcome of running a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Passes the check phase cleanly and runs to completion
    CompilesAndSucceeds,
    /// Runs to completion, but the check phase flagged an unsafe use
    CompilesWithWarning,
    /// Rejected by the check phase; nothing executes
    RejectedAtCheckTime,
    /// Passes the check phase, then a conversion fails during execution
    FailsAtRuntime,
}

impl Outcome {
    /// Kebab-case name used in reports
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::CompilesAndSucceeds => "compiles-and-succeeds",
            Outcome::CompilesWithWarning => "compiles-with-warning",
            Outcome::RejectedAtCheckTime => "rejected-at-check-time",
            Outcome::FailsAtRuntime => "fails-at-runtime",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "op")]
pub enum Operation {
    /// Add `value` to `target` through its declared type
    Insert {
        /// Value to insert
        value: Value,
        /// Target container
        target: ContainerId,
    },
    /// Read element `index` of `target`, converting it to `cast` or to the
    /// target's fixed element kind
    Fetch {
        /// Source container
        target: ContainerId,
        /// Element index
        index: usize,
        /// Explicit conversion kind
        cast: Option<KindTag>,
    },
    /// `instanceof`-style test of `value` against `asserted`
    TypeCheck {
        /// Value under test
        value: Value,
        /// Asserted type
        asserted: TypeExpr,
    },
    /// Add `value` to `target` through a raw-typed alias, bypassing the
    /// target's declared element kind
    InsertUnchecked {
        /// Value to insert
        value: Value,
        /// Target container
        target: ContainerId,
    },
    /// Reference the class literal of `ty`
    ClassLiteral {
        /// Type named by the literal
        ty: TypeExpr,
    },
    /// Count the elements of `left` also present in `right`
    CountCommon {
        /// First operand
        left: ContainerId,
        /// Second operand
        right: ContainerId,
    },
    /// Pass `source` to a parameter declared with element kind `parameter`
    Pass {
        /// Argument container
        source: ContainerId,
        /// Declared element kind of the parameter
        parameter: ElementKind,
    },
}

impl Operation {
    /// Insert a value through the target's declared type
    pub fn insert(value: impl Into<Value>, target: impl Into<ContainerId>) -> Self {
        Self::Insert {
            value: value.into(),
            target: target.into(),
        }
    }

    /// Insert through a raw alias of the target
    pub fn insert_unchecked(value: impl Into<Value>, target: impl Into<ContainerId>) -> Self {
        Self::InsertUnchecked {
            value: value.into(),
            target: target.into(),
        }
    }

    /// Fetch relying on the target's implicit conversion
    pub fn fetch(target: impl Into<ContainerId>, index: usize) -> Self {
        Self::Fetch {
            target: target.into(),
            index,
            cast: None,
        }
    }

    /// Fetch and treat the element as `cast`
    pub fn fetch_as(target: impl Into<ContainerId>, index: usize, cast: KindTag) -> Self {
        Self::Fetch {
            target: target.into(),
            index,
            cast: Some(cast),
        }
    }

    /// `instanceof` test
    pub fn type_check(value: impl Into<Value>, asserted: TypeExpr) -> Self {
        Self::TypeCheck {
            value: value.into(),
            asserted,
        }
    }

    /// Class literal reference
    #[must_use]
    pub fn class_literal(ty: TypeExpr) -> Self {
        Self::ClassLiteral { ty }
    }

    /// Common element count
    pub fn count_common(left: impl Into<ContainerId>, right: impl Into<ContainerId>) -> Self {
        Self::CountCommon {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Pass a container as an argument
    pub fn pass(source: impl Into<ContainerId>, parameter: ElementKind) -> Self {
        Self::Pass {
            source: source.into(),
            parameter,
        }
    }

    /// Every container id this operation refers to, including through values
    #[must_use]
    pub fn referenced_ids(&self) -> Vec<&ContainerId> {
        match self {
            Operation::Insert { value, target } | Operation::InsertUnchecked { value, target } => {
                let mut ids = vec![target];
                ids.extend(value.container_ref());
                ids
            }
            Operation::Fetch { target, .. } => vec![target],
            Operation::TypeCheck { value, .. } => value.container_ref().into_iter().collect(),
            Operation::ClassLiteral { .. } => Vec::new(),
            Operation::CountCommon { left, right } => vec![left, right],
            Operation::Pass { source, .. } => vec![source],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert { value, target } => write!(f, "{target}.add({value})"),
            Operation::InsertUnchecked { value, target } => {
                write!(f, "unsafeAdd({target}, {value})")
            }
            Operation::Fetch {
                target,
                index,
                cast: Some(cast),
            } => write!(f, "({cast}) {target}.get({index})"),
            Operation::Fetch { target, index, .. } => write!(f, "{target}.get({index})"),
            Operation::TypeCheck { value, asserted } => {
                write!(f, "{value} instanceof {asserted}")
            }
            Operation::ClassLiteral { ty } => write!(f, "{ty}.class"),
            Operation::CountCommon { left, right } => {
                write!(f, "numElementsInCommon({left}, {right})")
            }
            Operation::Pass { source, parameter } => write!(f, "call(({parameter}) {source})"),
        }
    }
}

/// Named, immutable demonstration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique name
    pub name: String,
    /// Short human-readable description
    pub description: String,
    /// Containers owned by this scenario
    pub containers: Vec<ContainerDecl>,
    /// Ordered operations
    pub operations: Vec<Operation>,
    /// Outcome the scenario is meant to demonstrate
    pub expected: Outcome,
}

impl Scenario {
    /// Start building a scenario
    pub fn builder(name: impl Into<String>) -> ScenarioBuilder {
        ScenarioBuilder::new(name)
    }
}

/// Builder for [`Scenario`]
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    name: String,
    description: String,
    containers: Vec<ContainerDecl>,
    operations: Vec<Operation>,
    expected: Outcome,
}

impl ScenarioBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            containers: Vec::new(),
            operations: Vec::new(),
            expected: Outcome::CompilesAndSucceeds,
        }
    }

    /// With description
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a container
    #[must_use]
    pub fn container(mut self, id: impl Into<ContainerId>, declared: ElementKind) -> Self {
        self.containers.push(ContainerDecl::new(id, declared));
        self
    }

    /// Append an operation
    #[must_use]
    pub fn op(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Expected outcome
    #[must_use]
    pub fn expect(mut self, expected: Outcome) -> Self {
        self.expected = expected;
        self
    }

    /// Finish
    #[must_use]
    pub fn build(self) -> Scenario {
        Scenario {
            name: self.name,
            description: self.description,
            containers: self.containers,
            operations: self.operations,
            expected: self.expected,
        }
    }
}

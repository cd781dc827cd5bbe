//! Container declarations and their runtime state

use crate::kind::ElementKind;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a container within one scenario
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    /// Create an id
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContainerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Static declaration of a container, as it appears in a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDecl {
    /// Container id
    pub id: ContainerId,
    /// Declared element kind
    pub declared: ElementKind,
}

impl ContainerDecl {
    /// Create a declaration
    #[inline]
    pub fn new(id: impl Into<ContainerId>, declared: ElementKind) -> Self {
        Self {
            id: id.into(),
            declared,
        }
    }
}

/// Runtime state of a declared container
///
/// Storage is erased: the declared kind is only consulted by the checker and
/// by implicit fetch conversions, never on push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: ContainerId,
    declared: ElementKind,
    elements: Vec<Value>,
}

impl Container {
    /// Fresh, empty container for a declaration
    #[must_use]
    pub fn from_decl(decl: &ContainerDecl) -> Self {
        Self {
            id: decl.id.clone(),
            declared: decl.declared,
            elements: Vec::new(),
        }
    }

    /// Container id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    /// Declared element kind
    #[inline]
    #[must_use]
    pub fn declared(&self) -> ElementKind {
        self.declared
    }

    /// Stored elements in insertion order
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the container holds no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a value without any kind check
    pub fn push(&mut self, value: Value) {
        self.elements.push(value);
    }

    /// Element at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Whether an equal element is stored
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.elements.contains(value)
    }

    /// One-line rendering used in trace output, e.g. `C2: List = ["ss", 42]`
    #[must_use]
    pub fn describe(&self) -> String {
        let items: Vec<String> = self.elements.iter().map(ToString::to_string).collect();
        format!("{}: {} = [{}]", self.id, self.declared, items.join(", "))
    }
}

//! Values stored in and read from containers

use crate::container::ContainerId;
use crate::kind::KindTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value or a reference to another container of the same scenario
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum Value {
    /// The null sentinel
    Null,
    /// String literal
    Str(String),
    /// Integer literal
    Int(i64),
    /// Big integer literal
    BigInt(i128),
    /// Big decimal literal, kept in its textual form
    BigDec(String),
    /// Reference to a container declared in the same scenario
    ContainerRef(ContainerId),
}

impl Value {
    /// String value
    #[inline]
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Container reference by id
    #[inline]
    pub fn container(id: impl Into<ContainerId>) -> Self {
        Self::ContainerRef(id.into())
    }

    /// Runtime kind of this value
    #[inline]
    #[must_use]
    pub fn kind_of(&self) -> KindTag {
        match self {
            Value::Null => KindTag::Null,
            Value::Str(_) => KindTag::String,
            Value::Int(_) => KindTag::Integer,
            Value::BigInt(_) => KindTag::BigInteger,
            Value::BigDec(_) => KindTag::BigDecimal,
            Value::ContainerRef(_) => KindTag::Container,
        }
    }

    /// Whether this is the null sentinel
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Referenced container id, if this is a container reference
    #[inline]
    #[must_use]
    pub fn container_ref(&self) -> Option<&ContainerId> {
        match self {
            Value::ContainerRef(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::BigDec(d) => write!(f, "{d}d"),
            Value::ContainerRef(id) => write!(f, "&{id}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

//! Runtime kinds and the element-kind declarations built on them
//!
//! Kinds form a closed single-parent hierarchy rooted at [`KindTag::Object`].
//! [`KindTag::Null`] sits below every kind so the null sentinel can be stored
//! anywhere a reference can.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime classification of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindTag {
    /// Root of the hierarchy
    Object,
    /// Abstract numeric kind
    Number,
    /// Machine integer
    Integer,
    /// Arbitrary precision integer
    BigInteger,
    /// Arbitrary precision decimal
    BigDecimal,
    /// Character string
    String,
    /// Any container, whatever its declared element kind
    Container,
    /// Kind of the null sentinel
    Null,
}

impl KindTag {
    /// Every kind, root first
    pub const ALL: [KindTag; 8] = [
        KindTag::Object,
        KindTag::Number,
        KindTag::Integer,
        KindTag::BigInteger,
        KindTag::BigDecimal,
        KindTag::String,
        KindTag::Container,
        KindTag::Null,
    ];

    /// Direct supertype, `None` for the root and for `Null`
    ///
    /// `Null` has no single parent: it is a subtype of everything and is
    /// special-cased in [`KindTag::is_subtype_of`].
    #[inline]
    #[must_use]
    pub const fn parent(self) -> Option<KindTag> {
        match self {
            KindTag::Object | KindTag::Null => None,
            KindTag::Number | KindTag::String | KindTag::Container => Some(KindTag::Object),
            KindTag::Integer | KindTag::BigInteger | KindTag::BigDecimal => Some(KindTag::Number),
        }
    }

    /// Exact match or upcast along the parent chain
    #[must_use]
    pub fn is_subtype_of(self, other: KindTag) -> bool {
        if self == KindTag::Null {
            return true;
        }
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Display name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            KindTag::Object => "Object",
            KindTag::Number => "Number",
            KindTag::Integer => "Integer",
            KindTag::BigInteger => "BigInteger",
            KindTag::BigDecimal => "BigDecimal",
            KindTag::String => "String",
            KindTag::Container => "List",
            KindTag::Null => "null",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared element kind of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// Raw container: no element constraint at all
    Unconstrained,
    /// Parameterized with a concrete kind
    FixedType(KindTag),
    /// Parameterized with `Object`: accepts anything, but still part of the type system
    AnyType,
    /// Unbounded wildcard: element kind unknown, only null may be inserted
    UnknownWildcard,
}

impl ElementKind {
    /// Kind that an implicit fetch conversion targets, if any
    #[inline]
    #[must_use]
    pub const fn implicit_conversion(self) -> Option<KindTag> {
        match self {
            ElementKind::FixedType(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether the declaration carries a type argument
    #[inline]
    #[must_use]
    pub const fn is_parameterized(self) -> bool {
        matches!(self, ElementKind::FixedType(_) | ElementKind::AnyType)
    }

    /// Whether the declaration is the raw form
    #[inline]
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, ElementKind::Unconstrained)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Unconstrained => f.write_str("List"),
            ElementKind::FixedType(kind) => write!(f, "List<{kind}>"),
            ElementKind::AnyType => f.write_str("List<Object>"),
            ElementKind::UnknownWildcard => f.write_str("List<?>"),
        }
    }
}

/// Type expression used by class literals and type checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeExpr {
    /// A non-generic kind such as `String`
    Simple(KindTag),
    /// A container type in one of its declared forms
    Container(ElementKind),
}

impl TypeExpr {
    /// Kind tested against at runtime; erasure maps every container form to one kind
    #[inline]
    #[must_use]
    pub const fn erased(self) -> KindTag {
        match self {
            TypeExpr::Simple(kind) => kind,
            TypeExpr::Container(_) => KindTag::Container,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Simple(kind) => write!(f, "{kind}"),
            TypeExpr::Container(element) => write!(f, "{element}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_kind() -> impl Strategy<Value = KindTag> {
        proptest::sample::select(KindTag::ALL.to_vec())
    }

    #[test]
    fn numeric_upcast_allowed_downcast_rejected() {
        assert!(KindTag::Integer.is_subtype_of(KindTag::Number));
        assert!(KindTag::BigInteger.is_subtype_of(KindTag::Object));
        assert!(!KindTag::Number.is_subtype_of(KindTag::Integer));
        assert!(!KindTag::BigInteger.is_subtype_of(KindTag::BigDecimal));
    }

    #[test]
    fn unrelated_kinds() {
        assert!(!KindTag::Integer.is_subtype_of(KindTag::String));
        assert!(!KindTag::Container.is_subtype_of(KindTag::String));
        assert!(!KindTag::Object.is_subtype_of(KindTag::Null));
    }

    #[test]
    fn element_kind_display() {
        assert_eq!(ElementKind::Unconstrained.to_string(), "List");
        assert_eq!(ElementKind::FixedType(KindTag::String).to_string(), "List<String>");
        assert_eq!(ElementKind::AnyType.to_string(), "List<Object>");
        assert_eq!(ElementKind::UnknownWildcard.to_string(), "List<?>");
    }

    #[test]
    fn container_exprs_erase_to_container() {
        for element in [
            ElementKind::Unconstrained,
            ElementKind::AnyType,
            ElementKind::UnknownWildcard,
            ElementKind::FixedType(KindTag::Integer),
        ] {
            assert_eq!(TypeExpr::Container(element).erased(), KindTag::Container);
        }
        assert_eq!(TypeExpr::Simple(KindTag::String).erased(), KindTag::String);
    }

    proptest! {
        #[test]
        fn prop_subtype_reflexive(kind in any_kind()) {
            prop_assert!(kind.is_subtype_of(kind));
        }

        #[test]
        fn prop_subtype_transitive(a in any_kind(), b in any_kind(), c in any_kind()) {
            if a.is_subtype_of(b) && b.is_subtype_of(c) {
                prop_assert!(a.is_subtype_of(c));
            }
        }

        #[test]
        fn prop_everything_is_an_object(kind in any_kind()) {
            prop_assert!(kind.is_subtype_of(KindTag::Object));
        }

        #[test]
        fn prop_null_below_every_kind(kind in any_kind()) {
            prop_assert!(KindTag::Null.is_subtype_of(kind));
        }
    }
}

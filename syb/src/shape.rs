//! Structural category of a type for quick identification and dispatch
//!
//! Every [`Data`] type declares one [`Shape`]. A traversal adds the target check on top of it
//! and works with the resulting [`Category`]. The precedence between categories is fixed:
//! target, then sum, then container, then scalar, then record. Because the shape is an
//! associated constant, the choice is made once per concrete type and is the same wherever
//! the type appears in a tree.

use std::any::{Any, TypeId, type_name};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::data::{Alternative, Data};

/// How a type decomposes, independent of what is being searched for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum Shape {
    /// Closed set of alternatives with one active at a time (`Option`, `Result`, enums)
    Sum,
    /// Homogeneous sequence of elements (`Vec`, arrays, map values)
    Container,
    /// Leaf with nothing to decompose (integers, `String`, `bool`)
    Scalar,
    /// Fixed, ordered set of fields (structs, tuples)
    Record,
}

/// What a traversal does with a value of a given type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum Category {
    /// Exactly the target type - apply the transform, never decompose
    Target,
    /// Dispatch into the active alternative
    Sum,
    /// Visit every element in iteration order
    Container,
    /// Stop
    Scalar,
    /// Visit every field in declaration order
    Record,
}

impl Category {
    /// Classify `T` for a traversal whose target is `M`
    #[must_use]
    pub fn of<T: Data, M: Any>() -> Self {
        if TypeId::of::<T>() == TypeId::of::<M>() {
            return Self::Target;
        }
        Self::from(T::SHAPE)
    }
}

impl From<Shape> for Category {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Sum => Self::Sum,
            Shape::Container => Self::Container,
            Shape::Scalar => Self::Scalar,
            Shape::Record => Self::Record,
        }
    }
}

/// Reflected description of a [`Data`] type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Fully qualified type name
    pub type_name:    &'static str,
    /// Structural category
    pub shape:        Shape,
    /// Visited field names in declaration order (records only)
    pub fields:       &'static [&'static str],
    /// Alternatives in declaration order (sums only)
    pub alternatives: Vec<Alternative>,
}

/// Describe `T` through its [`Data`] implementation
#[must_use]
pub fn type_info<T: Data>() -> TypeInfo {
    TypeInfo {
        type_name:    type_name::<T>(),
        shape:        T::SHAPE,
        fields:       T::fields(),
        alternatives: T::alternatives(),
    }
}

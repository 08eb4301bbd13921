//! Structural reflection consumed by the traversal
//!
//! [`Data`] is implemented once per concrete type, either by `#[derive(Data)]` or by the
//! built-in impls for std types. It tells the traversal what a type is ([`Data::SHAPE`]) and
//! how to reach its immediate children ([`Data::gmap_mut`]). Sums additionally describe their
//! alternatives so the traversal can decide, per alternative, whether it holds the target.

use std::any::{Any, TypeId, type_name};

use crate::error::Result;
use crate::shape::Shape;

/// A type the traversal can walk
///
/// Implementations must hand every child to the visitor exactly once per call, in declaration
/// order for fields and iteration order for elements. Only the active alternative of a sum is
/// a child.
///
/// # Derive
///
/// `#[derive(Data)]` covers structs and enums with at least one variant. Everything else is
/// rejected at compile time.
///
/// Unions:
///
/// ```compile_fail
/// #[derive(syb::Data)]
/// union Bits {
///     int:   u32,
///     float: f32,
/// }
/// ```
///
/// Enums without variants:
///
/// ```compile_fail
/// #[derive(syb::Data)]
/// enum Never {}
/// ```
///
/// Borrowed types, since `Data` is `'static`:
///
/// ```compile_fail
/// #[derive(syb::Data)]
/// struct Borrowed<'a> {
///     name: &'a str,
/// }
/// ```
///
/// Unknown keys, on the type:
///
/// ```compile_fail
/// #[derive(syb::Data)]
/// #[data(opaque)]
/// struct Opaque(u8);
/// ```
///
/// or on a field:
///
/// ```compile_fail
/// #[derive(syb::Data)]
/// struct Renamed {
///     #[data(rename = "id")]
///     key: u8,
/// }
/// ```
///
/// Fields must be `Data` themselves:
///
/// ```compile_fail
/// struct Handle;
///
/// #[derive(syb::Data)]
/// struct Holder {
///     handle: Handle,
/// }
/// ```
pub trait Data: Any {
    /// Structural category of this type
    const SHAPE: Shape;

    /// Visit each immediate child
    ///
    /// Leaf types have no children; the default visits nothing.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the visitor.
    fn gmap_mut<V: Visitor>(&mut self, _visitor: &mut V) -> Result<()> { Ok(()) }

    /// Names of the visited fields in declaration order
    ///
    /// Records only. Positional fields are named by their index.
    fn fields() -> &'static [&'static str] { &[] }

    /// Every alternative in declaration order
    ///
    /// Sums only.
    fn alternatives() -> Vec<Alternative> { Vec::new() }

    /// Index into [`Data::alternatives`] of the alternative currently held
    ///
    /// Sums only.
    fn active_alternative(&self) -> Option<usize> { None }

    /// The payload of the active alternative when it is a single value
    ///
    /// Sums only. `None` for empty and multi-field alternatives.
    fn active_payload_mut(&mut self) -> Option<&mut dyn Any> { None }
}

/// Receives each child handed out by [`Data::gmap_mut`]
pub trait Visitor {
    /// Visit one value
    ///
    /// # Errors
    ///
    /// Implementations decide; an error stops the enclosing `gmap_mut`.
    fn visit<D: Data>(&mut self, value: &mut D) -> Result<()>;
}

/// What an alternative of a sum carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Nothing - the distinguished "no value" state
    Empty,
    /// Exactly one value of a known type
    Single {
        /// Type of the value
        type_id:   TypeId,
        /// Name of the type, for diagnostics
        type_name: &'static str,
    },
    /// Several fields, decomposed like a record
    Fields(usize),
}

impl Payload {
    /// Payload holding a single `T`
    #[must_use]
    pub fn single<T: Any>() -> Self {
        Self::Single {
            type_id:   TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Whether the payload is a single value of exactly type `M`
    #[must_use]
    pub fn is_type<M: Any>(&self) -> bool {
        matches!(self, Self::Single { type_id, .. } if *type_id == TypeId::of::<M>())
    }

    /// Whether the alternative carries nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool { matches!(self, Self::Empty | Self::Fields(0)) }
}

/// One alternative of a sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternative {
    /// Variant name
    pub name:    &'static str,
    /// What the variant carries
    pub payload: Payload,
}

impl Alternative {
    /// Describe an alternative
    #[must_use]
    pub const fn new(name: &'static str, payload: Payload) -> Self { Self { name, payload } }
}

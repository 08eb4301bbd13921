//! Procedural macros for syb

mod data_derive;
mod shared;

use proc_macro::TokenStream;

/// Derives `syb::Data`, the structural reflection a traversal walks through.
///
/// Structs become records whose fields are visited in declaration order. Enums become sums
/// with one alternative per variant; a variant with exactly one visited field exposes that
/// field as its typed payload, a variant with none is an empty alternative.
///
/// # Example
///
/// ```ignore
/// #[derive(Data)]
/// struct Order {
///     id:    u64,
///     lines: Vec<Line>,
///     #[data(skip)]
///     cache: Scratch,
/// }
///
/// #[derive(Data)]
/// enum Line {
///     Item { sku: String, qty: u32 },
///     Discount(i64),
///     Blank,
/// }
///
/// #[derive(Data)]
/// #[data(leaf)]
/// struct Scratch(Vec<u8>);
/// ```
///
/// Attributes:
/// - `#[data(skip)]` on a field: the field is never visited
/// - `#[data(leaf)]` on the type: the type is a scalar and is never decomposed
#[proc_macro_derive(Data, attributes(data))]
pub fn derive_data(input: TokenStream) -> TokenStream { data_derive::derive_data_impl(input) }

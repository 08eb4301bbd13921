//! # syb
//!
//! Type-directed traversal and rewrite of nested data.
//!
//! Bind a transform over a target type `M`, then run it over any value implementing [`Data`]:
//! every sub-value whose type is exactly `M` is handed to the transform, in place, and
//! everything else is left structurally intact.
//!
//! ```
//! use syb::{Data, Traversal};
//!
//! #[derive(Data, Debug, PartialEq)]
//! struct Order {
//!     id:    u32,
//!     note:  String,
//!     lines: Vec<Line>,
//! }
//!
//! #[derive(Data, Debug, PartialEq)]
//! enum Line {
//!     Item { sku: String, qty: u32 },
//!     Discount(u32),
//!     Blank,
//! }
//!
//! let mut order = Order {
//!     id:    7,
//!     note:  "rush".to_string(),
//!     lines: vec![
//!         Line::Item { sku: "a-1".to_string(), qty: 2 },
//!         Line::Discount(5),
//!         Line::Blank,
//!     ],
//! };
//!
//! let mut traversal = Traversal::bind(|sku: &mut String| *sku = sku.to_uppercase());
//! let stats = traversal.run(&mut order)?;
//!
//! assert_eq!(order.note, "RUSH");
//! assert_eq!(order.lines[0], Line::Item { sku: "A-1".to_string(), qty: 2 });
//! assert_eq!(stats.matched, 2);
//! # Ok::<(), error_stack::Report<syb::Error>>(())
//! ```
//!
//! Classification happens per concrete type through [`Data::SHAPE`]:
//!
//! - the target type itself is transformed whole and never decomposed
//! - sums (`Option`, `Result`, derived enums) enter their active alternative only; an empty
//!   alternative such as `None` is never matched
//! - containers (`Vec`, arrays, map values, ...) visit elements in iteration order
//! - scalars (numbers, `String`, `#[data(leaf)]` types) stop the descent
//! - records (structs, tuples, `Box`) visit fields in declaration order
//!
//! Subjects must be finite trees. Owned Rust data cannot form cycles, and runaway nesting is
//! reported as [`Error::RecursionLimitExceeded`] once it passes
//! [`TraversalConfig::max_depth`].

extern crate self as syb;

mod config;
mod constants;
mod data;
mod dispatch;
mod error;
mod impls;
mod shape;
mod transform;
mod traversal;

pub use config::TraversalConfig;
pub use constants::{DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV_VAR};
pub use data::{Alternative, Data, Payload, Visitor};
pub use error::{Error, Result};
pub use shape::{Category, Shape, TypeInfo, type_info};
/// Derive macro for [`Data`](trait@Data)
pub use syb_macros::Data;
pub use transform::Transform;
pub use traversal::{Traversal, TraversalStats, everywhere};

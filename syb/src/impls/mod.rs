//! `Data` implementations for std types
//!
//! Which shape each type declares encodes the classification precedence: `Option` and
//! `Result` are sums even though they are iterable, text types are scalars even though they
//! are sequences of characters, and map keys are never handed out because they cannot be
//! mutated in place.

mod container;
mod record;
mod scalar;
mod sum;

//! Per-alternative decisions for the sums a traversal meets
//!
//! For a target `M` and a sum `S`, each alternative of `S` is either the target itself, empty,
//! or something to descend into. The table depends only on the two types, so it is built the
//! first time `S` is met and reused for every later value of `S`, across runs of the same
//! traversal.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use tracing::trace;

use crate::data::{Data, Payload};

/// What to do when an alternative is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    /// The payload is exactly the target - apply the transform to it
    Target,
    /// Nothing to read - never matched, never recursed into
    Empty,
    /// Recurse into the payload
    Descend,
}

impl Role {
    fn for_payload<M: Any>(payload: &Payload) -> Self {
        if payload.is_empty() {
            Self::Empty
        } else if payload.is_type::<M>() {
            Self::Target
        } else {
            Self::Descend
        }
    }
}

/// Role tables keyed by sum type, for one target type
#[derive(Debug, Default)]
pub(crate) struct SumRoles {
    tables: HashMap<TypeId, Vec<Role>>,
}

impl SumRoles {
    /// Role of alternative `active` of sum `S` when searching for `M`
    pub(crate) fn role<S: Data, M: Any>(&mut self, active: usize) -> Role {
        self.tables
            .entry(TypeId::of::<S>())
            .or_insert_with(Self::build::<S, M>)
            .get(active)
            .copied()
            .unwrap_or(Role::Descend)
    }

    /// Number of sum types seen so far
    pub(crate) fn len(&self) -> usize { self.tables.len() }

    fn build<S: Data, M: Any>() -> Vec<Role> {
        let roles: Vec<Role> = S::alternatives()
            .iter()
            .map(|alternative| Role::for_payload::<M>(&alternative.payload))
            .collect();

        trace!(
            sum = type_name::<S>(),
            target = type_name::<M>(),
            ?roles,
            "built sum role table"
        );

        roles
    }
}

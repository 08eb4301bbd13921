//! The visitor that decides, per value, whether to transform, recurse or stop

mod depth;
mod sum_roles;

use std::any::{Any, type_name};
use std::marker::PhantomData;
use std::mem;

use error_stack::Report;
use tracing::{trace, warn};

pub(crate) use self::depth::RecursionDepth;
pub(crate) use self::sum_roles::SumRoles;
use self::sum_roles::Role;
use crate::config::TraversalConfig;
use crate::data::{Data, Visitor};
use crate::error::{Error, Result};
use crate::shape::Category;
use crate::transform::Transform;
use crate::traversal::TraversalStats;

/// Dispatcher for one run of a traversal targeting `M`
///
/// The transform and the sum role cache are borrowed from the traversal, so every value in
/// the tree sees the same transform state and the same tables.
pub(crate) struct Dispatcher<'a, M, T> {
    transform: &'a mut T,
    sum_roles: &'a mut SumRoles,
    max_depth: Option<usize>,
    depth:     RecursionDepth,
    stats:     TraversalStats,
    target:    PhantomData<fn(&mut M)>,
}

impl<'a, M: Any, T: Transform<M>> Dispatcher<'a, M, T> {
    pub(crate) fn new(
        transform: &'a mut T,
        sum_roles: &'a mut SumRoles,
        config: TraversalConfig,
    ) -> Self {
        Self {
            transform,
            sum_roles,
            max_depth: config.max_depth,
            depth: RecursionDepth::ROOT,
            stats: TraversalStats::new(),
            target: PhantomData,
        }
    }

    pub(crate) const fn stats(&self) -> TraversalStats { self.stats }

    fn apply(&mut self, target: &mut M) {
        self.stats.matched += 1;
        self.transform.apply(target);
    }

    /// Apply the transform to a value already classified as the target
    fn invoke<D: Data>(&mut self, value: &mut D) {
        let value: &mut dyn Any = value;
        if let Some(target) = value.downcast_mut::<M>() {
            self.apply(target);
        }
    }

    /// Depth of `D`'s children, or the limit error if they would cross it
    fn child_depth<D: Data>(&self) -> Result<RecursionDepth> {
        let child = self.depth.increment();
        if let Some(limit) = self.max_depth
            && child.get() > limit
        {
            warn!(
                type_name = type_name::<D>(),
                limit, "recursion limit exceeded, stopping traversal"
            );
            return Err(Report::new(Error::RecursionLimitExceeded {
                type_name: type_name::<D>(),
                limit,
            }));
        }
        Ok(child)
    }

    /// Hand each child of `value` back to this dispatcher one level deeper
    fn descend<D: Data>(&mut self, value: &mut D) -> Result<()> {
        let child = self.child_depth::<D>()?;
        let parent = mem::replace(&mut self.depth, child);
        let result = value.gmap_mut(self);
        self.depth = parent;
        result
    }

    fn dispatch_sum<D: Data>(&mut self, value: &mut D) -> Result<()> {
        let Some(active) = value.active_alternative() else {
            return Ok(());
        };

        match self.sum_roles.role::<D, M>(active) {
            Role::Empty => Ok(()),
            Role::Target => {
                let child = self.child_depth::<D>()?;
                self.stats.record_visit(child);
                if let Some(target) = value
                    .active_payload_mut()
                    .and_then(|payload| payload.downcast_mut::<M>())
                {
                    self.apply(target);
                }
                Ok(())
            },
            Role::Descend => self.descend(value),
        }
    }
}

impl<M: Any, T: Transform<M>> Visitor for Dispatcher<'_, M, T> {
    fn visit<D: Data>(&mut self, value: &mut D) -> Result<()> {
        let category = Category::of::<D, M>();
        self.stats.record_visit(self.depth);

        trace!(
            type_name = type_name::<D>(),
            %category,
            depth = self.depth.get(),
            "dispatch"
        );

        match category {
            Category::Target => {
                self.invoke(value);
                Ok(())
            },
            Category::Sum => self.dispatch_sum(value),
            Category::Container | Category::Record => self.descend(value),
            Category::Scalar => Ok(()),
        }
    }
}

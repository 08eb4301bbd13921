//! Binding a transform to a target type and running it over subjects

use std::any::{Any, type_name};
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TraversalConfig;
use crate::data::{Data, Visitor};
use crate::dispatch::{Dispatcher, RecursionDepth, SumRoles};
use crate::error::Result;
use crate::transform::Transform;

/// Counters collected during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    /// Values dispatched, the root included
    pub visited: usize,
    /// Transform invocations
    pub matched: usize,
    /// Deepest level reached, the root being 0
    pub deepest: usize,
}

impl TraversalStats {
    pub(crate) const fn new() -> Self {
        Self {
            visited: 0,
            matched: 0,
            deepest: 0,
        }
    }

    pub(crate) fn record_visit(&mut self, depth: RecursionDepth) {
        self.visited += 1;
        self.deepest = self.deepest.max(depth.get());
    }
}

/// A transform bound to the target type `M`, reusable across subjects
///
/// The traversal owns the transform; state it accumulates persists across runs and can be
/// read back through [`Traversal::transform`] or [`Traversal::into_transform`].
///
/// ```
/// use syb::Traversal;
///
/// let mut subject = (1_i32, String::from("two"), vec![3_i32, 4]);
/// let mut traversal = Traversal::bind(|value: &mut i32| *value *= 10);
/// let stats = traversal.run(&mut subject)?;
///
/// assert_eq!(subject, (10, String::from("two"), vec![30, 40]));
/// assert_eq!(stats.matched, 3);
/// # Ok::<(), error_stack::Report<syb::Error>>(())
/// ```
pub struct Traversal<M, T> {
    transform: T,
    config:    TraversalConfig,
    sum_roles: SumRoles,
    target:    PhantomData<fn(&mut M)>,
}

impl<M: Any, F: FnMut(&mut M)> Traversal<M, F> {
    /// Bind a closure or function taking `&mut M`
    ///
    /// The parameter must be exactly `&mut M`; there is no conversion between target types:
    ///
    /// ```compile_fail
    /// use syb::Traversal;
    ///
    /// let mut traversal = Traversal::<i32, _>::bind(|value: &mut i64| *value += 1);
    /// traversal.run(&mut vec![1_i32]).ok();
    /// ```
    pub fn bind(transform: F) -> Self { Self::with_transform(transform) }
}

impl<M: Any, T: Transform<M>> Traversal<M, T> {
    /// Bind any [`Transform`] over `M`
    ///
    /// A transform over another type is rejected:
    ///
    /// ```compile_fail
    /// use syb::{Transform, Traversal};
    ///
    /// struct Widen;
    ///
    /// impl Transform<i64> for Widen {
    ///     fn apply(&mut self, value: &mut i64) { *value += 1; }
    /// }
    ///
    /// let traversal = Traversal::<i32, _>::with_transform(Widen);
    /// ```
    pub fn with_transform(transform: T) -> Self {
        Self {
            transform,
            config: TraversalConfig::default(),
            sum_roles: SumRoles::default(),
            target: PhantomData,
        }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: TraversalConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub const fn config(&self) -> &TraversalConfig { &self.config }

    /// The bound transform
    pub const fn transform(&self) -> &T { &self.transform }

    /// The bound transform, mutably - e.g. to reset accumulated state between runs
    pub fn transform_mut(&mut self) -> &mut T { &mut self.transform }

    /// Give the transform back
    pub fn into_transform(self) -> T { self.transform }

    /// Apply the transform to every value of type `M` inside `subject`, in place
    ///
    /// Fields are visited in declaration order, container elements in iteration order, and
    /// only the active alternative of a sum is entered. A value of type `M` is handed to the
    /// transform whole and never decomposed further.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded) when
    /// `subject` nests deeper than the configured limit. Matches visited before the limit
    /// was hit have already been transformed.
    pub fn run<S: Data>(&mut self, subject: &mut S) -> Result<TraversalStats> {
        debug!(
            subject = type_name::<S>(),
            target = type_name::<M>(),
            max_depth = ?self.config.max_depth,
            "starting traversal"
        );

        let mut dispatcher = Dispatcher::new(&mut self.transform, &mut self.sum_roles, self.config);
        dispatcher.visit(subject)?;
        let stats = dispatcher.stats();

        debug!(
            visited = stats.visited,
            matched = stats.matched,
            deepest = stats.deepest,
            "traversal complete"
        );

        Ok(stats)
    }
}

impl<M, T> fmt::Debug for Traversal<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("target", &type_name::<M>())
            .field("transform", &type_name::<T>())
            .field("config", &self.config)
            .field("known_sums", &self.sum_roles.len())
            .finish()
    }
}

/// Apply `transform` to every `M` inside `subject` with the default configuration
///
/// # Errors
///
/// See [`Traversal::run`].
pub fn everywhere<S, M, F>(subject: &mut S, transform: F) -> Result<TraversalStats>
where
    S: Data,
    M: Any,
    F: FnMut(&mut M),
{
    Traversal::bind(transform).run(subject)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap, VecDeque};

    use super::*;
    use crate::Error;

    fn increment(value: &mut i32) { *value += 1; }

    #[test]
    fn test_scalar_root_that_is_the_target() {
        let mut subject = 41;
        let stats = everywhere(&mut subject, increment).ok();
        assert_eq!(subject, 42);
        assert_eq!(
            stats,
            Some(TraversalStats {
                visited: 1,
                matched: 1,
                deepest: 0,
            })
        );
    }

    #[test]
    fn test_scalar_root_that_is_not_the_target() {
        let mut subject = String::from("unchanged");
        let stats = everywhere(&mut subject, increment).ok();
        assert_eq!(subject, "unchanged");
        assert_eq!(stats.map(|stats| stats.matched), Some(0));
    }

    #[test]
    fn test_containers_keep_order() {
        let mut seen = Vec::new();
        let mut subject = (vec![3, 1, 2], VecDeque::from([9, 8]), [7, 6]);
        let result = everywhere(&mut subject, |value: &mut i32| seen.push(*value));
        assert!(result.is_ok());
        assert_eq!(seen, [3, 1, 2, 9, 8, 7, 6]);
    }

    #[test]
    fn test_map_values_not_keys() {
        let mut subject = BTreeMap::from([(1, 10), (2, 20)]);
        let result = everywhere(&mut subject, increment);
        assert!(result.is_ok());
        assert_eq!(subject, BTreeMap::from([(1, 11), (2, 21)]));

        let mut subject: HashMap<String, i32> = HashMap::from([("a".to_string(), 1)]);
        let result = everywhere(&mut subject, increment);
        assert!(result.is_ok());
        assert_eq!(subject.get("a"), Some(&2));
    }

    #[test]
    fn test_option_none_is_never_matched() {
        let mut subject: (Option<i32>, Option<i32>) = (None, Some(1));
        let stats = everywhere(&mut subject, increment).ok();
        assert_eq!(subject, (None, Some(2)));
        assert_eq!(stats.map(|stats| stats.matched), Some(1));
    }

    #[test]
    fn test_option_target_short_circuits() {
        let mut subject = vec![Some(1), None];
        let mut traversal = Traversal::bind(|value: &mut Option<i32>| {
            *value = value.map_or(Some(0), |_| None);
        });
        let stats = traversal.run(&mut subject).ok();
        assert_eq!(subject, vec![None, Some(0)]);
        assert_eq!(stats.map(|stats| stats.matched), Some(2));
    }

    #[test]
    fn test_result_descends_into_active_side() {
        let mut subject: Vec<std::result::Result<(i32, u8), String>> =
            vec![Ok((1, 1)), Err("e".to_string())];
        let result = everywhere(&mut subject, increment);
        assert!(result.is_ok());
        assert_eq!(subject, vec![Ok((2, 1)), Err("e".to_string())]);
    }

    #[test]
    fn test_boxed_values_keep_their_own_target_check() {
        let mut subject = Box::new((1, Box::new(2)));
        let result = everywhere(&mut subject, increment);
        assert!(result.is_ok());
        assert_eq!(*subject, (2, Box::new(3)));
    }

    #[test]
    fn test_transform_state_survives_runs() {
        let mut traversal = Traversal::bind({
            let mut calls = 0_usize;
            move |value: &mut i32| {
                calls += 1;
                *value = i32::try_from(calls).unwrap_or(i32::MAX);
            }
        });

        let mut first = vec![0, 0];
        let mut second = (0, 0);
        assert!(traversal.run(&mut first).is_ok());
        assert!(traversal.run(&mut second).is_ok());
        assert_eq!(first, [1, 2]);
        assert_eq!(second, (3, 4));
    }

    #[test]
    fn test_depth_limit() {
        let mut subject = vec![vec![vec![1]]];

        let mut traversal = Traversal::bind(increment).with_config(TraversalConfig::with_max_depth(2));
        let error = traversal
            .run(&mut subject)
            .err()
            .map(|report| report.current_context().clone());
        assert_eq!(
            error,
            Some(Error::RecursionLimitExceeded {
                type_name: type_name::<Vec<i32>>(),
                limit:     2,
            })
        );
        assert_eq!(subject, vec![vec![vec![1]]]);

        let mut traversal = Traversal::bind(increment).with_config(TraversalConfig::with_max_depth(3));
        let stats = traversal.run(&mut subject).ok();
        assert_eq!(subject, vec![vec![vec![2]]]);
        assert_eq!(stats.map(|stats| stats.deepest), Some(3));
    }

    #[test]
    fn test_unbounded_config() {
        let mut subject = vec![vec![vec![vec![1]]]];
        let mut traversal = Traversal::bind(increment).with_config(TraversalConfig::unbounded());
        assert!(traversal.run(&mut subject).is_ok());
        assert_eq!(subject, vec![vec![vec![vec![2]]]]);
    }

    #[test]
    fn test_sum_role_tables_are_reused() {
        let mut traversal = Traversal::bind(increment);
        let mut subject = vec![Some(1), None, Some(3)];
        assert!(traversal.run(&mut subject).is_ok());
        assert!(traversal.run(&mut subject).is_ok());
        assert_eq!(subject, vec![Some(3), None, Some(5)]);
        assert_eq!(traversal.sum_roles.len(), 1);
    }

    #[test]
    fn test_debug_names_the_target() {
        let traversal = Traversal::bind(increment);
        let debug = format!("{traversal:?}");
        assert!(debug.contains("i32"));
        assert!(debug.contains("known_sums: 0"));
    }
}

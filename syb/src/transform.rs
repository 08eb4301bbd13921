//! The operation a traversal applies to every match

/// In-place operation on values of the target type `M`
///
/// Any `FnMut(&mut M)` is a transform. Stateful functors implement the trait directly and are
/// reachable through [`Traversal::transform`](crate::Traversal::transform) once a run completes:
///
/// ```
/// use syb::{Transform, Traversal};
///
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl Transform<i32> for Count {
///     fn apply(&mut self, _value: &mut i32) { self.0 += 1; }
/// }
///
/// let mut traversal = Traversal::<i32, _>::with_transform(Count::default());
/// traversal.run(&mut vec![1, 2, 3])?;
/// traversal.run(&mut (4, 5))?;
/// assert_eq!(traversal.transform().0, 5);
/// # Ok::<(), error_stack::Report<syb::Error>>(())
/// ```
pub trait Transform<M> {
    /// Apply the operation to one matched value
    fn apply(&mut self, value: &mut M);
}

impl<M, F> Transform<M> for F
where
    F: FnMut(&mut M),
{
    fn apply(&mut self, value: &mut M) { self(value) }
}

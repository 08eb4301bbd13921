/// Nesting level of the value being dispatched, the root being 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RecursionDepth(usize);

impl RecursionDepth {
    pub(crate) const ROOT: Self = Self(0);

    /// Level of this value's children
    pub(crate) const fn increment(self) -> Self { Self(self.0.saturating_add(1)) }

    pub(crate) const fn get(self) -> usize { self.0 }
}

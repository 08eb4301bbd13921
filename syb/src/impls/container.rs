use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};

use crate::data::{Data, Visitor};
use crate::error::Result;
use crate::shape::Shape;

/// Visit every element in iteration order, stopping at the first error
fn visit_each<'a, V, D, I>(visitor: &mut V, elements: I) -> Result<()>
where
    V: Visitor,
    D: Data,
    I: IntoIterator<Item = &'a mut D>,
{
    elements
        .into_iter()
        .try_for_each(|element| visitor.visit(element))
}

impl<T: Data> Data for Vec<T> {
    const SHAPE: Shape = Shape::Container;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> Result<()> {
        visit_each(visitor, self.iter_mut())
    }
}

impl<T: Data> Data for VecDeque<T> {
    const SHAPE: Shape = Shape::Container;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> Result<()> {
        visit_each(visitor, self.iter_mut())
    }
}

impl<T: Data> Data for LinkedList<T> {
    const SHAPE: Shape = Shape::Container;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> Result<()> {
        visit_each(visitor, self.iter_mut())
    }
}

impl<T: Data, const N: usize> Data for [T; N] {
    const SHAPE: Shape = Shape::Container;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> Result<()> {
        visit_each(visitor, self.iter_mut())
    }
}

impl<T: Data> Data for Box<[T]> {
    const SHAPE: Shape = Shape::Container;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> Result<()> {
        visit_each(visitor, self.iter_mut())
    }
}

// Maps hand out their values only: a key mutated in place would break the map's ordering
// or hashing invariants.

impl<K: 'static, V: Data> Data for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::Container;

    fn gmap_mut<W: Visitor>(&mut self, visitor: &mut W) -> Result<()> {
        visit_each(visitor, self.values_mut())
    }
}

impl<K: 'static, V: Data, S: 'static> Data for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::Container;

    fn gmap_mut<W: Visitor>(&mut self, visitor: &mut W) -> Result<()> {
        visit_each(visitor, self.values_mut())
    }
}

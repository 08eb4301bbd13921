use crate::data::{Data, Visitor};
use crate::error::Result;
use crate::shape::Shape;

/// Tuples are records with positional fields
macro_rules! impl_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: Data),+> Data for ($($name,)+) {
            const SHAPE: Shape = Shape::Record;

            fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> Result<()> {
                $( visitor.visit(&mut self.$index)?; )+
                Ok(())
            }

            fn fields() -> &'static [&'static str] { &[$(stringify!($index)),+] }
        }
    };
}

impl_tuple!(A: 0);
impl_tuple!(A: 0, B: 1);
impl_tuple!(A: 0, B: 1, C: 2);
impl_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);

// A box is a one-field record so the boxed value gets its own target check: with `M = T`,
// a `Box<T>` must still hand its `T` to the transform.
impl<T: Data> Data for Box<T> {
    const SHAPE: Shape = Shape::Record;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> Result<()> { visitor.visit(&mut **self) }

    fn fields() -> &'static [&'static str] { &["0"] }
}

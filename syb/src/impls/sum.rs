use std::any::Any;

use crate::data::{Alternative, Data, Payload, Visitor};
use crate::shape::Shape;

impl<T: Data> Data for Option<T> {
    const SHAPE: Shape = Shape::Sum;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> crate::Result<()> {
        match self {
            Some(value) => visitor.visit(value),
            None => Ok(()),
        }
    }

    fn alternatives() -> Vec<Alternative> {
        vec![
            Alternative::new("None", Payload::Empty),
            Alternative::new("Some", Payload::single::<T>()),
        ]
    }

    fn active_alternative(&self) -> Option<usize> { Some(usize::from(self.is_some())) }

    fn active_payload_mut(&mut self) -> Option<&mut dyn Any> {
        self.as_mut().map(|value| value as &mut dyn Any)
    }
}

impl<T: Data, E: Data> Data for Result<T, E> {
    const SHAPE: Shape = Shape::Sum;

    fn gmap_mut<V: Visitor>(&mut self, visitor: &mut V) -> crate::Result<()> {
        match self {
            Ok(value) => visitor.visit(value),
            Err(error) => visitor.visit(error),
        }
    }

    fn alternatives() -> Vec<Alternative> {
        vec![
            Alternative::new("Ok", Payload::single::<T>()),
            Alternative::new("Err", Payload::single::<E>()),
        ]
    }

    fn active_alternative(&self) -> Option<usize> { Some(usize::from(self.is_err())) }

    fn active_payload_mut(&mut self) -> Option<&mut dyn Any> {
        match self {
            Ok(value) => Some(value as &mut dyn Any),
            Err(error) => Some(error as &mut dyn Any),
        }
    }
}

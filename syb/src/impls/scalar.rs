use std::ffi::OsString;
use std::marker::PhantomData;
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
};
use std::path::PathBuf;
use std::time::Duration;

use crate::data::Data;
use crate::shape::Shape;

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Data for $ty {
                const SHAPE: Shape = Shape::Scalar;
            }
        )*
    };
}

impl_scalar!(
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    String, &'static str, Box<str>,
    PathBuf, OsString,
    Duration,
);

impl<T: ?Sized + 'static> Data for PhantomData<T> {
    const SHAPE: Shape = Shape::Scalar;
}

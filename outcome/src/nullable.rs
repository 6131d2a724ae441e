use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    string::String,
    vec::Vec,
};

use crate::{Error, ErrorType, ResultState, StatusKind};

/// Whether a payload counts as absent even though it was stored.
///
/// A success holding `None` is still a success. `has_value` and `has_error`
/// use this trait to tell such results apart from ones carrying something usable.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullable for $ty {
                fn is_null(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_null!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    str,
    String,
    Error,
    ErrorType,
    ResultState,
    StatusKind,
);

impl<T: ?Sized> Nullable for Box<T> {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for Vec<T> {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for [T] {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    fn is_null(&self) -> bool {
        false
    }
}

impl<B: ToOwned + ?Sized> Nullable for Cow<'_, B> {
    fn is_null(&self) -> bool {
        false
    }
}

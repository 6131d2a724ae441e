//! Call-site shorthand for building results with `.into()`.
//!
//! A generic result cannot implement both `From<T>` and `From<E>`, so a bare
//! value or error is tagged first. Everything here goes through the named
//! factories on [`Result`] and [`StatusResult`].

use crate::{Result, StatusOnly, StatusResult};

/// A value tagged for the success slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Succeeded<T>(pub T);

/// An error tagged for the failure slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Failed<E>(pub E);

impl<T> Succeeded<T> {
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E> Failed<E> {
    #[must_use]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<T, E> From<Succeeded<T>> for Result<T, E> {
    fn from(Succeeded(value): Succeeded<T>) -> Self {
        Self::from_value(value)
    }
}

impl<T, E> From<Failed<E>> for Result<T, E> {
    fn from(Failed(error): Failed<E>) -> Self {
        Self::from_error(error)
    }
}

impl<T, E, S> From<Succeeded<T>> for StatusResult<T, E, S>
where
    S: StatusOnly,
{
    fn from(Succeeded(value): Succeeded<T>) -> Self {
        Self::from_value(value)
    }
}

impl<T, E, S> From<Failed<E>> for StatusResult<T, E, S>
where
    S: StatusOnly,
{
    fn from(Failed(error): Failed<E>) -> Self {
        Self::from_error(error)
    }
}

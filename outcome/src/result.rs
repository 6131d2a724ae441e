use crate::{Error, Nullable, ResultState};

/// The outcome of an operation that either succeeds with a `T` or fails with an `E`.
///
/// Exactly one payload exists at a time, and which one is decided by the
/// variant alone. Once built, a `Result` never changes state.
///
/// # Examples
///
/// ```
/// use outcome::{Error, ErrorType, Result};
///
/// let answer: Result<i32> = Result::from_value(42);
/// assert!(answer.is_successful());
/// assert_eq!(answer.match_with(|v| v * 2, |_| -1), 84);
///
/// let clash: Result<i32> = Result::from_error(Error::conflict());
/// assert!(clash.has_failed());
/// assert_eq!(clash.match_with(|_| ErrorType::Failure, |e| e.kind()), ErrorType::Conflict);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E = Error> {
    Success(T),
    Failure(E),
}

impl<T, E> Result<T, E> {
    pub const fn from_value(value: T) -> Self {
        Self::Success(value)
    }

    pub const fn from_error(error: E) -> Self {
        Self::Failure(error)
    }

    /// The state this result was constructed in; never [`ResultState::StatusOnly`].
    #[must_use]
    pub const fn state(&self) -> ResultState {
        match self {
            Self::Success(_) => ResultState::Success,
            Self::Failure(_) => ResultState::Failure,
        }
    }

    /// `true` iff this is a success. [`Result::value`] is then `Some` and
    /// [`Result::error`] is `None`; when `false`, the reverse holds.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn has_failed(&self) -> bool {
        !self.is_successful()
    }

    /// Like [`Result::is_successful`], but also requires the stored value not to be null.
    ///
    /// ```
    /// use outcome::Result;
    ///
    /// let empty: Result<Option<u8>> = Result::from_value(None);
    /// assert!(empty.is_successful());
    /// assert!(!empty.has_value());
    /// ```
    #[must_use]
    pub fn has_value(&self) -> bool
    where
        T: Nullable,
    {
        matches!(self, Self::Success(value) if !value.is_null())
    }

    /// Like [`Result::has_failed`], but also requires the stored error not to be null.
    #[must_use]
    pub fn has_error(&self) -> bool
    where
        E: Nullable,
    {
        matches!(self, Self::Failure(error) if !error.is_null())
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Calls `on_success` with the value or `on_failure` with the error.
    ///
    /// Exactly one of the two handlers runs, exactly once.
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Success(value) => Ok(value),
            Result::Failure(error) => Err(error),
        }
    }
}

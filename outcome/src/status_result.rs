use crate::{Error, Nullable, Result, ResultState, StatusOnly, units::NoContent};

/// The outcome of an operation that succeeds with a `T`, fails with an `E`, or
/// completes with a payload-free status `S`.
///
/// `S` is bounded by [`StatusOnly`], so only types declared as status markers
/// are accepted in the third slot.
///
/// # Examples
///
/// ```
/// use outcome::{StatusResult, units::NoContent};
///
/// let result: StatusResult<u32> = StatusResult::from_status(NoContent);
/// assert!(result.is_status_only());
/// assert_eq!(result.match_with(|_| 0, |_| 0, |_| 1), 1);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusResult<T, E = Error, S = NoContent>
where
    S: StatusOnly,
{
    Success(T),
    Failure(E),
    Status(S),
}

impl<T, E, S> StatusResult<T, E, S>
where
    S: StatusOnly,
{
    pub const fn from_value(value: T) -> Self {
        Self::Success(value)
    }

    pub const fn from_error(error: E) -> Self {
        Self::Failure(error)
    }

    pub const fn from_status(status: S) -> Self {
        Self::Status(status)
    }

    /// Widens a two-way result. Its state and payload carry over unchanged.
    pub fn from_binary(result: Result<T, E>) -> Self {
        match result {
            Result::Success(value) => Self::Success(value),
            Result::Failure(error) => Self::Failure(error),
        }
    }

    /// Narrows to a two-way result.
    ///
    /// # Errors
    ///
    /// Returns the status marker when this result is status-only, since a
    /// two-way result has no place to put it.
    pub fn try_into_binary(self) -> core::result::Result<Result<T, E>, S> {
        match self {
            Self::Success(value) => Ok(Result::Success(value)),
            Self::Failure(error) => Ok(Result::Failure(error)),
            Self::Status(status) => Err(status),
        }
    }

    #[must_use]
    pub const fn state(&self) -> ResultState {
        match self {
            Self::Success(_) => ResultState::Success,
            Self::Failure(_) => ResultState::Failure,
            Self::Status(_) => ResultState::StatusOnly,
        }
    }

    /// `true` iff this is a success; the error and status are then absent.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn has_value(&self) -> bool
    where
        T: Nullable,
    {
        matches!(self, Self::Success(value) if !value.is_null())
    }

    /// `true` iff this is a failure; the value and status are then absent.
    #[must_use]
    pub const fn has_failed(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[must_use]
    pub fn has_error(&self) -> bool
    where
        E: Nullable,
    {
        matches!(self, Self::Failure(error) if !error.is_null())
    }

    /// `true` iff this carries a status marker; the value and error are then absent.
    #[must_use]
    pub const fn is_status_only(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    /// Same as [`StatusResult::is_status_only`]: markers carry no data that could be null.
    #[must_use]
    pub const fn has_status_only(&self) -> bool {
        self.is_status_only()
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Status(_) => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::Status(_) => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<S> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Success(_) | Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Status(_) => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::Status(_) => None,
        }
    }

    pub const fn as_ref(&self) -> StatusResult<&T, &E, S> {
        match self {
            Self::Success(value) => StatusResult::Success(value),
            Self::Failure(error) => StatusResult::Failure(error),
            Self::Status(status) => StatusResult::Status(*status),
        }
    }

    /// Calls the handler matching this result's state.
    ///
    /// Exactly one of the three handlers runs, exactly once.
    pub fn match_with<R, V, F, M>(self, on_success: V, on_failure: F, on_status: M) -> R
    where
        V: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
        M: FnOnce(S) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
            Self::Status(status) => on_status(status),
        }
    }
}

impl<T, E, S> From<S> for StatusResult<T, E, S>
where
    S: StatusOnly,
{
    fn from(status: S) -> Self {
        Self::Status(status)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};
    use core::cell::Cell;

    use super::StatusResult;
    use crate::{
        Error, ErrorType, Result, ResultState, StatusKind,
        units::{Accepted, NoContent, NotModified},
    };

    type Fetch = StatusResult<u32, Error, NotModified>;
    type Probe = StatusResult<u8, u8, Accepted>;

    fn exactly_one(result: &StatusResult<i32, &str, StatusKind>) -> bool {
        let flags = [
            result.is_successful(),
            result.has_failed(),
            result.is_status_only(),
        ];
        flags.iter().filter(|flag| **flag).count() == 1
    }

    #[test]
    fn test_from_status() {
        let result: StatusResult<u32> = StatusResult::from_status(NoContent);
        assert!(result.is_status_only());
        assert!(result.has_status_only());
        assert!(!result.is_successful());
        assert!(!result.has_failed());
        assert_eq!(result.state(), ResultState::StatusOnly);
        assert_eq!(result.status(), Some(NoContent));
        assert_eq!(result.value(), None);
        assert_eq!(result.error(), None);
        assert_eq!(result.match_with(|_| 0, |_| 0, |_| 1), 1);
    }

    #[test]
    fn test_from_value_and_error() {
        let hit = Fetch::from_value(7);
        assert!(hit.is_successful());
        assert_eq!(hit.state(), ResultState::Success);
        assert_eq!(hit.status(), None);
        assert_eq!(hit.match_with(|v| v + 1, |_| 0, |_| 0), 8);

        let miss = Fetch::from_error(Error::not_found());
        assert!(miss.has_failed());
        assert!(miss.has_error());
        assert_eq!(miss.state(), ResultState::Failure);
        assert_eq!(
            miss.match_with(|_| ErrorType::Failure, |e| e.kind(), |_| ErrorType::Failure),
            ErrorType::NotFound
        );
    }

    #[test]
    fn test_exactly_one_predicate_holds() {
        let mut samples: Vec<StatusResult<i32, &str, StatusKind>> = vec![
            StatusResult::from_value(0),
            StatusResult::from_value(-3),
            StatusResult::from_error(""),
            StatusResult::from_error("boom"),
        ];
        samples.extend(StatusKind::ALL.iter().copied().map(StatusResult::from_status));

        for result in &samples {
            assert!(exactly_one(result));
            let populated = [
                result.value().is_some(),
                result.error().is_some(),
                result.status().is_some(),
            ];
            assert_eq!(populated.iter().filter(|p| **p).count(), 1);
            assert_eq!(result.value().is_some(), result.is_successful());
            assert_eq!(result.error().is_some(), result.has_failed());
            assert_eq!(result.status().is_some(), result.is_status_only());
        }
    }

    #[test]
    fn test_round_trip() {
        let value = Fetch::from_value(99).match_with(
            |v| v,
            |_| unreachable!("built from a value"),
            |_| unreachable!("built from a value"),
        );
        assert_eq!(value, 99);

        let status = StatusResult::<u8, Error, StatusKind>::from_status(StatusKind::Timeout)
            .match_with(
                |_| unreachable!("built from a status"),
                |_| unreachable!("built from a status"),
                |s| s,
            );
        assert_eq!(status, StatusKind::Timeout);
    }

    #[test]
    fn test_match_runs_exactly_one_handler_once() {
        let calls = [Cell::new(0), Cell::new(0), Cell::new(0)];
        let bump = |i: usize| calls[i].set(calls[i].get() + 1);
        let counts = || calls.iter().map(Cell::get).collect::<Vec<_>>();

        Probe::from_value(1).match_with(|_| bump(0), |_| bump(1), |_| bump(2));
        assert_eq!(counts(), [1, 0, 0]);

        Probe::from_error(1).match_with(|_| bump(0), |_| bump(1), |_| bump(2));
        assert_eq!(counts(), [1, 1, 0]);

        Probe::from_status(Accepted).match_with(|_| bump(0), |_| bump(1), |_| bump(2));
        assert_eq!(counts(), [1, 1, 1]);
    }

    #[test]
    fn test_null_payloads() {
        let null_value: StatusResult<Option<u8>> = StatusResult::from_value(None);
        assert!(null_value.is_successful());
        assert!(!null_value.has_value());

        let null_error: StatusResult<u8, Option<Error>> = StatusResult::from_error(None);
        assert!(null_error.has_failed());
        assert!(!null_error.has_error());
    }

    #[test]
    fn test_status_marker_converts() {
        let result: StatusResult<u8, Error, Accepted> = Accepted.into();
        assert_eq!(result, StatusResult::Status(Accepted));
    }

    #[test]
    fn test_binary_conversions() {
        let widened = Fetch::from_binary(Result::from_value(5));
        assert_eq!(widened, StatusResult::Success(5));

        let narrowed = Fetch::from_error(Error::conflict()).try_into_binary();
        assert_eq!(narrowed, Ok(Result::Failure(Error::conflict())));

        let unchanged = Fetch::from_status(NotModified).try_into_binary();
        assert_eq!(unchanged, Err(NotModified));
    }

    #[test]
    fn test_as_ref_copies_status() {
        let result: StatusResult<u8, Error, StatusKind> =
            StatusResult::from_status(StatusKind::Skipped);
        assert_eq!(result.as_ref().status(), Some(StatusKind::Skipped));
        assert_eq!(result.into_value(), None);
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let result: StatusResult<Vec<u8>, Error, StatusKind> =
            StatusResult::from_value(vec![1, 2]);
        assert_send_sync(&result);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| assert_eq!(result.value().map(Vec::len), Some(2)));
            }
        });
    }
}

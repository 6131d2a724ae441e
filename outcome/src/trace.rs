use core::fmt::Display;

use crate::{Result, ResultState, StatusOnly, StatusResult};

impl<T, E> Result<T, E>
where
    E: Display,
{
    /// Emits one `tracing` event describing this outcome.
    ///
    /// Successes are logged at `DEBUG`; failures at `WARN` with the error's
    /// `Display` output. Nothing is logged unless this is called.
    pub fn trace(&self, operation: &str) -> &Self {
        match self {
            Self::Success(_) => {
                tracing::debug!(operation, state = %ResultState::Success, "operation succeeded");
            }
            Self::Failure(error) => {
                tracing::warn!(
                    operation,
                    state = %ResultState::Failure,
                    %error,
                    "operation failed"
                );
            }
        }
        self
    }
}

impl<T, E, S> StatusResult<T, E, S>
where
    E: Display,
    S: StatusOnly,
{
    /// Emits one `tracing` event describing this outcome.
    ///
    /// Status-only outcomes are logged at `DEBUG` with the marker's name.
    pub fn trace(&self, operation: &str) -> &Self {
        match self {
            Self::Success(_) => {
                tracing::debug!(operation, state = %ResultState::Success, "operation succeeded");
            }
            Self::Failure(error) => {
                tracing::warn!(
                    operation,
                    state = %ResultState::Failure,
                    %error,
                    "operation failed"
                );
            }
            Self::Status(status) => {
                tracing::debug!(
                    operation,
                    state = %ResultState::StatusOnly,
                    status = status.name(),
                    "operation completed without payload"
                );
            }
        }
        self
    }
}

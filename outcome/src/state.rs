use core::fmt;

/// Which variant of a result is active.
///
/// [`crate::Result`] only ever reports `Success` or `Failure`;
/// [`crate::StatusResult`] may report any of the three.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultState {
    /// The operation succeeded and produced a value.
    Success = 0,
    /// The operation failed and produced an error.
    Failure = 1,
    /// The operation completed with a payload-free status marker.
    StatusOnly = 2,
}

/// A raw discriminant that does not name a usable [`ResultState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("unrecognized result state discriminant {0}")]
    Unrecognized(u8),
    #[error("state `{0}` cannot be held by a two-way result")]
    NotBinary(ResultState),
}

impl ResultState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::StatusOnly => "StatusOnly",
        }
    }

    /// Checks that a two-way result could be in this state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotBinary`] for [`ResultState::StatusOnly`].
    pub const fn require_binary(self) -> Result<Self, StateError> {
        match self {
            Self::Success | Self::Failure => Ok(self),
            Self::StatusOnly => Err(StateError::NotBinary(self)),
        }
    }
}

impl TryFrom<u8> for ResultState {
    type Error = StateError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Success),
            1 => Ok(Self::Failure),
            2 => Ok(Self::StatusOnly),
            other => Err(StateError::Unrecognized(other)),
        }
    }
}

impl From<ResultState> for u8 {
    fn from(state: ResultState) -> Self {
        state as Self
    }
}

impl fmt::Display for ResultState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

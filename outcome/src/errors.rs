use alloc::{borrow::Cow, string::String};
use core::fmt;

/// The classification of an [`Error`].
///
/// The set is closed. Finer-grained domains belong in the description or in a
/// dedicated error payload type, not in new variants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A general-purpose failure that does not fit any other category.
    #[default]
    Failure,
    /// An unanticipated fault, such as a broken internal assumption.
    Unexpected,
    /// Invalid input or a violated business rule.
    Validation,
    /// The operation clashes with the current state or version of a resource.
    Conflict,
    /// The requested resource does not exist.
    NotFound,
}

impl ErrorType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::Unexpected => "Unexpected",
            Self::Validation => "Validation",
            Self::Conflict => "Conflict",
            Self::NotFound => "NotFound",
        }
    }

    /// The description an [`Error`] of this kind carries when the caller gives none.
    #[must_use]
    pub const fn default_description(&self) -> &'static str {
        match self {
            Self::Failure => "A 'Failure' has occurred.",
            Self::Unexpected => "An 'Unexpected' error has occurred.",
            Self::Validation => "A 'Validation' error has occurred.",
            Self::Conflict => "A 'Conflict' error has occurred.",
            Self::NotFound => "A 'Not Found' error has occurred.",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured error: a human-readable description plus an [`ErrorType`].
///
/// The description is not validated; an empty string is accepted.
///
/// # Examples
///
/// ```
/// use outcome::{Error, ErrorType};
///
/// let missing = Error::not_found();
/// assert_eq!(missing.kind(), ErrorType::NotFound);
/// assert_eq!(missing.description(), "A 'Not Found' error has occurred.");
///
/// let user = Error::not_found_with("user 7 does not exist");
/// assert_eq!(user.kind(), ErrorType::NotFound);
/// assert_eq!(user.description(), "user 7 does not exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}: {description}")]
pub struct Error {
    description: Cow<'static, str>,
    kind: ErrorType,
}

macro_rules! classified {
    ($($kind:ident => $default:ident, $with:ident;)*) => {
        $(
            #[doc = concat!("An error of kind [`ErrorType::", stringify!($kind), "`] with its default description.")]
            #[must_use]
            pub const fn $default() -> Self {
                Self {
                    description: Cow::Borrowed(ErrorType::$kind.default_description()),
                    kind: ErrorType::$kind,
                }
            }

            #[doc = concat!("An error of kind [`ErrorType::", stringify!($kind), "`] with the given description.")]
            #[must_use]
            pub fn $with(description: impl Into<Cow<'static, str>>) -> Self {
                Self::create(description, ErrorType::$kind)
            }
        )*
    };
}

impl Error {
    /// Creates an error from an explicit description and kind.
    #[must_use]
    pub fn create(description: impl Into<Cow<'static, str>>, kind: ErrorType) -> Self {
        Self {
            description: description.into(),
            kind,
        }
    }

    /// An error of the given kind carrying that kind's default description.
    #[must_use]
    pub const fn of_kind(kind: ErrorType) -> Self {
        Self {
            description: Cow::Borrowed(kind.default_description()),
            kind,
        }
    }

    classified! {
        Failure => failure, failure_with;
        Unexpected => unexpected, unexpected_with;
        Validation => validation, validation_with;
        Conflict => conflict, conflict_with;
        NotFound => not_found, not_found_with;
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorType {
        self.kind
    }

    #[must_use]
    pub fn into_description(self) -> Cow<'static, str> {
        self.description
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::failure()
    }
}

impl From<ErrorType> for Error {
    fn from(kind: ErrorType) -> Self {
        Self::of_kind(kind)
    }
}

impl From<String> for Error {
    fn from(description: String) -> Self {
        Self::create(description, ErrorType::default())
    }
}

impl From<&'static str> for Error {
    fn from(description: &'static str) -> Self {
        Self::create(description, ErrorType::default())
    }
}

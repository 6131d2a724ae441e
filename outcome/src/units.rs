//! Payload-free status markers.
//!
//! Each marker is a zero-size unit struct whose only job is to be a distinct
//! type usable as the third parameter of [`StatusResult`](crate::StatusResult).
//! Many of them line up with HTTP statuses (`NoContent` with 204, `Accepted`
//! with 202), but this crate attaches no meaning to any of them.
//!
//! One marker is named `None`; import markers by name, not by glob.

use core::fmt;

/// A payload-free token that can stand in the status slot of a
/// [`StatusResult`](crate::StatusResult).
///
/// Implement it for your own unit structs, or declare them with
/// [`status_markers!`](crate::status_markers).
pub trait StatusOnly: Copy + fmt::Debug + 'static {
    /// The marker's name, as used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Declares unit structs that implement [`StatusOnly`].
///
/// # Examples
///
/// ```
/// use outcome::{StatusOnly, StatusResult, status_markers};
///
/// status_markers! {
///     /// The record was already archived.
///     pub struct AlreadyArchived;
/// }
///
/// let result: StatusResult<u32, outcome::Error, AlreadyArchived> =
///     StatusResult::from_status(AlreadyArchived);
/// assert!(result.is_status_only());
/// assert_eq!(AlreadyArchived.name(), "AlreadyArchived");
/// ```
#[macro_export]
macro_rules! status_markers {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            $vis struct $name;

            impl $crate::StatusOnly for $name {
                fn name(&self) -> &'static str {
                    stringify!($name)
                }
            }

            impl $crate::Nullable for $name {
                fn is_null(&self) -> bool {
                    false
                }
            }

            impl ::core::fmt::Display for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )*
    };
}

macro_rules! builtin_statuses {
    ($($(#[$meta:meta])* $name:ident,)*) => {
        crate::status_markers! {
            $($(#[$meta])* pub struct $name;)*
        }

        /// Any of the built-in markers, chosen at runtime.
        ///
        /// `StatusKind` is itself a [`StatusOnly`], so a single result type can
        /// carry whichever built-in status an operation ends with.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum StatusKind {
            $($(#[$meta])* $name,)*
        }

        impl StatusKind {
            /// Every built-in marker, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];

            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }

        $(
            impl From<$name> for StatusKind {
                fn from(_: $name) -> Self {
                    Self::$name
                }
            }
        )*
    };
}

builtin_statuses! {
    /// No content is returned; compare HTTP 204.
    NoContent,
    /// The resource has not changed since it was last retrieved; compare HTTP 304.
    NotModified,
    /// A generic success with nothing to report; compare HTTP 200.
    Success,
    /// A new resource was created; compare HTTP 201.
    Created,
    /// The request was accepted for later processing; compare HTTP 202.
    Accepted,
    /// A resource was deleted.
    Deleted,
    /// A resource was updated.
    Updated,
    /// The work was intentionally skipped.
    Skipped,
    /// The operation ran out of time.
    Timeout,
    /// The operation was cancelled before it finished.
    Cancelled,
    /// The operation completed after being retried.
    Retried,
    /// The operation had no meaningful outcome.
    None,
    /// The operation completed with nothing to return.
    Empty,
}

impl StatusOnly for StatusKind {
    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::mem::size_of;

    use super::{
        Accepted, Cancelled, Created, Deleted, Empty, NoContent, NotModified, Retried, Skipped,
        StatusKind, StatusOnly, Success, Timeout, Updated,
    };

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(size_of::<NoContent>(), 0);
        assert_eq!(size_of::<NotModified>(), 0);
        assert_eq!(size_of::<super::None>(), 0);
        assert_eq!(size_of::<Empty>(), 0);
    }

    #[test]
    fn test_marker_names() {
        assert_eq!(NoContent.name(), "NoContent");
        assert_eq!(Accepted.name(), "Accepted");
        assert_eq!(super::None.name(), "None");
        assert_eq!(Timeout.to_string(), "Timeout");
    }

    #[test]
    fn test_markers_are_interchangeable_values() {
        assert_eq!(Created, Created::default());
        assert_eq!(Deleted::default(), Deleted);
    }

    #[test]
    fn test_status_kind_from_markers() {
        let kinds = [
            StatusKind::from(NoContent),
            StatusKind::from(NotModified),
            StatusKind::from(Success),
            StatusKind::from(Created),
            StatusKind::from(Accepted),
            StatusKind::from(Deleted),
            StatusKind::from(Updated),
            StatusKind::from(Skipped),
            StatusKind::from(Timeout),
            StatusKind::from(Cancelled),
            StatusKind::from(Retried),
            StatusKind::from(super::None),
            StatusKind::from(Empty),
        ];

        assert_eq!(&kinds[..], StatusKind::ALL);
    }

    #[test]
    fn test_status_kind_names_match_markers() {
        assert_eq!(StatusKind::from(Skipped).name(), Skipped.name());
        assert_eq!(StatusKind::Retried.to_string(), "Retried");
        assert_eq!(StatusKind::ALL.len(), 13);
    }
}

//! Outcomes as values.
//!
//! [`Result`] is either a success carrying a value or a failure carrying an
//! error. [`StatusResult`] adds a third, payload-free outcome: a status marker
//! such as [`units::NoContent`] or [`units::Accepted`]. Callers consume either
//! type with `match_with`, which takes one handler per outcome.
//!
//! ```
//! use outcome::{Error, StatusResult, units::NotModified};
//!
//! fn fetch(etag_matches: bool, id: u32) -> StatusResult<String, Error, NotModified> {
//!     if etag_matches {
//!         StatusResult::from_status(NotModified)
//!     } else if id == 0 {
//!         StatusResult::from_error(Error::not_found())
//!     } else {
//!         StatusResult::from_value(format!("document {id}"))
//!     }
//! }
//!
//! let code = fetch(true, 1).match_with(|_| 200, |_| 404, |_| 304);
//! assert_eq!(code, 304);
//! ```
#![cfg_attr(not(test), no_std)]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod convert;
pub mod errors;
mod nullable;
mod result;
mod state;
mod status_result;
#[cfg(feature = "tracing")]
mod trace;
pub mod units;

pub use convert::{Failed, Succeeded};
pub use errors::{Error, ErrorType};
pub use nullable::Nullable;
pub use result::Result;
pub use state::{ResultState, StateError};
pub use status_result::StatusResult;
pub use units::{StatusKind, StatusOnly};

//! Error types for jpbizday.
//!
//! Every public operation either returns a fully valid value or exactly one
//! [`Error`].  Two failure kinds exist: a bad argument, and a combination of
//! individually valid arguments that has no answer.  The [`ensure!`] and
//! [`fail!`] macros produce them respectively.
//!
//! Errors carry only a tag and a short message naming the offending value;
//! turning them into end-user text is left to the caller.

use thiserror::Error;

/// The error type used throughout jpbizday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was out of range or malformed (a year outside
    /// `[1000, 9999]`, an unparseable date string, a zero cache size…).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Every argument was valid on its own but their combination has no
    /// result, e.g. the fifth Monday of a month that only has four.
    #[error("computation impossible: {0}")]
    ComputationImpossible(String),
}

impl Error {
    /// Return `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Return `true` for [`Error::ComputationImpossible`].
    pub fn is_computation_impossible(&self) -> bool {
        matches!(self, Error::ComputationImpossible(_))
    }
}

/// Shorthand `Result` type used throughout jpbizday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Argument check.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jbd_core::{ensure, errors::Error};
/// fn month(m: u8) -> jbd_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::InvalidArgument("month 13 out of range [1, 12]".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with `Err(Error::ComputationImpossible(...))`.
///
/// # Example
/// ```
/// use jbd_core::{fail, errors::Error};
/// fn fifth_monday() -> jbd_core::errors::Result<u8> {
///     fail!("no 5th Monday in {}-{:02}", 2024, 2);
/// }
/// assert!(fifth_monday().unwrap_err().is_computation_impossible());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::ComputationImpossible(format!($($msg)*)))
    };
}

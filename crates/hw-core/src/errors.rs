//! Error types for hullwhite-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace.  Invalid
//! caller input is rejected through the `ensure!` macro before any
//! floating-point work starts; data errors raised by a term structure
//! (a time outside the curve's domain, an unlinked handle) have dedicated
//! variants so callers can tell them apart from their own mistakes.

use thiserror::Error;

/// The top-level error type used throughout hullwhite-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (maps to `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (maps to `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A time outside the domain covered by a term structure.
    #[error("time {time} is past the maximum curve time {max_time}")]
    OutOfCurveRange {
        /// The requested time.
        time: f64,
        /// The latest time the curve can supply.
        max_time: f64,
    },

    /// A rebindable term-structure handle is currently unlinked.
    #[error("no term structure currently linked")]
    NoTermStructure,
}

/// Shorthand `Result` type used throughout hullwhite-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject invalid input before any computation proceeds.
///
/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hw_core::ensure;
/// fn positive(x: f64) -> hw_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail unconditionally with a runtime error.
///
/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use hw_core::fail;
/// fn always_err() -> hw_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

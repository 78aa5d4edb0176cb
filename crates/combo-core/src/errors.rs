//! Error types shared across the workspace.
//!
//! A single `thiserror`-derived enum covers every fallible step below the
//! public `load`/`classify` boundary. The `ensure!`, `ensure_post!`, and
//! `fail!` macros are thin wrappers that return early with the matching
//! variant, the way precondition/postcondition checks are usually expressed
//! in this workspace.

use thiserror::Error;

/// The error type returned by fallible operations inside the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime failure.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// A date or period string could not be parsed.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use combo_core::{ensure, errors::Error};
/// fn positive(x: f64) -> combo_core::errors::Result<f64> {
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

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use combo_core::{ensure_post, errors::Error};
/// fn compute(x: f64) -> combo_core::errors::Result<f64> {
///     let result = x * 2.0;
///     ensure_post!(result > 0.0, "result must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(compute(1.0).is_ok());
/// assert!(compute(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use combo_core::{fail, errors::Error};
/// fn always_err() -> combo_core::errors::Result<()> {
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

//! # combo-core
//!
//! Numeric aliases, the shared error hierarchy, and small string-parsing
//! helpers reused by every other crate in the workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error hierarchy and the `ensure!`/`ensure_post!`/`fail!` macros.
pub mod errors;

/// Small parsing helpers for the period/date/offset-run grammars.
pub mod parsing;

/// Floating-point type used for ratios and strikes throughout the workspace.
pub type Real = f64;

/// Signed integer type used for offset ordinals (strike/expiration ranking).
pub type Offset = i32;

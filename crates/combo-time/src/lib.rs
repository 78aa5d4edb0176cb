//! # combo-time
//!
//! `Date`, `Period`, `Unit`, and the civil-calendar offset arithmetic behind
//! `Date::check_expiration`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Date` type and the `check_expiration` predicate.
pub mod date;

/// `Period` — an amount in a `Unit`.
pub mod period;

/// `Unit` — Year, Quarter, Month, Day.
pub mod unit;

pub use date::Date;
pub use period::Period;
pub use unit::Unit;

//! # combo-parser
//!
//! Parses one whitespace-separated text line into a
//! [`combo_instruments::Component`]:
//!
//! ```text
//! <T> <ratio> [<strike>] <YYYY-MM-DD>
//! ```
//!
//! where `T ∈ {C, F, O, P, U}`; `strike` is present iff `T ∈ {C, O, P}`;
//! `ratio` is a signed decimal; `date` is an ISO calendar date. A malformed
//! line yields a component with `kind = Unknown` rather than an error —
//! this parser never returns `Result`, matching the "unrecognized
//! component" failure mode described below.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use combo_core::parsing::parse_iso_date;
use combo_instruments::{Component, InstrumentType};
use combo_time::Date;

/// Parse one component text line.
///
/// Returns `Component::unknown()` for anything that does not conform to
/// the grammar above, rather than failing.
pub fn parse_line(line: &str) -> Component {
    parse_line_inner(line).unwrap_or_else(Component::unknown)
}

fn parse_line_inner(line: &str) -> Option<Component> {
    let mut tokens = line.split_whitespace();

    let kind = match tokens.next()?.chars().next()? {
        'C' => InstrumentType::Call,
        'F' => InstrumentType::Future,
        'O' => InstrumentType::Option,
        'P' => InstrumentType::Put,
        'U' => InstrumentType::Underlying,
        _ => return None,
    };

    let ratio: f64 = tokens.next()?.parse().ok()?;

    let has_strike = matches!(
        kind,
        InstrumentType::Call | InstrumentType::Option | InstrumentType::Put
    );
    let strike = if has_strike {
        tokens.next()?.parse().ok()?
    } else {
        0.0
    };

    let date_token = tokens.next()?;
    if tokens.next().is_some() {
        return None; // trailing garbage
    }
    let (year, month, day) = parse_iso_date(date_token)?;
    let expiration = Date::new(year, month as i32, day as i32);

    Some(Component::new(kind, ratio, strike, expiration))
}

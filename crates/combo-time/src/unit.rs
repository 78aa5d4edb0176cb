//! `Unit` — the four calendar units a [`crate::period::Period`] offset can
//! be expressed in.

/// A unit of calendar time used by a period offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Calendar years.
    Year,
    /// Calendar quarters (three months), treated as a *range* rather than
    /// an exact target — see [`crate::date::Date::check_expiration`].
    Quarter,
    /// Calendar months.
    Month,
    /// Calendar days.
    Day,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Year => write!(f, "Year(s)"),
            Unit::Quarter => write!(f, "Quarter(s)"),
            Unit::Month => write!(f, "Month(s)"),
            Unit::Day => write!(f, "Day(s)"),
        }
    }
}

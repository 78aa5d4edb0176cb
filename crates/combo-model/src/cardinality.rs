//! `Cardinality` — how many copies of a template's legs a components list
//! must supply.

/// The cardinality kind of a template.
///
/// A tagged variant rather than an inheritance hierarchy, per the design
/// the three kinds share the `check` contract but differ
/// in `pre_check`/`post_check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Matches exactly one copy of the template's legs.
    Fixed,
    /// Matches `k` copies of the template's legs laid end to end, for any
    /// positive integer `k` (including `k = 1`).
    Multiple,
    /// Matches an unbounded repetition (`>= min_count`) of the template's
    /// single leg.
    More {
        /// The minimum number of repetitions required.
        min_count: usize,
    },
}

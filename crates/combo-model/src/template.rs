//! `Template` — one named classification rule.

use crate::cardinality::Cardinality;
use crate::leg::Leg;

/// A named strategy template: its cardinality kind and ordered legs.
///
/// Constructed only through [`Template::new`], which enforces the
/// invariants so that every `Template` a `Catalog` holds is
/// well-formed; `combo-catalog`'s loader silently skips any catalog entry
/// that would violate them rather than erroring out of `load`.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// The template's name, returned verbatim by `classify` on a match.
    pub name: String,
    /// The cardinality kind.
    pub cardinality: Cardinality,
    /// The ordered legs.
    pub legs: Vec<Leg>,
}

impl Template {
    /// Construct a template, validating its invariants.
    ///
    /// Returns `None` if:
    /// - `cardinality` is `Fixed` or `Multiple` and `legs` is empty;
    /// - `cardinality` is `More` and `legs` does not have exactly one
    ///   element, or `min_count == 0`.
    pub fn new(name: impl Into<String>, cardinality: Cardinality, legs: Vec<Leg>) -> Option<Self> {
        let valid = match cardinality {
            Cardinality::Fixed | Cardinality::Multiple => !legs.is_empty(),
            Cardinality::More { min_count } => legs.len() == 1 && min_count >= 1,
        };
        if !valid {
            return None;
        }
        Some(Self {
            name: name.into(),
            cardinality,
            legs,
        })
    }
}

//! Top-level `classify`: evaluates each template in catalog
//! order, returning on first match.

use combo_instruments::Component;
use combo_model::{Cardinality, Catalog, Template};

use crate::{fixed_multiple, more};

/// Check a single template against `components`, returning the
/// leg-order-to-input-index permutation on success.
pub fn check(template: &Template, components: &[Component]) -> Option<Vec<usize>> {
    match template.cardinality {
        Cardinality::Fixed => fixed_multiple::search(&template.legs, components, false),
        Cardinality::Multiple => fixed_multiple::search(&template.legs, components, true),
        Cardinality::More { min_count } => more::search(&template.legs[0], min_count, components),
    }
}

/// Classify `components` against `catalog`, returning `(name, role
/// vector)`. The empty components list / empty catalog case
/// and the no-match case both return `("Unclassified", vec![])`.
pub fn classify(catalog: &Catalog, components: &[Component]) -> (String, Vec<usize>) {
    for template in catalog.templates() {
        if let Some(pi) = check(template, components) {
            let mut roles = vec![0usize; components.len()];
            for (i, &input_index) in pi.iter().enumerate() {
                roles[input_index] = i + 1;
            }
            return (template.name.clone(), roles);
        }
    }
    ("Unclassified".to_string(), Vec::new())
}

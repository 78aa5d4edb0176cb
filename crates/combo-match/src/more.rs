//! The More search: no permutation, O(n) single pass. The
//! identity permutation is returned on success since More templates place
//! no ordering constraint on their repeated leg.

use combo_instruments::Component;
use combo_model::Leg;

/// Check `components` against a More template's single `leg`.
///
/// Strike and expiration are unconstrained for More templates; only
/// instrument type (with the Call/Put abstraction under `Option`) and
/// ratio are checked, against every component.
pub fn search(leg: &Leg, min_count: usize, components: &[Component]) -> Option<Vec<usize>> {
    if components.len() < min_count {
        return None;
    }
    let all_match = components
        .iter()
        .all(|c| leg.kind.matches(c.kind) && leg.ratio.matches(c.ratio));
    if all_match {
        Some((0..components.len()).collect())
    } else {
        None
    }
}

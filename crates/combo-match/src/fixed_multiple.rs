//! The Fixed/Multiple search: all permutations of the input,
//! split into consecutive groups of `legs.len()`, each checked
//! independently.

use combo_instruments::Component;
use combo_model::Leg;

use crate::group::check_group;
use crate::permutation::next_permutation;

/// Search for a permutation of `components` under which every consecutive
/// group of `legs.len()` satisfies `legs`.
///
/// `allow_multiple` selects the pre_check: `false` requires exactly one
/// group (`components.len() == legs.len()`, the Fixed case); `true` allows
/// any positive number of groups (`components.len()` a positive multiple
/// of `legs.len()`, the Multiple case, `k = 1` included).
///
/// Enumeration is lexicographic starting from the identity permutation
/// the first permutation whose groups all check wins.
pub fn search(legs: &[Leg], components: &[Component], allow_multiple: bool) -> Option<Vec<usize>> {
    let group_len = legs.len();
    let n = components.len();
    if group_len == 0 || n == 0 {
        return None;
    }
    if allow_multiple {
        if n % group_len != 0 {
            return None;
        }
    } else if n != group_len {
        return None;
    }
    if !type_coverage_ok(legs, components) {
        return None;
    }

    let mut indices: Vec<usize> = (0..n).collect();
    loop {
        if indices
            .chunks(group_len)
            .all(|chunk| check_group(legs, components, chunk))
        {
            return Some(indices);
        }
        if !next_permutation(&mut indices) {
            return None;
        }
    }
}

/// Cheap necessary condition (the `pre_check`): every leg's type
/// must be satisfiable by at least one component, or no permutation can
/// possibly succeed.
fn type_coverage_ok(legs: &[Leg], components: &[Component]) -> bool {
    legs.iter()
        .all(|leg| components.iter().any(|c| leg.kind.matches(c.kind)))
}

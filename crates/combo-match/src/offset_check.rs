//! The "offset check": a single bookkeeping rule applied identically to a
//! template leg's strike channel and, when not a calendar period offset,
//! its expiration channel.

use std::collections::HashMap;

use combo_model::LegKey;

/// Per-group bookkeeping for one offset channel.
///
/// A fresh `OffsetState` is used for each group a Fixed/Multiple template
/// checks; it is never shared across groups or across permutations.
#[derive(Debug, Default)]
pub struct OffsetState<T> {
    by_symbol: HashMap<char, T>,
    by_offset: HashMap<i32, T>,
}

impl<T: Copy> OffsetState<T> {
    /// A fresh, empty state.
    pub fn new() -> Self {
        Self {
            by_symbol: HashMap::new(),
            by_offset: HashMap::new(),
        }
    }

    /// The value recorded at ordinal 0, if any — the group's anchor for a
    /// `PeriodOffset` leg on the same channel.
    pub fn anchor(&self) -> Option<T> {
        self.by_offset.get(&0).copied()
    }
}

/// Apply `key` to `value`, updating `state` and returning whether the
/// channel's constraints still hold.
pub fn check<T: Copy + PartialEq + PartialOrd>(
    key: LegKey,
    value: T,
    state: &mut OffsetState<T>,
) -> bool {
    match key {
        LegKey::Free => true,
        LegKey::Symbol(c) => {
            if let Some(&stored) = state.by_symbol.get(&c) {
                if stored != value {
                    return false;
                }
            } else {
                state.by_symbol.insert(c, value);
            }
            state.by_offset.clear();
            state.by_offset.insert(0, value);
            true
        }
        LegKey::Offset(k) => {
            if let Some(&stored) = state.by_offset.get(&k) {
                return stored == value;
            }
            for (&q, &v) in state.by_offset.iter() {
                if q < k && !(v < value) {
                    return false;
                }
                if q > k && !(v > value) {
                    return false;
                }
            }
            state.by_offset.insert(k, value);
            true
        }
    }
}

//! Checks one group of `legs.len()` components against a template's leg
//! list (the per-group half of the Fixed/Multiple algorithm).

use combo_instruments::Component;
use combo_model::{Leg, LegExpirationConstraint};
use combo_time::Date;

use crate::offset_check::{self, OffsetState};

/// Check one contiguous group — `indices[j]` names the component playing
/// leg `legs[j]`'s role — against `legs`, in leg order.
///
/// A fresh pair of offset-channel states is used per group: the strike
/// and expiration(-as-key) channels never share bookkeeping across
/// groups.
pub fn check_group(legs: &[Leg], components: &[Component], indices: &[usize]) -> bool {
    let mut strikes: OffsetState<f64> = OffsetState::new();
    let mut expirations: OffsetState<Date> = OffsetState::new();

    for (leg, &idx) in legs.iter().zip(indices) {
        let comp = components[idx];

        if !leg.kind.matches(comp.kind) {
            return false;
        }
        if !leg.ratio.matches(comp.ratio) {
            return false;
        }
        if !offset_check::check(leg.strike_key, comp.strike, &mut strikes) {
            return false;
        }
        match leg.expiration {
            LegExpirationConstraint::Key(key) => {
                if !offset_check::check(key, comp.expiration, &mut expirations) {
                    return false;
                }
            }
            LegExpirationConstraint::PeriodOffset(period) => {
                let anchor = expirations.anchor().unwrap_or(Date::EPOCH);
                if !anchor.check_expiration(&period, &comp.expiration) {
                    return false;
                }
            }
        }
    }
    true
}

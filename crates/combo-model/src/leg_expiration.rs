//! `LegExpirationConstraint` — the expiration-channel constraint a leg
//! carries, which is either an offset-channel [`LegKey`] (as on the strike
//! channel) or a calendar [`Period`] anchored at the group's first leg.

use combo_time::Period;

use crate::leg_key::LegKey;

/// The expiration-channel constraint on one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegExpirationConstraint {
    /// Treat the expiration exactly like a strike-style offset channel.
    Key(LegKey),
    /// The component's expiration must fall inside the window anchored at
    /// the group's offset-0 expiration, shifted by this period.
    PeriodOffset(Period),
}

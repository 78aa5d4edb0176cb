//! `Leg` — one slot in a template's recipe.

use combo_instruments::InstrumentType;

use crate::leg_expiration::LegExpirationConstraint;
use crate::leg_key::LegKey;
use crate::leg_ratio::LegRatio;

/// One slot in a template's recipe: an instrument type plus the
/// per-channel constraints a matching component must satisfy.
///
/// Immutable after the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// The leg's declared instrument type.
    pub kind: InstrumentType,
    /// The ratio constraint.
    pub ratio: LegRatio,
    /// The strike-channel constraint.
    pub strike_key: LegKey,
    /// The expiration-channel constraint.
    pub expiration: LegExpirationConstraint,
}

impl Leg {
    /// Construct a leg from its four fields.
    pub fn new(
        kind: InstrumentType,
        ratio: LegRatio,
        strike_key: LegKey,
        expiration: LegExpirationConstraint,
    ) -> Self {
        Self {
            kind,
            ratio,
            strike_key,
            expiration,
        }
    }
}

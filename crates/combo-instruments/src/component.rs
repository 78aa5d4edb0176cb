//! `Component` — one instrument atom in an input trade.

use combo_core::Real;
use combo_time::Date;

use crate::instrument_type::InstrumentType;

/// One instrument in an input trade: immutable once constructed.
///
/// A malformed input line (see `combo-parser`) yields a `Component` with
/// `kind = InstrumentType::Unknown`; its other fields are left at their
/// defaults and are undefined for matching purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// The instrument's type.
    pub kind: InstrumentType,
    /// Signed ratio (quantity and direction) of this leg in the trade.
    pub ratio: Real,
    /// Strike price; `0.0` for instruments that carry no strike
    /// (`Future`, `Underlying`).
    pub strike: Real,
    /// Expiration date.
    pub expiration: Date,
}

impl Component {
    /// Construct a component from its four fields.
    pub fn new(kind: InstrumentType, ratio: Real, strike: Real, expiration: Date) -> Self {
        Self {
            kind,
            ratio,
            strike,
            expiration,
        }
    }

    /// A sentinel "unknown" component, used for lines that fail to parse.
    pub fn unknown() -> Self {
        Self {
            kind: InstrumentType::Unknown,
            ratio: 0.0,
            strike: 0.0,
            expiration: Date::EPOCH,
        }
    }
}

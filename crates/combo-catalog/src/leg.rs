//! Parses one `<leg>` element into a [`combo_model::Leg`].

use combo_core::parsing::{parse_amount_unit, parse_offset_run};
use combo_instruments::InstrumentType;
use combo_model::{Leg, LegExpirationConstraint, LegKey, LegRatio};
use combo_time::{Period, Unit};
use roxmltree::Node;

/// Parse one leg element. Returns `None` if a required attribute
/// (`type`, `ratio`) is missing or unparsable — the caller skips the whole
/// template in that case.
pub fn parse_leg(node: &Node) -> Option<Leg> {
    let kind = parse_kind(node.attribute("type")?)?;
    let ratio = parse_ratio(node.attribute("ratio")?)?;
    let strike_key = parse_strike_key(node);
    let expiration = parse_expiration(node);
    Some(Leg::new(kind, ratio, strike_key, expiration))
}

fn parse_kind(s: &str) -> Option<InstrumentType> {
    let c = s.trim().chars().next()?;
    match c {
        'C' => Some(InstrumentType::Call),
        'F' => Some(InstrumentType::Future),
        'O' => Some(InstrumentType::Option),
        'P' => Some(InstrumentType::Put),
        'U' => Some(InstrumentType::Underlying),
        _ => None,
    }
}

fn parse_ratio(s: &str) -> Option<LegRatio> {
    match s.trim() {
        "+" => Some(LegRatio::SignOnly(true)),
        "-" => Some(LegRatio::SignOnly(false)),
        other => other.parse::<f64>().ok().map(LegRatio::Exact),
    }
}

/// The strike channel: `strike`'s first character is the Symbol label;
/// `strike_offset` is a `+`/`-` run. Unknown or missing attributes, or a
/// `strike` value that doesn't start with a usable label character,
/// degrade to `Free`.
fn parse_strike_key(node: &Node) -> LegKey {
    if let Some(s) = node.attribute("strike") {
        if let Some(c) = s.chars().next() {
            return LegKey::Symbol(c);
        }
    }
    if let Some(s) = node.attribute("strike_offset") {
        if let Some(k) = parse_offset_run(s) {
            return LegKey::Offset(k);
        }
    }
    LegKey::Free
}

/// The expiration channel: `expiration`'s first character is the Symbol
/// label; `expiration_offset` is either a `+`/`-` run (an offset-channel
/// key, same as strike) or a decimal amount plus a unit character in
/// `{y, q, m, d}` (a `PeriodOffset`). A zero amount is promoted to 1.
fn parse_expiration(node: &Node) -> LegExpirationConstraint {
    if let Some(s) = node.attribute("expiration") {
        if let Some(c) = s.chars().next() {
            return LegExpirationConstraint::Key(LegKey::Symbol(c));
        }
    }
    if let Some(s) = node.attribute("expiration_offset") {
        if let Some(k) = parse_offset_run(s) {
            return LegExpirationConstraint::Key(LegKey::Offset(k));
        }
        if let Some((amount, unit_char)) = parse_amount_unit(s) {
            let amount = if amount == 0 { 1 } else { amount };
            let unit = match unit_char {
                'y' => Unit::Year,
                'q' => Unit::Quarter,
                'm' => Unit::Month,
                'd' => Unit::Day,
                _ => unreachable!("parse_amount_unit only yields y/q/m/d"),
            };
            return LegExpirationConstraint::PeriodOffset(Period::new(unit, amount));
        }
    }
    LegExpirationConstraint::Key(LegKey::Free)
}

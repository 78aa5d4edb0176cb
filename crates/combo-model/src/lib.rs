//! # combo-model
//!
//! The in-memory template data model: `LegRatio`, `LegKey`,
//! `LegExpirationConstraint`, `Leg`, `Cardinality`, `Template`, and
//! `Catalog`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Catalog` — the ordered, immutable list of templates.
pub mod catalog;

/// `Cardinality` — Fixed, Multiple, or More.
pub mod cardinality;

/// `Leg` — one slot in a template's recipe.
pub mod leg;

/// `LegExpirationConstraint` — a `LegKey` or a `PeriodOffset`.
pub mod leg_expiration;

/// `LegKey` — Free, Symbol, or Offset.
pub mod leg_key;

/// `LegRatio` — Exact or SignOnly.
pub mod leg_ratio;

/// `Template` — one named classification rule.
pub mod template;

pub use cardinality::Cardinality;
pub use catalog::Catalog;
pub use leg::Leg;
pub use leg_expiration::LegExpirationConstraint;
pub use leg_key::LegKey;
pub use leg_ratio::LegRatio;
pub use template::Template;

//! # combo-catalog
//!
//! Loads a catalog document — the declarative description of every
//! strategy template a classification engine recognizes — into a
//! [`combo_model::Catalog`].
//!
//! The document format is a small XML dialect. Loading is best-effort:
//! a malformed template entry is skipped rather than failing the whole
//! document; only a missing/wrong document root fails outright.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::path::Path;

use combo_core::errors::Result;
use combo_model::Catalog;

mod document;
mod leg;

pub use document::load_catalog_str;

/// Load a catalog document from a file on disk.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| combo_core::errors::Error::Runtime(e.to_string()))?;
    load_catalog_str(&text)
}

//! Walks a parsed catalog document tree into a [`Catalog`].
//!
//! Document shape:
//!
//! ```xml
//! <combinations>
//!   <template name="...">
//!     <legs cardinality="Fixed" mincount="2">
//!       <leg type="C" ratio="+" strike="a" expiration="x"/>
//!       ...
//!     </legs>
//!   </template>
//!   ...
//! </combinations>
//! ```
//!
//! The root must be tagged `combinations`; everything below that is
//! best-effort: a template entry that is missing a required attribute, or
//! that ends up violating [`Template`]'s invariants, is silently dropped
//! rather than failing the whole load.

use combo_core::{ensure, errors::Result};
use combo_model::{Cardinality, Catalog, Template};
use roxmltree::{Document, Node};

use crate::leg::parse_leg;

/// Parse a catalog document from its XML text.
pub fn load_catalog_str(xml: &str) -> Result<Catalog> {
    let doc = Document::parse(xml).map_err(|e| combo_core::errors::Error::Runtime(e.to_string()))?;
    let root = doc.root_element();
    ensure!(
        root.has_tag_name("combinations"),
        "catalog root must be a <combinations> element, found <{}>",
        root.tag_name().name()
    );

    let templates = root
        .children()
        .filter(Node::is_element)
        .filter_map(parse_template)
        .collect();
    Ok(Catalog::from_templates(templates))
}

fn parse_template(node: Node) -> Option<Template> {
    let name = node.attribute("name")?;
    let legs_wrapper = node.children().find(Node::is_element)?;
    let cardinality = parse_cardinality(&legs_wrapper)?;

    let legs = legs_wrapper
        .children()
        .filter(Node::is_element)
        .map(|leg_node| parse_leg(&leg_node))
        .collect::<Option<Vec<_>>>()?;

    Template::new(name, cardinality, legs)
}

/// The `cardinality` attribute's second character picks the kind: the
/// English words "More", "Fixed", and "Multiple" are distinguished by
/// their index-1 character (`o`, `i`, `u`) — an attribute grammar quirk of
/// the source document format, preserved literally here.
fn parse_cardinality(legs_wrapper: &Node) -> Option<Cardinality> {
    let raw = legs_wrapper.attribute("cardinality")?;
    match raw.chars().nth(1)? {
        'i' => Some(Cardinality::Fixed),
        'u' => Some(Cardinality::Multiple),
        'o' => {
            let min_count: usize = legs_wrapper.attribute("mincount")?.parse().ok()?;
            Some(Cardinality::More { min_count })
        }
        _ => None,
    }
}

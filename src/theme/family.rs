//! VDOM family for theme output.
//!
//! Hooks build `Element<Raw>` trees; [`to_html`] runs them through the
//! indexer and processor and serializes each root in order.

use tola_vdom::families::LinkFamily;
use tola_vdom::prelude::*;
use tola_vdom::vdom::families;

/// Docs site phase. Only links carry family data in theme output.
#[families]
pub struct DocsSite {
    link: LinkFamily,
}

/// Raw phase type alias for convenience
pub type Raw = DocsSite::Raw;

/// Raw element type
pub type RawElement = Element<Raw>;

/// Sibling elements rendered without a wrapper (e.g. image + label).
pub type Fragment = Vec<RawElement>;

/// Empty raw element with no attributes.
pub fn element(tag: &str) -> RawElement {
    DocsSite::element(tag, Attrs::new())
}

/// Element holding a single text child.
pub fn text_element(tag: &str, text: &str) -> RawElement {
    let mut elem = element(tag);
    elem.push_text(text);
    elem
}

/// Serialize `roots` to HTML, concatenated in order.
pub fn to_html(roots: impl IntoIterator<Item = RawElement>) -> String {
    let config = RenderConfig::new(false, false);
    roots
        .into_iter()
        .map(|root| {
            let processed = Pipeline::new(Document::new(root))
                .pipe(DocsSite::indexer())
                .pipe(DocsSite::processor())
                .into_inner();
            String::from_utf8_lossy(&render_document_bytes(&processed, &config)).into_owned()
        })
        .collect()
}

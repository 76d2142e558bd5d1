//! Document tree and the structural passes that run on it.
//!
//! HTML is parsed by html5ever into an arena ([`Dom`]) through [`DomSink`].
//! Passes then mutate the arena in place before a renderer walks it:
//!
//! - [`normalize_lists`] - every child of `ul`/`ol` becomes an `li`
//!
//! [`dump`] prints a subtree in a compact form for tests and debugging.

mod arena;
mod dump;
mod lists;
mod tree_sink;
mod walk;

pub use arena::{Attribute, Children, Descendants, Dom, Node, NodeData, NodeId};
pub use dump::dump;
pub use lists::{
    LIST_CONTAINER_TAGS, LIST_ITEM_TAG, is_list_container, is_list_item, normalize_lists,
};
pub use tree_sink::{DomSink, NodeHandle};
pub use walk::walk_pre_order;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse an HTML document into a [`Dom`].
///
/// Parsing never fails; malformed markup is repaired the way browsers do it.
///
/// ```
/// use mdshape::dom::parse_html;
///
/// let dom = parse_html("<ul><li>A</li>B</ul>");
/// let ul = dom.find_by_tag("ul").unwrap();
/// assert_eq!(dom.children(ul).count(), 2);
/// ```
pub fn parse_html(html: &str) -> Dom {
    parse_html_with(html, ParseOpts::default())
}

/// Parse an HTML document with explicit html5ever options.
pub fn parse_html_with(html: &str, opts: ParseOpts) -> Dom {
    let sink = parse_document(DomSink::new(), opts)
        .from_utf8()
        .one(html.as_bytes());
    log::trace!("parsed {} bytes of html in {:?} mode", html.len(), sink.quirks_mode());
    sink.into_dom()
}

//! # mdshape
//!
//! Building blocks for HTML to Markdown conversion: the pass that repairs list
//! structure in a parsed document, and the encoding that keeps multi-line text
//! on separate lines in Markdown output.
//!
//! ## Quick Start
//!
//! ```
//! use mdshape::dom::{dump, parse_html};
//! use mdshape::{escape_multiline, normalize_lists};
//!
//! // Stray "B" under <ul> is folded into the preceding item
//! let mut dom = parse_html("<ul><li>A</li>B</ul>");
//! normalize_lists(&mut dom);
//!
//! let ul = dom.find_by_tag("ul").unwrap();
//! assert_eq!(dump(&dom, ul), "├─ul\n│ ├─li\n│ │ ├─#text \"A\"\n│ │ ├─#text \"B\"\n");
//!
//! // Line breaks inside a text node become hard breaks
//! assert_eq!(escape_multiline("A\n\n\nB"), "A  \n\\\nB");
//! ```
//!
//! Both transforms are synchronous and keep no global state. The list pass
//! mutates the tree it is given; the text transforms are pure functions.

pub mod dom;
pub mod error;
pub mod markdown;

pub use dom::{Dom, NodeId, normalize_lists, parse_html};
pub use error::{Error, Result};
pub use markdown::{collapse_blank_runs, escape_line_breaks, escape_multiline};

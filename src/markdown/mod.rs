//! Markdown text encoding.
//!
//! Pure byte transforms the renderer applies to text node content before
//! writing it into the output document:
//!
//! - [`collapse_blank_runs`]: cap blank lines between content at one
//! - [`escape_line_breaks`]: hard breaks and blank-line escapes
//! - [`escape_multiline`]: both, in renderer order

mod escape;

pub use escape::{
    BLANK_LINE_ESCAPE, HARD_BREAK, MAX_CONSECUTIVE_NEWLINES, collapse_blank_runs,
    escape_line_breaks, escape_multiline,
};

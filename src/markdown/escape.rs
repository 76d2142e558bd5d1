//! Line break escaping for multi-line text content.
//!
//! Markdown joins consecutive lines into one paragraph and ends the paragraph
//! at a blank line. Text taken from a single HTML text node must keep its line
//! structure without doing either, so every line break becomes a hard break
//! (two trailing spaces) and every blank line becomes a lone backslash.
//!
//! The renderer runs [`collapse_blank_runs`] first and then
//! [`escape_line_breaks`]; [`escape_multiline`] does both.

use bstr::ByteSlice;
use memchr::{memchr_iter, memmem};

/// Longest run of newlines kept by [`collapse_blank_runs`].
pub const MAX_CONSECUTIVE_NEWLINES: usize = 2;

/// Suffix written after a non-blank line that is followed by another line.
pub const HARD_BREAK: &[u8] = b"  \n";

/// Written in place of a blank line that is followed by another line.
pub const BLANK_LINE_ESCAPE: &[u8] = b"\\\n";

/// Replace every run of three or more `\n` with exactly two.
///
/// Only bytes are removed, never added, and all other bytes keep their order.
///
/// # Examples
///
/// ```
/// use mdshape::markdown::collapse_blank_runs;
///
/// assert_eq!(collapse_blank_runs(b"a\n\n\n\nb"), b"a\n\nb");
/// assert_eq!(collapse_blank_runs(b"a\n\nb"), b"a\n\nb");
/// ```
pub fn collapse_blank_runs(input: &[u8]) -> Vec<u8> {
    if memmem::find(input, b"\n\n\n").is_none() {
        return input.to_vec();
    }

    let mut output = Vec::with_capacity(input.len());
    let mut run = 0;
    for &byte in input {
        if byte == b'\n' {
            run += 1;
            if run > MAX_CONSECUTIVE_NEWLINES {
                continue;
            }
        } else {
            run = 0;
        }
        output.push(byte);
    }
    output
}

/// Re-encode line breaks as Markdown hard breaks.
///
/// Each line is trimmed of ASCII spaces and tabs. Every line except the last
/// is then terminated with [`HARD_BREAK`], or replaced by
/// [`BLANK_LINE_ESCAPE`] if it is blank. The last line is written trimmed and
/// without a terminator.
///
/// Blank runs are not collapsed here: each blank line produces its own escape
/// line.
///
/// # Examples
///
/// ```
/// use mdshape::markdown::escape_line_breaks;
///
/// assert_eq!(escape_line_breaks(b"A\nB"), b"A  \nB");
/// assert_eq!(escape_line_breaks(b"A\n\nB"), b"A  \n\\\nB");
/// ```
pub fn escape_line_breaks(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() + input.len() / 8);

    let mut start = 0;
    for newline in memchr_iter(b'\n', input) {
        let line = trim_blanks(&input[start..newline]);
        if line.is_empty() {
            output.extend_from_slice(BLANK_LINE_ESCAPE);
        } else {
            output.extend_from_slice(line);
            output.extend_from_slice(HARD_BREAK);
        }
        start = newline + 1;
    }
    output.extend_from_slice(trim_blanks(&input[start..]));

    output
}

/// Collapse blank runs, then escape line breaks.
///
/// This is the form the renderer writes for a text node. The transform only
/// inserts and removes ASCII bytes at line boundaries, so the result is valid
/// UTF-8 whenever the input is.
///
/// # Examples
///
/// ```
/// use mdshape::markdown::escape_multiline;
///
/// assert_eq!(escape_multiline("line 1\n\n\n\nline 2"), "line 1  \n\\\nline 2");
/// ```
pub fn escape_multiline(text: &str) -> String {
    let escaped = escape_line_breaks(&collapse_blank_runs(text.as_bytes()));
    match String::from_utf8(escaped) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

fn trim_blanks(line: &[u8]) -> &[u8] {
    line.trim_with(|c| c == ' ' || c == '\t')
}

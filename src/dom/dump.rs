//! Plain-text tree representation for debugging and golden tests.

use std::fmt::Write;

use super::arena::{Dom, NodeData, NodeId};

/// Render a subtree, one node per line.
///
/// ```text
/// ├─ul
/// │ ├─li
/// │ │ ├─#text "A"
/// ```
pub fn dump(dom: &Dom, root: NodeId) -> String {
    let mut out = String::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let Some(node) = dom.get(id) else {
            continue;
        };

        for _ in 0..depth {
            out.push_str("│ ");
        }
        out.push_str("├─");
        match &node.data {
            NodeData::Document => out.push_str("#document"),
            NodeData::Element { name, .. } => out.push_str(name.local.as_ref()),
            NodeData::Text(text) => {
                let _ = write!(out, "#text {text:?}");
            }
            NodeData::Comment(text) => {
                let _ = write!(out, "#comment {text:?}");
            }
            NodeData::Doctype { name, .. } => {
                let _ = write!(out, "#doctype {name}");
            }
        }
        out.push('\n');

        let start = stack.len();
        stack.extend(dom.children(id).map(|child| (child, depth + 1)));
        stack[start..].reverse();
    }

    out
}

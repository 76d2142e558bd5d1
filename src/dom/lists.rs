//! List item normalization.
//!
//! HTML tree construction lets text, inline elements and even nested lists
//! sit directly inside `<ul>`/`<ol>`:
//!
//! ```html
//! <ul>
//!   <li>A</li>
//!   B
//!   <ol><li>C</li></ol>
//! </ul>
//! ```
//!
//! A Markdown list has no place for those nodes, so this pass moves every
//! non-`li` child of a list container into the closest preceding `li`:
//!
//! Before: ul > [li "A", "B", ol > [li "C"]]
//! After:  ul > [li > ["A", "B", ol > [li "C"]]]
//!
//! When stray nodes come before the first `li`, a new `li` is created in
//! their place to hold them. Nodes are moved, never cloned or dropped, and
//! keep their relative order.

use super::arena::{Dom, NodeId};
use super::walk::walk_pre_order;

/// Element names that hold list items.
pub const LIST_CONTAINER_TAGS: &[&str] = &["ul", "ol"];

/// Element name of a list item.
pub const LIST_ITEM_TAG: &str = "li";

/// Check if a node is a `ul` or `ol` element.
pub fn is_list_container(dom: &Dom, id: NodeId) -> bool {
    dom.tag_name(id)
        .is_some_and(|tag| LIST_CONTAINER_TAGS.contains(&tag))
}

/// Check if a node is an `li` element.
pub fn is_list_item(dom: &Dom, id: NodeId) -> bool {
    dom.is_tag(id, LIST_ITEM_TAG)
}

#[derive(Debug, Default)]
struct RepairStats {
    lists: usize,
    synthesized: usize,
    moved: usize,
}

/// Ensure every direct child of a list container is a list item.
///
/// Runs once over the whole document, top-down, so a list that gets moved
/// into an item is repaired when the walk reaches it. Running it again on
/// its own output changes nothing.
///
/// # Panics
///
/// Panics if the tree's links are inconsistent or cyclic. In debug builds the
/// tree is checked with [`Dom::validate`] before anything is moved.
pub fn normalize_lists(dom: &mut Dom) {
    if cfg!(debug_assertions)
        && let Err(err) = dom.validate()
    {
        panic!("normalize_lists called on a malformed tree: {err}");
    }

    let mut stats = RepairStats::default();
    let root = dom.document();
    walk_pre_order(dom, root, |dom, id| {
        if is_list_container(dom, id) {
            stats.lists += 1;
            move_list_items(dom, id, &mut stats);
        }
    });

    log::debug!(
        "normalized {} lists: moved {} nodes, created {} list items",
        stats.lists,
        stats.moved,
        stats.synthesized
    );
}

/// Fold the non-item children of one list container into items.
fn move_list_items(dom: &mut Dom, list_id: NodeId, stats: &mut RepairStats) {
    // Collect child ids up front; the loop splices the child chain
    let children: Vec<NodeId> = dom.children(list_id).collect();
    let mut current_item: Option<NodeId> = None;

    for child_id in children {
        if is_list_item(dom, child_id) {
            current_item = Some(child_id);
            continue;
        }

        let item_id = match current_item {
            Some(item_id) => item_id,
            None => {
                let item_id = dom.create_html_element(LIST_ITEM_TAG);
                dom.insert_before(child_id, item_id);
                stats.synthesized += 1;
                current_item = Some(item_id);
                item_id
            }
        };

        dom.append(item_id, child_id);
        stats.moved += 1;
        log::trace!("moved node {child_id} of list {list_id} into item {item_id}");
    }
}

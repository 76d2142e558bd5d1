//! Tree traversal for in-place passes.

use super::arena::{Dom, NodeId};

/// Walk a subtree top-down and call `visitor` at each node.
///
/// The visitor runs before the node's children are read, so a pass may
/// restructure the children of the node it is visiting and the walk will
/// descend into the repaired shape. Uses an explicit stack, so document depth
/// is not bounded by the call stack.
///
/// # Panics
///
/// Panics if the walk visits more nodes than the arena holds, which can only
/// happen when the child links form a cycle.
pub fn walk_pre_order<F>(dom: &mut Dom, root: NodeId, mut visitor: F)
where
    F: FnMut(&mut Dom, NodeId),
{
    let mut stack = vec![root];
    let mut visited = 0usize;

    while let Some(id) = stack.pop() {
        visited += 1;
        assert!(
            visited <= dom.len(),
            "document tree contains a cycle (revisited near node {id})"
        );

        visitor(dom, id);

        let start = stack.len();
        stack.extend(dom.children(id));
        stack[start..].reverse();
    }
}

//! Error types for mdshape operations.

use thiserror::Error;

use crate::dom::NodeId;

/// Structural defects found by [`Dom::validate`](crate::dom::Dom::validate).
///
/// The passes themselves never return these; a tree in this state breaks
/// their contract and they panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node {0} is not in the arena")]
    UnknownNode(NodeId),

    #[error("node {0} is reachable more than once (cycle)")]
    Cycle(NodeId),

    #[error("node {child} is a child of {expected} but its parent link is {found:?}")]
    ParentMismatch {
        child: NodeId,
        expected: NodeId,
        found: Option<NodeId>,
    },

    #[error("sibling links around node {0} are inconsistent")]
    BrokenSiblingLink(NodeId),
}

pub type Result<T> = std::result::Result<T, Error>;

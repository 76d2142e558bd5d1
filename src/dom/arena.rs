//! Arena-based document tree.
//!
//! Every node lives in one contiguous vector owned by [`Dom`]. Parent, child
//! and sibling links are indices into that vector, so detaching a subtree and
//! appending it somewhere else is a handful of index writes with no ownership
//! transfer.

use std::fmt;

use html5ever::{LocalName, QualName, ns};

use crate::error::{Error, Result};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The document root, always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element { name: QualName, attrs: Vec<Attribute> },
    /// Text content.
    Text(String),
    /// Comment (kept so the tree round-trips what the parser saw).
    Comment(String),
    /// Document type declaration.
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
}

/// HTML attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node in the arena.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    /// Local tag name if this is an element.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { name, .. } => Some(name.local.as_ref()),
            _ => None,
        }
    }
}

/// Arena-backed document tree.
pub struct Dom {
    nodes: Vec<Node>,
}

impl Dom {
    /// Create a new tree containing only the document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of allocated nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the document root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        self.alloc(NodeData::Element { name, attrs })
    }

    /// Create a detached element in the HTML namespace.
    pub fn create_html_element(&mut self, tag: &str) -> NodeId {
        let name = QualName::new(None, ns!(html), LocalName::from(tag));
        self.create_element(name, Vec::new())
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(text.into()))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Comment(text.into()))
    }

    /// Create a detached doctype node.
    pub fn create_doctype(
        &mut self,
        name: String,
        public_id: String,
        system_id: String,
    ) -> NodeId {
        self.alloc(NodeData::Doctype {
            name,
            public_id,
            system_id,
        })
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that is still attached elsewhere is detached first, so a node
    /// never has two parents.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);

        let last_child = self.nodes[parent.index()].last_child;

        let node = &mut self.nodes[child.index()];
        node.parent = Some(parent);
        node.prev_sibling = last_child;

        match last_child {
            Some(last) => self.nodes[last.index()].next_sibling = Some(child),
            None => self.nodes[parent.index()].first_child = Some(child),
        }
        self.nodes[parent.index()].last_child = Some(child);
    }

    /// Insert `new_node` immediately before `sibling` under the same parent.
    ///
    /// Does nothing if `sibling` is detached.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        if sibling == new_node {
            return;
        }
        self.detach(new_node);

        let Some(parent) = self.nodes[sibling.index()].parent else {
            return;
        };
        let prev = self.nodes[sibling.index()].prev_sibling;

        let node = &mut self.nodes[new_node.index()];
        node.parent = Some(parent);
        node.prev_sibling = prev;
        node.next_sibling = Some(sibling);

        self.nodes[sibling.index()].prev_sibling = Some(new_node);
        match prev {
            Some(p) => self.nodes[p.index()].next_sibling = Some(new_node),
            None => self.nodes[parent.index()].first_child = Some(new_node),
        }
    }

    /// Unlink a node (and its subtree) from its parent.
    ///
    /// The subtree stays in the arena and can be re-attached.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };

        match prev {
            Some(p) => self.nodes[p.index()].next_sibling = next,
            None => {
                if let Some(par) = parent {
                    self.nodes[par.index()].first_child = next;
                }
            }
        }
        match next {
            Some(n) => self.nodes[n.index()].prev_sibling = prev,
            None => {
                if let Some(par) = parent {
                    self.nodes[par.index()].last_child = prev;
                }
            }
        }

        let node = &mut self.nodes[id.index()];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Append text to a trailing text child, or create one.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        if let Some(last) = self.nodes[parent.index()].last_child
            && let NodeData::Text(existing) = &mut self.nodes[last.index()].data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text);
        self.append(parent, text_node);
    }

    /// Iterate over the direct children of a node.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            dom: self,
            current: self.get(parent).and_then(|n| n.first_child),
        }
    }

    /// Iterate over a subtree in document order, starting with `root` itself.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            dom: self,
            stack: vec![root],
        }
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Element's local tag name.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(Node::tag_name)
    }

    /// Check if node is an element with the given local name.
    pub fn is_tag(&self, id: NodeId, tag: &str) -> bool {
        self.tag_name(id) == Some(tag)
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// Check if node is a text node.
    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| matches!(n.data, NodeData::Text(_)))
    }

    /// Get text content of a text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Find the first attached node matching a predicate, in document order.
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        self.descendants(self.document())
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// Find element by tag name (first match).
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|node| node.tag_name() == Some(tag))
    }

    /// Check the link structure of the attached tree.
    ///
    /// Verifies that every child points back at its parent, that sibling
    /// links are symmetric, and that no node is reachable twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![self.document()];

        while let Some(id) = stack.pop() {
            let slot = seen.get_mut(id.index()).ok_or(Error::UnknownNode(id))?;
            if *slot {
                return Err(Error::Cycle(id));
            }
            *slot = true;

            let node = &self.nodes[id.index()];
            let mut prev = None;
            let mut child_opt = node.first_child;
            while let Some(child) = child_opt {
                let child_node = self.get(child).ok_or(Error::UnknownNode(child))?;
                if child_node.parent != Some(id) {
                    return Err(Error::ParentMismatch {
                        child,
                        expected: id,
                        found: child_node.parent,
                    });
                }
                if child_node.prev_sibling != prev {
                    return Err(Error::BrokenSiblingLink(child));
                }
                if seen[child.index()] {
                    return Err(Error::Cycle(child));
                }
                stack.push(child);
                prev = Some(child);
                child_opt = child_node.next_sibling;
            }
            if node.last_child != prev {
                return Err(Error::BrokenSiblingLink(id));
            }
        }

        Ok(())
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct Children<'a> {
    dom: &'a Dom,
    current: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.dom.get(id).and_then(|n| n.next_sibling);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        let start = self.stack.len();
        self.stack.extend(self.dom.children(id));
        self.stack[start..].reverse();
        Some(id)
    }
}

//! Tree vertices.

use crate::Edge;
use printtree_core::{Error, NodeId, Result};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A vertex in a [`Tree`](crate::Tree).
///
/// A node knows its neighbours only by id: `parent_ids` lists the start of
/// every incoming edge and `child_ids` the end of every outgoing edge, both
/// in the order the edges were registered. The owning tree resolves them.
///
/// Equality and hashing use the id alone, and a node compares equal to its
/// bare id:
///
/// ```rust
/// use printtree_graph::Node;
///
/// let node = Node::new("12345");
/// assert_eq!(node, "12345");
/// assert_eq!(node, Node::<&str>::conform("12345"));
/// ```
///
/// Nodes are deliberately not `Clone`: links are only ever populated by the
/// tree that owns the node.
#[derive(Debug)]
pub struct Node<Id> {
    id: Id,
    parent_ids: Vec<Id>,
    child_ids: Vec<Id>,
}

impl<Id> Node<Id> {
    /// Creates an unlinked node.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            parent_ids: Vec::new(),
            child_ids: Vec::new(),
        }
    }

    /// Normalizes a raw id or an existing node into a node.
    ///
    /// Nodes pass through unchanged; raw ids are wrapped.
    pub fn conform(node_or_id: impl Into<Node<Id>>) -> Self {
        node_or_id.into()
    }

    /// Returns the node id.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Consumes the node, returning its id.
    pub fn into_id(self) -> Id {
        self.id
    }

    /// Ids of the nodes with an edge into this one.
    pub fn parent_ids(&self) -> &[Id] {
        &self.parent_ids
    }

    /// Ids of the nodes this one has an edge to.
    pub fn child_ids(&self) -> &[Id] {
        &self.child_ids
    }

    /// True when no edge ends at this node.
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }

    /// True when no edge starts at this node.
    pub fn is_leaf(&self) -> bool {
        self.child_ids.is_empty()
    }
}

impl<Id: NodeId> Node<Id> {
    /// Records `edge` as outgoing or incoming, depending on which end this
    /// node is.
    pub(crate) fn link(&mut self, edge: &Edge<Id>) -> Result<()> {
        if self.id == *edge.start() {
            self.child_ids.push(edge.end().clone());
        } else if self.id == *edge.end() {
            self.parent_ids.push(edge.start().clone());
        } else {
            return Err(Error::edge_does_not_link_node(
                &self.id,
                edge.start(),
                edge.end(),
            ));
        }
        Ok(())
    }
}

impl<Id> From<Id> for Node<Id> {
    fn from(id: Id) -> Self {
        Self::new(id)
    }
}

impl<Id: PartialEq> PartialEq for Node<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Id: Eq> Eq for Node<Id> {}

impl<Id: PartialEq> PartialEq<Id> for Node<Id> {
    fn eq(&self, other: &Id) -> bool {
        self.id == *other
    }
}

impl<Id: Hash> Hash for Node<Id> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// Hash and Eq both defer to the id, which is what makes this sound.
impl<Id> Borrow<Id> for Node<Id> {
    fn borrow(&self) -> &Id {
        &self.id
    }
}

impl<Id: fmt::Display> fmt::Display for Node<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_equals_id_string() {
        let node = Node::new("12345".to_string());
        assert_eq!(node, "12345".to_string());
    }

    #[test]
    fn test_node_equals_id_int() {
        let node = Node::new(12345_u32);
        assert_eq!(node, 12345_u32);
        assert!(node != 54321_u32);
    }

    #[test]
    fn test_node_equals_id_custom_type() {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        struct Sku(u32, &'static str);

        let node = Node::new(Sku(7, "widget"));
        assert_eq!(node, Sku(7, "widget"));
        assert_eq!(node, Node::new(Sku(7, "widget")));
    }

    #[test]
    fn test_conform_wraps_raw_id() {
        let node: Node<&str> = Node::conform("a");
        assert_eq!(node.id(), &"a");
        assert!(node.is_root());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_conform_passes_node_through() {
        let node = Node::new("b");
        let conformed: Node<&str> = Node::conform(node);
        assert_eq!(conformed, "b");
    }

    #[test]
    fn test_node_hash_matches_id() {
        let mut set = HashSet::new();
        set.insert(Node::new("a"));
        set.insert(Node::new("b"));

        assert!(set.contains(&"a"));
        assert!(set.contains(&Node::new("b")));
        assert!(!set.contains(&"c"));
    }

    #[test]
    fn test_link_outgoing_and_incoming() {
        let edge = Edge::new("a", "b").unwrap();
        let mut start = Node::new("a");
        let mut end = Node::new("b");

        start.link(&edge).unwrap();
        end.link(&edge).unwrap();

        assert_eq!(start.child_ids(), &["b"]);
        assert!(start.parent_ids().is_empty());
        assert!(start.is_root());
        assert!(!start.is_leaf());

        assert_eq!(end.parent_ids(), &["a"]);
        assert!(end.is_leaf());
        assert!(!end.is_root());
    }

    #[test]
    fn test_link_unrelated_edge_fails() {
        let edge = Edge::new("a", "b").unwrap();
        let mut other = Node::new("c");

        let err = other.link(&edge).unwrap_err();
        assert!(matches!(err, Error::EdgeDoesNotLinkNode { .. }));
        assert!(other.is_root() && other.is_leaf());
    }

    #[test]
    fn test_node_display() {
        assert_eq!(Node::new(42).to_string(), "42");
    }
}

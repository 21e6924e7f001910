//! The node/edge container.
//!
//! [`Tree`] is the single owner of every node and edge. Cross references
//! between nodes and edges are ids, resolved through the tree on access, so
//! the structure never forms a reference cycle.

use crate::{Edge, Node};
use log::trace;
use printtree_core::{Error, NodeId, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

// ============================================================================
// Added
// ============================================================================

/// The `(start, end, edge)` triple returned by [`Tree::add_pair`].
#[derive(Debug)]
pub struct Added<'a, Id> {
    /// The owned start node.
    pub start: &'a Node<Id>,
    /// The owned end node.
    pub end: &'a Node<Id>,
    /// The owned edge between them.
    pub edge: &'a Edge<Id>,
}

// ============================================================================
// Tree
// ============================================================================

/// A directed, acyclic node/edge container.
///
/// Informally a tree, though a node may have more than one parent. The
/// container only grows: there is no removal.
///
/// # Example
///
/// ```rust
/// use printtree_graph::Tree;
///
/// let mut tree: Tree<&str> = Tree::new();
/// let added = tree.add_pair("a", "b").unwrap();
/// assert_eq!(*added.edge, ("a", "b"));
///
/// tree.add("c").unwrap();
/// assert_eq!(tree.node_count(), 3);
/// assert_eq!(tree.edge_count(), 1);
/// ```
#[derive(Debug)]
pub struct Tree<Id> {
    nodes: HashMap<Id, Node<Id>>,
    edges: HashMap<(Id, Id), Edge<Id>>,
}

impl<Id> Default for Tree<Id> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }
}

impl<Id: NodeId> Tree<Id> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks if a node exists.
    pub fn contains_node(&self, id: &Id) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterates over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<Id>> {
        self.nodes.values()
    }

    /// Iterates over all edges, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<Id>> {
        self.edges.values()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Gets a node by id.
    pub fn get_node(&self, id: &Id) -> Option<&Node<Id>> {
        self.nodes.get(id)
    }

    /// Gets a node by id, treating a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if no node has this id.
    pub fn require_node(&self, id: &Id) -> Result<&Node<Id>> {
        self.nodes.get(id).ok_or_else(|| Error::node_not_found(id))
    }

    /// Gets the edge `start -> end`.
    pub fn get_edge(&self, start: &Id, end: &Id) -> Option<&Edge<Id>> {
        self.edges.get(&(start.clone(), end.clone()))
    }

    /// Resolves a node's parents to the owned nodes, in edge registration
    /// order. Unknown ids yield an empty list.
    pub fn parents(&self, id: &Id) -> Vec<&Node<Id>> {
        self.resolve(id, Node::parent_ids)
    }

    /// Resolves a node's children to the owned nodes, in edge registration
    /// order. Unknown ids yield an empty list.
    pub fn children(&self, id: &Id) -> Vec<&Node<Id>> {
        self.resolve(id, Node::child_ids)
    }

    fn resolve(&self, id: &Id, links: fn(&Node<Id>) -> &[Id]) -> Vec<&Node<Id>> {
        self.nodes
            .get(id)
            .map(|node| {
                links(node)
                    .iter()
                    .filter_map(|linked| self.nodes.get(linked))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nodes with no incoming edges, in no particular order.
    pub fn get_roots(&self) -> Vec<&Node<Id>> {
        self.nodes.values().filter(|node| node.is_root()).collect()
    }

    /// Nodes with no outgoing edges, in no particular order.
    pub fn get_leaves(&self) -> Vec<&Node<Id>> {
        self.nodes.values().filter(|node| node.is_leaf()).collect()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Registers a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a node with this id exists.
    pub fn add_node(&mut self, node: Node<Id>) -> Result<&Node<Id>> {
        match self.nodes.entry(node.id().clone()) {
            Entry::Occupied(_) => Err(Error::duplicate_node(node.id())),
            Entry::Vacant(slot) => {
                trace!("Registered node {}", node.id());
                Ok(&*slot.insert(node))
            }
        }
    }

    /// Registers an edge and links both endpoints to it.
    ///
    /// Every check runs before anything is mutated, so a failed call leaves
    /// the tree unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateEdge`] if `start -> end` is already registered.
    /// - [`Error::EdgeDoesNotLinkNode`] if either endpoint is not a node of
    ///   this tree.
    pub fn add_edge(&mut self, edge: Edge<Id>) -> Result<&Edge<Id>> {
        register_edge(&mut self.nodes, &mut self.edges, edge)
    }

    /// Returns the owned node with this id, creating it if needed.
    ///
    /// When a node already exists the caller's instance is discarded and
    /// the owned one is returned.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches the other mutators.
    pub fn get_or_create_node(&mut self, node_or_id: impl Into<Node<Id>>) -> Result<&Node<Id>> {
        let node = node_or_id.into();
        if self.nodes.contains_key(node.id()) {
            return self.require_node(node.id());
        }
        self.add_node(node)
    }

    /// Returns the owned edge `start -> end`, creating it if needed.
    ///
    /// # Errors
    ///
    /// - [`Error::EdgeFormsLoop`] if both ends share an id.
    /// - [`Error::EdgeDoesNotLinkNode`] if an endpoint is not a node of this
    ///   tree.
    pub fn get_or_create_edge(
        &mut self,
        start: impl Into<Node<Id>>,
        end: impl Into<Node<Id>>,
    ) -> Result<&Edge<Id>> {
        get_or_register_edge(
            &mut self.nodes,
            &mut self.edges,
            start.into().into_id(),
            end.into().into_id(),
        )
    }

    /// Ensures a node exists and returns it.
    ///
    /// Calling this again with an equal id is a no-op that returns the same
    /// owned node.
    ///
    /// # Errors
    ///
    /// Never fails today; see [`Tree::get_or_create_node`].
    pub fn add(&mut self, node_or_id: impl Into<Node<Id>>) -> Result<&Node<Id>> {
        self.get_or_create_node(node_or_id)
    }

    /// Ensures both nodes and the edge `start -> end` exist.
    ///
    /// Fully idempotent. A self-loop is rejected before either node is
    /// created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeFormsLoop`] if `start` and `end` share an id.
    pub fn add_pair(
        &mut self,
        start: impl Into<Node<Id>>,
        end: impl Into<Node<Id>>,
    ) -> Result<Added<'_, Id>> {
        let (start, end) = (start.into(), end.into());
        if start.id() == end.id() {
            return Err(Error::edge_forms_loop(start.id()));
        }
        let start_id = self.get_or_create_node(start)?.id().clone();
        let end_id = self.get_or_create_node(end)?.id().clone();
        let edge = get_or_register_edge(
            &mut self.nodes,
            &mut self.edges,
            start_id.clone(),
            end_id.clone(),
        )?;

        Ok(Added {
            start: self
                .nodes
                .get(&start_id)
                .ok_or_else(|| Error::node_not_found(&start_id))?,
            end: self
                .nodes
                .get(&end_id)
                .ok_or_else(|| Error::node_not_found(&end_id))?,
            edge,
        })
    }
}

// ============================================================================
// Edge registration
// ============================================================================

// These borrow the two maps separately so the returned edge only holds the
// edge map, leaving the node map readable.

/// Registers `edge` and links both endpoints. Checks everything before
/// mutating.
fn register_edge<'e, Id: NodeId>(
    nodes: &mut HashMap<Id, Node<Id>>,
    edges: &'e mut HashMap<(Id, Id), Edge<Id>>,
    edge: Edge<Id>,
) -> Result<&'e Edge<Id>> {
    let key = edge.key();
    if edges.contains_key(&key) {
        return Err(Error::duplicate_edge(edge.start(), edge.end()));
    }
    for endpoint in [edge.start(), edge.end()] {
        if !nodes.contains_key(endpoint) {
            return Err(Error::edge_does_not_link_node(
                endpoint,
                edge.start(),
                edge.end(),
            ));
        }
    }

    if let Some(start) = nodes.get_mut(edge.start()) {
        start.link(&edge)?;
    }
    if let Some(end) = nodes.get_mut(edge.end()) {
        end.link(&edge)?;
    }
    trace!("Registered edge {edge}");
    Ok(&*edges.entry(key).or_insert(edge))
}

/// Returns the edge `start -> end`, registering it if absent.
fn get_or_register_edge<'e, Id: NodeId>(
    nodes: &mut HashMap<Id, Node<Id>>,
    edges: &'e mut HashMap<(Id, Id), Edge<Id>>,
    start: Id,
    end: Id,
) -> Result<&'e Edge<Id>> {
    let key = (start, end);
    if edges.contains_key(&key) {
        return Ok(&edges[&key]);
    }
    let (start, end) = key;
    register_edge(nodes, edges, Edge::new(start, end)?)
}

// ============================================================================
// Tests
// ============================================================================

//! Directed links between nodes.

use crate::Node;
use printtree_core::{Error, NodeId, Result};
use std::fmt;

/// A directed link `start -> end`.
///
/// Edges hold endpoint ids, not nodes; the owning [`Tree`](crate::Tree)
/// resolves them. Equality and hashing use the `(start, end)` pair, and an
/// edge compares equal to that pair given as ids or as nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<Id> {
    start: Id,
    end: Id,
}

impl<Id: NodeId> Edge<Id> {
    /// Creates an edge between two ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeFormsLoop`] when `start == end`.
    pub fn new(start: Id, end: Id) -> Result<Self> {
        if start == end {
            return Err(Error::edge_forms_loop(&start));
        }
        Ok(Self { start, end })
    }

    /// Creates an edge between two nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeFormsLoop`] when both nodes share an id.
    pub fn between(start: &Node<Id>, end: &Node<Id>) -> Result<Self> {
        Self::new(start.id().clone(), end.id().clone())
    }

    /// Returns the `(start, end)` key the tree stores this edge under.
    pub fn key(&self) -> (Id, Id) {
        (self.start.clone(), self.end.clone())
    }
}

impl<Id> Edge<Id> {
    /// Start node id.
    pub fn start(&self) -> &Id {
        &self.start
    }

    /// End node id.
    pub fn end(&self) -> &Id {
        &self.end
    }
}

impl<Id: PartialEq> PartialEq<(Id, Id)> for Edge<Id> {
    fn eq(&self, other: &(Id, Id)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}

impl<Id: PartialEq> PartialEq<(Node<Id>, Node<Id>)> for Edge<Id> {
    fn eq(&self, other: &(Node<Id>, Node<Id>)) -> bool {
        self.start == *other.0.id() && self.end == *other.1.id()
    }
}

impl<Id: fmt::Display> fmt::Display for Edge<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

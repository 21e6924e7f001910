//! Error types for printtree-core

use std::fmt::Display;
use thiserror::Error;

/// Result type alias for printtree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or walking a tree.
///
/// Identifiers are captured as their display text so the error type stays
/// independent of the id type a tree is keyed by.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A node with this id is already registered.
    #[error("Duplicate node: {id}")]
    DuplicateNode {
        /// Id of the rejected node
        id: String,
    },

    /// An edge between these nodes is already registered.
    #[error("Duplicate edge: {start} -> {end}")]
    DuplicateEdge {
        /// Start node id
        start: String,
        /// End node id
        end: String,
    },

    /// The edge would connect a node to itself.
    #[error("Edge forms a loop on node {id}")]
    EdgeFormsLoop {
        /// Id used as both start and end
        id: String,
    },

    /// The edge does not start or end at the node it was registered on.
    #[error("Edge {start} -> {end} does not link node {node}")]
    EdgeDoesNotLinkNode {
        /// Node the edge was offered to
        node: String,
        /// Start node id of the edge
        start: String,
        /// End node id of the edge
        end: String,
    },

    /// Strict lookup of an unknown node.
    #[error("Node not found: {id}")]
    NodeNotFound {
        /// Id that was looked up
        id: String,
    },

    /// I/O error while writing rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a `DuplicateNode` error.
    pub fn duplicate_node(id: &impl Display) -> Self {
        Error::DuplicateNode { id: id.to_string() }
    }

    /// Creates a `DuplicateEdge` error.
    pub fn duplicate_edge(start: &impl Display, end: &impl Display) -> Self {
        Error::DuplicateEdge {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates an `EdgeFormsLoop` error.
    pub fn edge_forms_loop(id: &impl Display) -> Self {
        Error::EdgeFormsLoop { id: id.to_string() }
    }

    /// Creates an `EdgeDoesNotLinkNode` error.
    pub fn edge_does_not_link_node(
        node: &impl Display,
        start: &impl Display,
        end: &impl Display,
    ) -> Self {
        Error::EdgeDoesNotLinkNode {
            node: node.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates a `NodeNotFound` error.
    pub fn node_not_found(id: &impl Display) -> Self {
        Error::NodeNotFound { id: id.to_string() }
    }

    /// Returns whether this error reports a violated tree invariant.
    ///
    /// Structural errors are raised at the point of violation and leave the
    /// tree untouched. Everything else comes from the environment.
    pub fn is_structural(&self) -> bool {
        match self {
            Error::DuplicateNode { .. }
            | Error::DuplicateEdge { .. }
            | Error::EdgeFormsLoop { .. }
            | Error::EdgeDoesNotLinkNode { .. }
            | Error::NodeNotFound { .. } => true,
            Error::Io(_) => false,
        }
    }
}

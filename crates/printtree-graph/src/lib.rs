//! Tree container and traversal for printtree.
//!
//! Provides:
//! - [`Node`] and [`Edge`]: identity-bearing vertices and directed links
//! - [`Tree`]: the container that owns every node and edge
//! - [`BottomUp`] and [`TopDown`]: the two traversal passes that assign
//!   each node a generation and a branch index for line rendering
//!
//! Nodes and edges reference each other only by id. The tree is the sole
//! owner, so dropping it releases everything regardless of how densely the
//! nodes are linked.
//!
//! # Example
//!
//! ```rust
//! use printtree_graph::Tree;
//!
//! let mut tree: Tree<&str> = Tree::new();
//! tree.add_pair("a", "b").unwrap();
//! tree.add_pair("a", "c").unwrap();
//!
//! let order: Vec<_> = tree
//!     .iter_top_down()
//!     .map(|state| (*state.node.id(), state.branch_index))
//!     .collect();
//! assert_eq!(order, vec![("a", 0), ("c", 1), ("b", 0)]);
//! ```

#![forbid(unsafe_code)]

pub mod edge;
pub mod node;
pub mod traversal;
pub mod tree;

mod proptests;

pub use edge::Edge;
pub use node::Node;
pub use traversal::{BottomUp, NodeState, Scion, TopDown};
pub use tree::{Added, Tree};

pub use printtree_core::{Error, NodeId, Result};

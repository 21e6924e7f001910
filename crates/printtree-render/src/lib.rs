//! Line renderer for printtree.
//!
//! Draws a [`Tree`](printtree_graph::Tree) as an ASCII branch diagram, one
//! node per line, in the order and columns assigned by
//! [`Tree::iter_top_down`](printtree_graph::Tree::iter_top_down):
//!
//! ```text
//! * a
//! |\
//! | * e
//! | * f
//! * b
//! * c
//! ```
//!
//! # Example
//!
//! ```rust
//! use printtree_graph::Tree;
//! use printtree_render::render_tree_to_string;
//!
//! let mut tree: Tree<&str> = Tree::new();
//! tree.add_pair("a", "b").unwrap();
//! tree.add_pair("a", "c").unwrap();
//!
//! assert_eq!(render_tree_to_string(&tree), "* a\n|\\\n| * c\n* b\n");
//! ```

#![forbid(unsafe_code)]

pub mod lines;
pub mod render;

pub use render::{TreeDisplay, render_tree, render_tree_fmt, render_tree_to_string};

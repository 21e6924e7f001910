//! Tree rendering in stream and string form.

use crate::lines::{write_connector, write_node};
use log::debug;
use printtree_core::{NodeId, Result};
use printtree_graph::Tree;
use std::fmt;
use std::io;

// ============================================================================
// Core
// ============================================================================

/// Renders `tree` into any [`fmt::Write`] sink.
///
/// Nodes arrive in top-down order. Whenever a node sits further right than
/// the previous one, one connector line is drawn per column opened.
pub fn render_tree_fmt<Id, W>(tree: &Tree<Id>, out: &mut W) -> fmt::Result
where
    Id: NodeId,
    W: fmt::Write + ?Sized,
{
    let mut last_branch_index = 0;
    let mut lines = 0usize;
    for state in tree.iter_top_down() {
        for step in last_branch_index..state.branch_index {
            write_connector(out, step)?;
            lines += 1;
        }
        write_node(out, state.branch_index, state.node.id())?;
        lines += 1;
        last_branch_index = state.branch_index;
    }
    debug!("Rendered {} nodes in {lines} lines", tree.node_count());
    Ok(())
}

/// Renders `tree` to a byte stream.
///
/// # Errors
///
/// Returns [`printtree_core::Error::Io`] if the stream rejects a write.
pub fn render_tree<Id, W>(tree: &Tree<Id>, out: &mut W) -> Result<()>
where
    Id: NodeId,
    W: io::Write + ?Sized,
{
    let mut adapter = IoAdapter {
        inner: out,
        error: None,
    };
    if render_tree_fmt(tree, &mut adapter).is_err() {
        let err = adapter
            .error
            .take()
            .unwrap_or_else(|| io::Error::other("formatter error"));
        return Err(err.into());
    }
    Ok(())
}

/// Renders `tree` to a new string.
pub fn render_tree_to_string<Id: NodeId>(tree: &Tree<Id>) -> String {
    TreeDisplay(tree).to_string()
}

// ============================================================================
// Display wrapper
// ============================================================================

/// Formats a borrowed tree as its rendered diagram.
///
/// ```rust
/// use printtree_graph::Tree;
/// use printtree_render::TreeDisplay;
///
/// let mut tree: Tree<u32> = Tree::new();
/// tree.add_pair(1, 2).unwrap();
/// assert_eq!(format!("{}", TreeDisplay(&tree)), "* 1\n* 2\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeDisplay<'a, Id>(pub &'a Tree<Id>);

impl<Id: NodeId> fmt::Display for TreeDisplay<'_, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_tree_fmt(self.0, f)
    }
}

// ============================================================================
// io::Write bridge
// ============================================================================

/// Forwards formatted text to a byte stream, keeping the first I/O error.
struct IoAdapter<'w, W: ?Sized> {
    inner: &'w mut W,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

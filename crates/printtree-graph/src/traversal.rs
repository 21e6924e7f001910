//! Branch-ordering traversal.
//!
//! Rendering a tree as a commit-graph style diagram needs, for every node, a
//! column (its branch index) and a position in the output. That takes two
//! passes over the tree:
//!
//! 1. [`BottomUp`] walks from the leaves towards the roots and records how
//!    many generations lie below each node (its scion count).
//! 2. [`TopDown`] walks from the roots, visiting children with the most
//!    scions first so long chains stay on their parent's column, and hands
//!    each child the next free branch index.
//!
//! Both passes are depth-first over an explicit stack, which makes the
//! result fully determined by node ids and edge registration order.

use crate::{Node, Tree};
use log::{debug, trace};
use printtree_core::NodeId;
use std::collections::{HashMap, HashSet};

// ============================================================================
// Result types
// ============================================================================

/// A node and its descendant depth, as yielded by [`BottomUp`].
#[derive(Debug)]
pub struct Scion<'a, Id> {
    /// The visited node.
    pub node: &'a Node<Id>,
    /// Generations between this node and the leaf the walk started from.
    pub scions: usize,
}

/// A node with its rendering position, as yielded by [`TopDown`].
#[derive(Debug)]
pub struct NodeState<'a, Id> {
    /// The visited node.
    pub node: &'a Node<Id>,
    /// Distance from the root along the walk.
    pub generation: usize,
    /// Column the node is drawn in.
    pub branch_index: usize,
}

// ============================================================================
// Pass 1: bottom-up
// ============================================================================

/// Leaf-to-root walk assigning each node a descendant depth.
///
/// Leaves are seeded in descending id order, so the smallest leaf is walked
/// first, and parents are explored in edge registration order. A node keeps
/// the depth of the first path that reaches it. That is neither the longest
/// nor the shortest path in general; it is a fixed tie-break that keeps the
/// output reproducible.
pub struct BottomUp<'a, Id> {
    tree: &'a Tree<Id>,
    stack: Vec<Scion<'a, Id>>,
    seen: HashSet<&'a Id>,
}

impl<'a, Id: NodeId> BottomUp<'a, Id> {
    fn new(tree: &'a Tree<Id>) -> Self {
        let mut leaves = tree.get_leaves();
        leaves.sort_by(|a, b| b.id().cmp(a.id()));
        let stack = leaves
            .into_iter()
            .map(|node| Scion { node, scions: 0 })
            .collect();
        Self {
            tree,
            stack,
            seen: HashSet::new(),
        }
    }
}

impl<'a, Id: NodeId> Iterator for BottomUp<'a, Id> {
    type Item = Scion<'a, Id>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(state) = self.stack.pop() {
            if !self.seen.insert(state.node.id()) {
                continue;
            }
            for parent in tree.parents(state.node.id()) {
                if !self.seen.contains(parent.id()) {
                    self.stack.push(Scion {
                        node: parent,
                        scions: state.scions + 1,
                    });
                }
            }
            trace!("Scion count {} for {}", state.scions, state.node.id());
            return Some(state);
        }
        None
    }
}

// ============================================================================
// Pass 2: top-down
// ============================================================================

/// Root-to-leaf walk assigning each node a generation and branch index.
///
/// Roots are sorted by descending id and numbered in that order, so the
/// root with the greatest id takes branch 0 and the smallest id is visited
/// first. Children are ordered by descending scion count, then ascending
/// id, and take consecutive branch indices starting at their parent's.
///
/// A node with several parents is visited once per parent. The walk is
/// lazy and single use; ask the tree for a new one to start over.
pub struct TopDown<'a, Id> {
    tree: &'a Tree<Id>,
    scions: HashMap<&'a Id, usize>,
    stack: Vec<NodeState<'a, Id>>,
}

impl<'a, Id: NodeId> TopDown<'a, Id> {
    fn new(tree: &'a Tree<Id>) -> Self {
        let scions: HashMap<&'a Id, usize> = tree
            .iter_bottom_up()
            .map(|state| (state.node.id(), state.scions))
            .collect();

        let mut roots = tree.get_roots();
        roots.sort_by(|a, b| b.id().cmp(a.id()));
        let stack = roots
            .into_iter()
            .enumerate()
            .map(|(branch_index, node)| NodeState {
                node,
                generation: 0,
                branch_index,
            })
            .collect();

        Self {
            tree,
            scions,
            stack,
        }
    }

    fn scions_of(&self, node: &Node<Id>) -> usize {
        self.scions.get(node.id()).copied().unwrap_or_default()
    }
}

impl<'a, Id: NodeId> Iterator for TopDown<'a, Id> {
    type Item = NodeState<'a, Id>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let state = self.stack.pop()?;

        let mut children = tree.children(state.node.id());
        children.sort_by(|a, b| {
            self.scions_of(b)
                .cmp(&self.scions_of(a))
                .then_with(|| a.id().cmp(b.id()))
        });
        for (offset, child) in children.into_iter().enumerate() {
            self.stack.push(NodeState {
                node: child,
                generation: state.generation + 1,
                branch_index: state.branch_index + offset,
            });
        }

        Some(state)
    }
}

// ============================================================================
// Tree entry points
// ============================================================================

impl<Id: NodeId> Tree<Id> {
    /// Walks the tree from its leaves, yielding each reachable node once
    /// with its scion count.
    pub fn iter_bottom_up(&self) -> BottomUp<'_, Id> {
        BottomUp::new(self)
    }

    /// Collects [`Tree::iter_bottom_up`] into a map from id to scion count.
    pub fn descendant_depths(&self) -> HashMap<Id, usize> {
        self.iter_bottom_up()
            .map(|state| (state.node.id().clone(), state.scions))
            .collect()
    }

    /// Walks the tree from its roots in rendering order.
    ///
    /// Runs the bottom-up pass eagerly, then yields lazily.
    pub fn iter_top_down(&self) -> TopDown<'_, Id> {
        debug!(
            "Top-down walk over {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        );
        TopDown::new(self)
    }
}

impl<'a, Id: NodeId> IntoIterator for &'a Tree<Id> {
    type Item = NodeState<'a, Id>;
    type IntoIter = TopDown<'a, Id>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_top_down()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tree_from(pairs: &[(&'static str, &'static str)]) -> Tree<&'static str> {
        let mut tree = Tree::new();
        for &(start, end) in pairs {
            tree.add_pair(start, end).unwrap();
        }
        tree
    }

    fn top_down(tree: &Tree<&'static str>) -> Vec<(&'static str, usize, usize)> {
        tree.iter_top_down()
            .map(|state| (*state.node.id(), state.generation, state.branch_index))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Bottom-up
    // ------------------------------------------------------------------------

    #[test]
    fn test_bottom_up_chain() {
        let tree = tree_from(&[("a", "b"), ("b", "c"), ("c", "d")]);
        let visited: Vec<_> = tree
            .iter_bottom_up()
            .map(|state| (*state.node.id(), state.scions))
            .collect();
        assert_eq!(visited, vec![("d", 0), ("c", 1), ("b", 2), ("a", 3)]);
    }

    #[test]
    fn test_bottom_up_first_path_wins() {
        // `a` is reached first through the long arm (d is the smallest
        // leaf), so the short arm through `e` does not lower its count.
        let tree = tree_from(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "e"), ("e", "f")]);
        let depths = tree.descendant_depths();

        assert_eq!(depths[&"a"], 3);
        assert_eq!(depths[&"b"], 2);
        assert_eq!(depths[&"e"], 1);
        assert_eq!(depths[&"f"], 0);
    }

    #[test]
    fn test_bottom_up_smallest_leaf_decides() {
        // Same shape twice; only the leaf ids differ. Whichever arm ends in
        // the smallest leaf is walked first and claims `a`.
        let tree = tree_from(&[("a", "x"), ("a", "m"), ("m", "n"), ("n", "o")]);
        let depths = tree.descendant_depths();
        assert_eq!(depths[&"a"], 3);
        assert_eq!(depths[&"x"], 0);

        let tree = tree_from(&[("a", "b"), ("a", "m"), ("m", "n"), ("n", "o")]);
        assert_eq!(tree.descendant_depths()[&"a"], 1);
    }

    #[test]
    fn test_bottom_up_visits_each_node_once() {
        // Diamond: d has two parents, a is reachable twice.
        let tree = tree_from(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
        let mut visited: Vec<_> = tree.iter_bottom_up().map(|s| *s.node.id()).collect();
        visited.sort_unstable();
        assert_eq!(visited, vec!["a", "b", "c", "d"]);
    }

    /// `x` has parents `p1` and `p2`; `r` sits one hop above `p1` and two
    /// above `p2`. `s` gives `r` a sibling `q` with a count of 2.
    fn shared_leaf_tree(p1_first: bool) -> Tree<&'static str> {
        let mut pairs = vec![
            ("s", "r"),
            ("s", "q"),
            ("q", "q1"),
            ("q1", "q2"),
            ("r", "p1"),
            ("r", "m"),
            ("m", "p2"),
        ];
        if p1_first {
            pairs.extend([("p1", "x"), ("p2", "x")]);
        } else {
            pairs.extend([("p2", "x"), ("p1", "x")]);
        }
        tree_from(&pairs)
    }

    #[test]
    fn test_bottom_up_parent_registration_order() {
        // The parent registered last is popped first and claims `r`.
        let depths = shared_leaf_tree(true).descendant_depths();
        assert_eq!(depths[&"r"], 3);
        assert_eq!(depths[&"m"], 2);
        assert_eq!(depths[&"p1"], 1);

        let depths = shared_leaf_tree(false).descendant_depths();
        assert_eq!(depths[&"r"], 2);
        assert_eq!(depths[&"m"], 2);
        assert_eq!(depths[&"p2"], 1);
    }

    #[test]
    fn test_top_down_follows_parent_registration_order() {
        // r=3 outranks q=2 and keeps the parent column.
        assert_eq!(
            top_down(&shared_leaf_tree(true)),
            vec![
                ("s", 0, 0),
                ("q", 1, 1),
                ("q1", 2, 1),
                ("q2", 3, 1),
                ("r", 1, 0),
                ("p1", 2, 1),
                ("x", 3, 1),
                ("m", 2, 0),
                ("p2", 3, 0),
                ("x", 4, 0),
            ]
        );

        // r=2 ties q=2, so ascending id puts q first.
        assert_eq!(
            top_down(&shared_leaf_tree(false)),
            vec![
                ("s", 0, 0),
                ("r", 1, 1),
                ("p1", 2, 2),
                ("x", 3, 2),
                ("m", 2, 1),
                ("p2", 3, 1),
                ("x", 4, 1),
                ("q", 1, 0),
                ("q1", 2, 0),
                ("q2", 3, 0),
            ]
        );
    }

    #[test]
    fn test_isolated_node_has_zero_depth() {
        let mut tree = tree_from(&[("a", "b")]);
        tree.add("i").unwrap();
        assert_eq!(tree.descendant_depths()[&"i"], 0);
    }

    // ------------------------------------------------------------------------
    // Top-down
    // ------------------------------------------------------------------------

    #[test]
    fn test_top_down_empty_tree() {
        let tree: Tree<&str> = Tree::new();
        assert_eq!(tree.iter_top_down().count(), 0);
    }

    #[test]
    fn test_top_down_single_branch() {
        let tree = tree_from(&[("a", "b"), ("b", "c"), ("c", "d")]);
        assert_eq!(
            top_down(&tree),
            vec![("a", 0, 0), ("b", 1, 0), ("c", 2, 0), ("d", 3, 0)]
        );
    }

    #[test]
    fn test_top_down_deeper_child_keeps_parent_column() {
        let tree = tree_from(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("a", "e"),
            ("e", "f"),
            ("a", "g"),
        ]);
        assert_eq!(
            top_down(&tree),
            vec![
                ("a", 0, 0),
                ("g", 1, 2),
                ("e", 1, 1),
                ("f", 2, 1),
                ("b", 1, 0),
                ("c", 2, 0),
                ("d", 3, 0),
            ]
        );
    }

    #[test]
    fn test_top_down_with_isolated_root() {
        let mut tree = tree_from(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("b", "e"),
            ("e", "f"),
            ("b", "g"),
            ("g", "h"),
        ]);
        tree.add("i").unwrap();

        assert_eq!(
            top_down(&tree),
            vec![
                ("a", 0, 1),
                ("b", 1, 1),
                ("g", 2, 3),
                ("h", 3, 3),
                ("e", 2, 2),
                ("f", 3, 2),
                ("c", 2, 1),
                ("d", 3, 1),
                ("i", 0, 0),
            ]
        );
    }

    #[test]
    fn test_top_down_revisits_shared_children() {
        let tree = tree_from(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
        let visited: Vec<_> = top_down(&tree).into_iter().map(|(id, _, _)| id).collect();
        assert_eq!(visited.iter().filter(|&&id| id == "d").count(), 2);
        assert_eq!(visited.len(), 5);
    }

    #[test]
    fn test_top_down_is_lazy_and_restartable() {
        let tree = tree_from(&[("a", "b"), ("b", "c")]);

        let mut walk = tree.iter_top_down();
        assert_eq!(*walk.next().unwrap().node.id(), "a");
        drop(walk);

        // A fresh walk starts from the roots again.
        assert_eq!(top_down(&tree).len(), 3);
        assert_eq!((&tree).into_iter().count(), 3);
    }
}

//! Pair-list loader.

use crate::Result;
use csv::ReaderBuilder;
use log::{debug, warn};
use printtree_core::NodeId;
use printtree_graph::{Node, Tree};
use std::io::Read;

/// Builds a tree by adding one edge per `(start, end)` pair, in order.
///
/// Either side of a pair may be a raw id or a [`Node`].
///
/// # Errors
///
/// Stops at the first pair that violates a tree invariant, such as a
/// self-loop.
///
/// # Example
///
/// ```rust
/// use printtree_loaders::load_from_pairs;
/// use printtree_graph::Tree;
///
/// let tree: Tree<&str> = load_from_pairs([("a", "b"), ("b", "c")]).unwrap();
/// assert_eq!(tree.node_count(), 3);
/// assert_eq!(tree.edge_count(), 2);
/// ```
pub fn load_from_pairs<Id, S, E, I>(pairs: I) -> Result<Tree<Id>>
where
    Id: NodeId,
    S: Into<Node<Id>>,
    E: Into<Node<Id>>,
    I: IntoIterator<Item = (S, E)>,
{
    let mut tree = Tree::new();
    for (start, end) in pairs {
        tree.add_pair(start, end)?;
    }
    debug!(
        "Loaded {} nodes, {} edges from pairs",
        tree.node_count(),
        tree.edge_count()
    );
    Ok(tree)
}

/// Reads `start<delimiter>end` records and loads them as pairs.
///
/// Records with fewer than two fields are skipped with a warning; fields
/// past the second are ignored. Surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns an error on malformed input or on a self-loop pair.
///
/// # Example
///
/// ```rust
/// use printtree_loaders::load_pairs_reader;
///
/// let tree = load_pairs_reader("a,b\nb,c\n".as_bytes(), b',').unwrap();
/// assert_eq!(tree.edge_count(), 2);
/// ```
pub fn load_pairs_reader<R: Read>(reader: R, delimiter: u8) -> Result<Tree<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(start), Some(end)) => pairs.push((start.to_string(), end.to_string())),
            _ => warn!("Skipped record {index}: expected two fields, found {}", record.len()),
        }
    }
    load_from_pairs(pairs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::HashSet;

    #[test]
    fn test_loads_node_id_edge_pairs() {
        let ids = ["a", "b", "c", "d", "e", "f"];
        let pairs: Vec<_> = ids.windows(2).map(|w| (w[1], w[0])).collect();

        let tree: Tree<&str> = load_from_pairs(pairs.clone()).unwrap();

        let nodes: HashSet<_> = tree.nodes().map(|node| *node.id()).collect();
        assert_eq!(nodes, ids.into_iter().collect());
        let edges: HashSet<_> = tree.edges().map(|edge| edge.key()).collect();
        assert_eq!(edges, pairs.into_iter().collect());
    }

    #[test]
    fn test_accepts_nodes_and_raw_ids() {
        let tree: Tree<u32> = load_from_pairs([(Node::new(1), 2), (Node::new(2), 3)]).unwrap();
        assert_eq!(tree.edge_count(), 2);
        assert_eq!(tree.get_node(&2).unwrap().parent_ids(), &[1]);
    }

    #[test]
    fn test_repeated_pairs_are_ignored() {
        let tree: Tree<&str> = load_from_pairs([("a", "b"), ("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_pair_fails() {
        let err = load_from_pairs::<&str, _, _, _>([("a", "b"), ("c", "c")]).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(printtree_core::Error::EdgeFormsLoop { .. })
        ));
    }

    #[test]
    fn test_pairs_reader_skips_short_records() {
        let tree = load_pairs_reader("a;b\nlonely\n b ; c ;extra\n".as_bytes(), b';').unwrap();
        let edges: HashSet<_> = tree.edges().map(|edge| edge.key()).collect();
        assert_eq!(
            edges,
            HashSet::from([
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string()),
            ])
        );
        assert!(tree.get_node(&"lonely".to_string()).is_none());
    }

    #[test]
    fn test_pairs_reader_rejects_self_loop() {
        let err = load_pairs_reader("x,x\n".as_bytes(), b',').unwrap_err();
        assert!(matches!(err, Error::Core(_)));
    }

    #[test]
    fn test_empty_input() {
        let tree: Tree<String> = load_from_pairs(Vec::<(String, String)>::new()).unwrap();
        assert!(tree.is_empty());
    }
}

//! Node identifier capability.

use std::fmt;
use std::hash::Hash;

/// Anything usable as a node identifier.
///
/// Identifiers must hash and compare consistently, be totally ordered (the
/// traversal sorts by id), and render as text (labels and error messages).
/// Blanket-implemented, so `&str`, `String`, integers, `Rc<str>` and any
/// caller type with these impls qualify.
///
/// # Example
///
/// ```rust
/// use printtree_core::NodeId;
///
/// fn label<Id: NodeId>(id: &Id) -> String {
///     id.to_string()
/// }
///
/// assert_eq!(label(&"a"), "a");
/// assert_eq!(label(&42_u32), "42");
/// ```
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Display + fmt::Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + fmt::Display + fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn assert_node_id<T: NodeId>() {}

    #[test]
    fn test_common_types_are_node_ids() {
        assert_node_id::<&str>();
        assert_node_id::<String>();
        assert_node_id::<u64>();
        assert_node_id::<i32>();
        assert_node_id::<Rc<str>>();
        assert_node_id::<Rc<String>>();
    }
}

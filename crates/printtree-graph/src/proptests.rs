//! Property-based tests for the tree and its traversals.

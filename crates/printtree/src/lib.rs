//! printtree: umbrella crate.
//!
//! This crate re-exports all printtree components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use printtree_core as core;
pub use printtree_graph as graph;

#[cfg(feature = "loaders")]
pub use printtree_loaders as loaders;

#[cfg(feature = "render")]
pub use printtree_render as render;

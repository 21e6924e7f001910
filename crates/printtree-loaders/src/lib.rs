//! Loaders that build a [`Tree`](printtree_graph::Tree) from plain data.
//!
//! - [`load_from_pairs`]: `(start, end)` pairs, one edge each
//! - [`load_pairs_reader`]: the same, read from two-column delimited text
//! - [`CsvLoader`]: delimited rows with an id column and optional parent
//!   and child columns
//!
//! All of them go through `Tree::add` / `Tree::add_pair` only, so repeated ids and
//! edges are harmless.

#![forbid(unsafe_code)]

pub mod delimited;
pub mod error;
pub mod pairs;

pub use delimited::{CsvLoader, IdValidator, default_id_validator};
pub use error::{Error, Result};
pub use pairs::{load_from_pairs, load_pairs_reader};

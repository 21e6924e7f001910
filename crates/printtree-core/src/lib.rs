//! printtree core: shared error types and identifier traits.
//!
//! This crate has no internal printtree dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`id`]: The [`NodeId`] capability trait

#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{Error, Result};
pub use id::NodeId;

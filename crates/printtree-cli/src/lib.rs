//! # printtree-cli
//!
//! Command-line front end for printtree:
//! - `pairs`: render two-column `start,end` records
//! - `csv`: render delimited rows with id, parent and child columns
//! - `config`: inspect the effective configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

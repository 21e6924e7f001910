//! Error types for printtree-loaders

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a tree
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A row or pair violated a tree invariant (e.g. a self-loop)
    #[error("Tree error: {0}")]
    Core(#[from] printtree_core::Error),

    /// Malformed delimited input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Could not open an input file
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates an I/O error annotated with the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

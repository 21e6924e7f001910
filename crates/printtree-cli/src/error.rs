//! Error types for printtree-cli

use thiserror::Error;

/// Result type alias for printtree-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in printtree-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from printtree-core (including render output failures)
    #[error("Core error: {0}")]
    Core(#[from] printtree_core::Error),

    /// Error while loading input
    #[error("Load error: {0}")]
    Loader(#[from] printtree_loaders::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// I/O error on stdin/stdout or an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the schema
    #[error("Invalid config file: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Could not serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

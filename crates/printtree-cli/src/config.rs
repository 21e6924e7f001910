//! Configuration file handling.
//!
//! The config file is TOML:
//!
//! ```toml
//! log_level = "warn"
//!
//! [csv]
//! header_rows = 0
//! id_column = 0
//! parent_column = 1
//! delimiter = ","
//! ```
//!
//! Lookup order: `--config` (or `$PRINTTREE_CONFIG`), then
//! `<platform config dir>/printtree/config.toml` if it exists, then
//! built-in defaults. Every key is optional.

use crate::cli::CsvArgs;
use crate::{Error, Result};
use log::debug;
use printtree_loaders::CsvLoader;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory and file name under the platform config dir.
const PROJECT_DIR: &str = "printtree";
const CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Config
// ============================================================================

/// Effective printtree configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when neither `-v` nor `RUST_LOG` is given
    pub log_level: String,

    /// Defaults for the delimited-row loader
    pub csv: CsvConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            csv: CsvConfig::default(),
        }
    }
}

impl Config {
    /// Platform default config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_DIR).join(CONFIG_FILE))
    }

    /// The file `load` would read, if any.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.exists()),
        }
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. The platform default is used only if
    /// present; otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("No config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.csv.delimiter_byte()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ============================================================================
// CsvConfig
// ============================================================================

/// `[csv]` section: delimited-row loader options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Leading rows to skip
    pub header_rows: usize,

    /// Column holding each row's id
    pub id_column: usize,

    /// Column holding the row's parent id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_column: Option<usize>,

    /// Column holding the row's child id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_column: Option<usize>,

    /// Field delimiter (single ASCII character)
    pub delimiter: char,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            header_rows: 0,
            id_column: 0,
            parent_column: None,
            child_column: None,
            delimiter: ',',
        }
    }
}

impl CsvConfig {
    /// Returns a copy with any options given on the command line applied.
    pub fn with_overrides(&self, args: &CsvArgs) -> Self {
        Self {
            header_rows: args.header_rows.unwrap_or(self.header_rows),
            id_column: args.id_column.unwrap_or(self.id_column),
            parent_column: args.parent_column.or(self.parent_column),
            child_column: args.child_column.or(self.child_column),
            delimiter: args.delimiter.unwrap_or(self.delimiter),
        }
    }

    /// The delimiter as a byte.
    pub fn delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.delimiter)
    }

    /// Builds a loader from these options.
    pub fn loader(&self) -> Result<CsvLoader> {
        let mut loader = CsvLoader::new()
            .with_header_rows(self.header_rows)
            .with_id_column(self.id_column)
            .with_delimiter(self.delimiter_byte()?);
        if let Some(column) = self.parent_column {
            loader = loader.with_parent_column(column);
        }
        if let Some(column) = self.child_column {
            loader = loader.with_child_column(column);
        }
        Ok(loader)
    }
}

/// Converts a delimiter character to the byte the csv reader expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(Error::config(format!(
            "delimiter must be a single ASCII character, got {delimiter:?}"
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================

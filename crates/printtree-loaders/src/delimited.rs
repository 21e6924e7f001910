//! Delimited-row loader.
//!
//! Each data row names one node in its id column and, optionally, the
//! node's parent and/or child in other columns:
//!
//! ```text
//! id,parent
//! a,
//! b,a
//! c,b
//! ```
//!
//! Rows whose id fails validation are skipped, as are parent or child
//! cells that fail it. Rows may have differing lengths; a column past the
//! end of a row counts as an empty cell.

use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use printtree_graph::Tree;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Predicate deciding whether a cell holds a usable id.
pub type IdValidator = Box<dyn Fn(&str) -> bool>;

/// Accepts any non-empty cell. `"0"` is a valid id.
pub fn default_id_validator(value: &str) -> bool {
    !value.is_empty()
}

// ============================================================================
// CsvLoader
// ============================================================================

/// Builds a tree from delimited rows.
///
/// # Example
///
/// ```rust
/// use printtree_loaders::CsvLoader;
///
/// let tree = CsvLoader::new()
///     .with_header_rows(1)
///     .with_parent_column(1)
///     .load_str("id,parent\na,\nb,a\nc,b\n")
///     .unwrap();
///
/// assert_eq!(tree.node_count(), 3);
/// assert!(tree.get_edge(&"a".to_string(), &"b".to_string()).is_some());
/// ```
pub struct CsvLoader {
    header_rows: usize,
    id_column: usize,
    parent_column: Option<usize>,
    child_column: Option<usize>,
    delimiter: u8,
    validator: IdValidator,
}

impl CsvLoader {
    /// Creates a loader reading ids from column 0, with no header rows and
    /// no relation columns.
    pub fn new() -> Self {
        Self {
            header_rows: 0,
            id_column: 0,
            parent_column: None,
            child_column: None,
            delimiter: b',',
            validator: Box::new(default_id_validator),
        }
    }

    /// Skips this many leading rows.
    pub fn with_header_rows(mut self, count: usize) -> Self {
        self.header_rows = count;
        self
    }

    /// Reads node ids from this column.
    pub fn with_id_column(mut self, index: usize) -> Self {
        self.id_column = index;
        self
    }

    /// Reads each row's parent id from this column.
    pub fn with_parent_column(mut self, index: usize) -> Self {
        self.parent_column = Some(index);
        self
    }

    /// Reads each row's child id from this column.
    pub fn with_child_column(mut self, index: usize) -> Self {
        self.child_column = Some(index);
        self
    }

    /// Sets the field delimiter (default `,`).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replaces the id validator.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.validator = Box::new(validator);
        self
    }

    /// Loads rows from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed input or when a row links a node to
    /// itself.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Tree<String>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut tree = Tree::new();
        let mut skipped = 0usize;
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if index < self.header_rows {
                continue;
            }
            if !self.load_row(&mut tree, &record)? {
                debug!("Skipped row {index}: no valid id in column {}", self.id_column);
                skipped += 1;
            }
        }

        info!(
            "Loaded {} nodes, {} edges ({skipped} rows skipped)",
            tree.node_count(),
            tree.edge_count()
        );
        Ok(tree)
    }

    /// Loads rows from a file.
    ///
    /// # Errors
    ///
    /// As [`CsvLoader::load_reader`], plus [`Error::Io`] if the file cannot
    /// be opened.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Tree<String>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io_with_path(e, path))?;
        debug!("Loading rows from {}", path.display());
        self.load_reader(file)
    }

    /// Loads rows from in-memory text.
    ///
    /// # Errors
    ///
    /// As [`CsvLoader::load_reader`].
    pub fn load_str(&self, text: &str) -> Result<Tree<String>> {
        self.load_reader(text.as_bytes())
    }

    /// Adds one row; returns false if the row had no valid id.
    fn load_row(&self, tree: &mut Tree<String>, record: &StringRecord) -> Result<bool> {
        let Some(id) = self.valid_cell(record, Some(self.id_column)) else {
            return Ok(false);
        };
        tree.add(id.to_string())?;

        if let Some(parent) = self.valid_cell(record, self.parent_column) {
            tree.add_pair(parent.to_string(), id.to_string())?;
        }
        if let Some(child) = self.valid_cell(record, self.child_column) {
            tree.add_pair(id.to_string(), child.to_string())?;
        }
        Ok(true)
    }

    fn valid_cell<'r>(&self, record: &'r StringRecord, column: Option<usize>) -> Option<&'r str> {
        column
            .and_then(|index| record.get(index))
            .filter(|value| (self.validator)(value))
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CsvLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvLoader")
            .field("header_rows", &self.header_rows)
            .field("id_column", &self.id_column)
            .field("parent_column", &self.parent_column)
            .field("child_column", &self.child_column)
            .field("delimiter", &(self.delimiter as char))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! The grid: an in-memory, mutable, rectangular table
//!
//! A [`Grid`] owns an ordered list of [`GridHeader`]s and an ordered list of
//! rows, each row an ordered list of [`Value`]s. Producers open a row with
//! [`Grid::add_row`] and push values onto it; consumers read headers and
//! rows back, or run transforms in place.
//!
//! ## Invariants
//!
//! - **Rectangular**: every shape-sensitive operation (width queries, column
//!   add/remove, visible rows, sort) first checks that all rows have the same
//!   length and fails with [`GridError::RaggedRows`] otherwise.
//! - **Column index coherence**: the label → position cache is rebuilt by
//!   the one method that mutates the header list.
//! - **Write cursor**: values can only be appended while the cursor points
//!   at an existing row ([`GridError::NoOpenRow`] otherwise).
//!
//! Headers and rows are sized independently. Nothing pads rows to the header
//! count; mismatches surface when a shape-sensitive operation runs.
//!
//! ## Access
//!
//! Accessors hand out borrowed views (`&[GridHeader]`, `&[Vec<Value>]`).
//! All mutation goes through `Grid` methods, which return `&mut Self`
//! (or `GridResult<&mut Self>` when they can fail) so calls chain:
//!
//! ```
//! use gridkit_engine::Grid;
//! use gridkit_core::cells;
//!
//! # fn main() -> gridkit_core::GridResult<()> {
//! let mut grid = Grid::new();
//! grid.add_header("Name").add_header("Value");
//! grid.add_row().add_values(cells!["a", 1])?;
//! grid.add_row().add_values(cells!["b", 2])?;
//! assert_eq!(grid.width()?, 2);
//! # Ok(())
//! # }
//! ```

mod columns;
mod headers;
mod rows;
mod sort;
mod substitute;

pub use columns::CUMULATIVE_SUFFIX;
pub use sort::{RowComparator, SortOrder};

use gridkit_core::{GridError, GridHeader, GridResult, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Auxiliary key/value bag attached to a grid
pub type MetaData = BTreeMap<String, serde_json::Value>;

/// Mutable in-memory table of loosely typed cells
#[derive(Debug, Clone, Default)]
pub struct Grid {
    title: Option<String>,
    subtitle: Option<String>,
    table: Option<String>,
    headers: Vec<GridHeader>,
    meta_data: MetaData,
    rows: Vec<Vec<Value>>,
    /// Column label → position, derived from `headers`
    column_index: HashMap<String, usize>,
    /// Row accepting appended values
    cursor: Option<usize>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with preset metadata
    pub fn with_meta_data(meta_data: MetaData) -> Self {
        Grid {
            meta_data,
            ..Self::default()
        }
    }

    // ========================================================================
    // Descriptive fields
    // ========================================================================

    /// Grid title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the grid title
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Grid subtitle
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Set the grid subtitle
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> &mut Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Name of a table the grid corresponds to
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Set the corresponding table name
    pub fn set_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    // ========================================================================
    // Metadata bag
    // ========================================================================

    /// The metadata bag
    pub fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }

    /// Replace the metadata bag
    pub fn set_meta_data(&mut self, meta_data: MetaData) -> &mut Self {
        self.meta_data = meta_data;
        self
    }

    /// Insert one metadata entry, replacing any previous value for `key`
    pub fn add_meta_data(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.meta_data.insert(key.into(), value.into());
        self
    }

    /// Whether the metadata bag holds `key`
    pub fn has_meta_data_key(&self, key: &str) -> bool {
        self.meta_data.contains_key(key)
    }

    // ========================================================================
    // Shape
    // ========================================================================

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the first row, 0 without rows
    ///
    /// Fails with [`GridError::RaggedRows`] if rows differ in length.
    pub fn width(&self) -> GridResult<usize> {
        self.verify_shape()?;
        Ok(self.rows.first().map_or(0, Vec::len))
    }

    /// Whether the grid has at least one row and one column
    pub fn has_values(&self) -> GridResult<bool> {
        Ok(self.width()? > 0 && self.height() > 0)
    }

    /// Check that all rows have the same number of cells
    pub fn verify_shape(&self) -> GridResult<()> {
        let mut expected: Option<usize> = None;
        for (row, cells) in self.rows.iter().enumerate() {
            match expected {
                Some(previous) if previous != cells.len() => {
                    return Err(GridError::RaggedRows {
                        previous,
                        actual: cells.len(),
                        row,
                    });
                }
                _ => expected = Some(cells.len()),
            }
        }
        Ok(())
    }

    /// Check that `column` exists in every row
    fn check_column(&self, column: usize) -> GridResult<()> {
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| column >= cells.len())
        {
            Some((row, cells)) => Err(GridError::ColumnOutOfBounds {
                row,
                column,
                width: cells.len(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bracketed<I, T>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
        where
            I: IntoIterator<Item = T>,
            T: fmt::Display,
        {
            f.write_str("[")?;
            for (i, item) in items.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", item)?;
            }
            f.write_str("]\n")
        }

        f.write_str("[\n")?;
        if !self.headers.is_empty() {
            bracketed(f, self.headers.iter().map(|h| &h.name))?;
        }
        for row in &self.rows {
            bracketed(f, row)?;
        }
        f.write_str("]")
    }
}

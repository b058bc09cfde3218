//! Error types for gridkit
//!
//! This module defines all error types used throughout the grid and its
//! renderers. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Lookups by name (header position, unique values) are not errors: they
//! return `Option` or an empty collection. Positional access is authoritative
//! and always bounds-checked through the variants below.

use std::io;
use thiserror::Error;

/// Result type alias for grid operations
pub type GridResult<T> = std::result::Result<T, GridError>;

/// Error types for grid operations
#[derive(Debug, Error)]
pub enum GridError {
    /// Rows of unequal length found by a shape-sensitive operation
    #[error(
        "Grid rows do not have the same number of cells, previous: {previous}, this: {actual}, at row: {row}"
    )]
    RaggedRows {
        /// Length of the rows before the offending one
        previous: usize,
        /// Length of the offending row
        actual: usize,
        /// Position of the offending row
        row: usize,
    },

    /// Column values supplied for a new column do not match the row count
    #[error("Number of column values ({values}) is not equal to number of rows ({rows})")]
    ColumnLengthMismatch {
        /// Number of supplied values
        values: usize,
        /// Number of rows in the grid
        rows: usize,
    },

    /// Rows are wider than the header list in a header-driven projection
    #[error("Grid has {headers} headers but rows have {width} cells")]
    HeaderWidthMismatch {
        /// Number of headers
        headers: usize,
        /// Width of the rows
        width: usize,
    },

    /// Row index outside of the grid
    #[error("Row index {row} out of bounds, grid height: {height}")]
    RowOutOfBounds {
        /// Requested row
        row: usize,
        /// Current number of rows
        height: usize,
    },

    /// Column index outside of a row
    #[error("Column index {column} out of bounds at row {row}, row width: {width}")]
    ColumnOutOfBounds {
        /// Row that was inspected
        row: usize,
        /// Requested column
        column: usize,
        /// Width of the inspected row
        width: usize,
    },

    /// Header position outside of the header list
    #[error("Header index {index} out of bounds, number of headers: {len}")]
    HeaderOutOfBounds {
        /// Requested position
        index: usize,
        /// Current number of headers
        len: usize,
    },

    /// Sort column (1-based) outside of the grid width
    #[error("Sort column {column} out of bounds, grid width: {width}")]
    SortColumnOutOfBounds {
        /// Requested 1-based column
        column: usize,
        /// Current width
        width: usize,
    },

    /// Invalid limit window
    #[error("Illegal start or end pos: {start}, {end}, {height}")]
    InvalidWindow {
        /// Window start (inclusive)
        start: usize,
        /// Window end (exclusive)
        end: usize,
        /// Current number of rows
        height: usize,
    },

    /// A value was appended while no row is open for writing
    #[error("No row is open for writing, call add_row first")]
    NoOpenRow,

    /// A cell could not be used as a number in a cumulative sum
    #[error("Value '{value}' at row {row}, column {column} is not numeric")]
    NotNumeric {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        column: usize,
        /// Rendered cell value
        value: String,
    },

    /// I/O error while rendering
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error while rendering or reading configuration
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid writer configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error reported by a tabular source feeding the grid
    #[error("Source error: {0}")]
    Source(String),
}

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        GridError::Serialization(e.to_string())
    }
}

impl GridError {
    /// Check if this is a shape violation
    pub fn is_shape_violation(&self) -> bool {
        matches!(
            self,
            GridError::RaggedRows { .. }
                | GridError::ColumnLengthMismatch { .. }
                | GridError::HeaderWidthMismatch { .. }
        )
    }

    /// Check if this is a bounds violation
    pub fn is_bounds_violation(&self) -> bool {
        matches!(
            self,
            GridError::RowOutOfBounds { .. }
                | GridError::ColumnOutOfBounds { .. }
                | GridError::HeaderOutOfBounds { .. }
                | GridError::SortColumnOutOfBounds { .. }
                | GridError::InvalidWindow { .. }
        )
    }
}

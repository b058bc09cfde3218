//! CSV rendering
//!
//! One record of header names (when the grid has headers) followed by one
//! record per row. All columns are written, hidden ones included; null
//! cells become empty fields.

use gridkit_core::{GridError, GridResult};
use gridkit_engine::Grid;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::debug;

/// Options for [`CsvWriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Quote every field, not only those that need it
    pub force_quote: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            force_quote: false,
        }
    }
}

impl CsvOptions {
    /// Use `delimiter` between fields
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Quote every field
    pub fn with_force_quote(mut self) -> Self {
        self.force_quote = true;
        self
    }
}

/// Writes a grid as CSV
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    options: CsvOptions,
}

impl CsvWriter {
    /// Create a writer with the given options
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Render `grid` into `out`
    pub fn write<W: io::Write>(&self, grid: &Grid, out: W) -> GridResult<()> {
        let quote_style = if self.options.force_quote {
            csv::QuoteStyle::Always
        } else {
            csv::QuoteStyle::Necessary
        };
        // Header and row lengths are independent
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.options.delimiter)
            .quote_style(quote_style)
            .flexible(true)
            .from_writer(out);

        if !grid.headers().is_empty() {
            writer
                .write_record(grid.headers().iter().map(|h| h.name.as_str()))
                .map_err(csv_error)?;
        }
        for row in grid.rows() {
            writer
                .write_record(row.iter().map(|v| v.to_string()))
                .map_err(csv_error)?;
        }
        writer.flush()?;

        debug!(target: "gridkit::io", rows = grid.height(), "Wrote CSV");
        Ok(())
    }

    /// Render `grid` into a string
    pub fn to_string(&self, grid: &Grid) -> GridResult<String> {
        let mut buf = Vec::new();
        self.write(grid, &mut buf)?;
        String::from_utf8(buf).map_err(|e| GridError::Serialization(e.to_string()))
    }
}

fn csv_error(e: csv::Error) -> GridError {
    match e.into_kind() {
        csv::ErrorKind::Io(err) => GridError::Io(err),
        other => GridError::Serialization(format!("CSV error: {:?}", other)),
    }
}

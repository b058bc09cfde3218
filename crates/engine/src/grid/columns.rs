//! Column transforms
//!
//! Every transform here checks shape and bounds before it touches the grid,
//! so a failed call leaves rows and headers unchanged.

use super::Grid;
use gridkit_core::{GridError, GridHeader, GridResult, Value};
use tracing::debug;

/// Suffix appended to the name and column label of a cumulative header
pub const CUMULATIVE_SUFFIX: &str = "_cumulative";

impl Grid {
    /// Append a column, one value per row in row order
    ///
    /// `values` must hold exactly one value per row. No header is added.
    pub fn add_column(&mut self, values: Vec<Value>) -> GridResult<&mut Self> {
        let width = self.width()?;
        self.add_column_at(width, values)
    }

    /// Insert a column at `index`, one value per row in row order
    pub fn add_column_at(&mut self, index: usize, values: Vec<Value>) -> GridResult<&mut Self> {
        let width = self.width()?;
        if values.len() != self.rows.len() {
            return Err(GridError::ColumnLengthMismatch {
                values: values.len(),
                rows: self.rows.len(),
            });
        }
        if index > width && !self.rows.is_empty() {
            return Err(GridError::ColumnOutOfBounds {
                row: 0,
                column: index,
                width,
            });
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(index, value);
        }
        Ok(self)
    }

    /// Append a column holding `value` in every row
    pub fn add_and_populate_column(&mut self, value: impl Into<Value>) -> GridResult<&mut Self> {
        self.add_and_populate_columns(1, value)
    }

    /// Append `count` columns holding `value` in every row
    pub fn add_and_populate_columns(
        &mut self,
        count: usize,
        value: impl Into<Value>,
    ) -> GridResult<&mut Self> {
        self.verify_shape()?;
        let value = value.into();
        for row in &mut self.rows {
            row.extend(std::iter::repeat(&value).take(count).cloned());
        }
        Ok(self)
    }

    /// Remove the column at `index` from the header list (if any) and every row
    pub fn remove_column(&mut self, index: usize) -> GridResult<&mut Self> {
        let width = self.width()?;
        self.check_removable(index, width)?;
        self.drop_column(index);
        debug!(target: "gridkit::grid", column = index, "Removed column");
        Ok(self)
    }

    /// Remove the column whose header equals `header` (by name)
    ///
    /// No-op when no header matches.
    pub fn remove_column_by_header(&mut self, header: &GridHeader) -> GridResult<&mut Self> {
        match self.headers.iter().position(|h| h == header) {
            Some(index) => self.remove_column(index),
            None => Ok(self),
        }
    }

    fn check_removable(&self, index: usize, width: usize) -> GridResult<()> {
        if !self.rows.is_empty() && index >= width {
            return Err(GridError::ColumnOutOfBounds {
                row: 0,
                column: index,
                width,
            });
        }
        let headers = self.headers.len();
        if (headers > 0 || self.rows.is_empty()) && index >= headers {
            return Err(GridError::HeaderOutOfBounds {
                index,
                len: headers,
            });
        }
        Ok(())
    }

    fn drop_column(&mut self, index: usize) {
        if index < self.headers.len() {
            self.update_headers(|headers| {
                headers.remove(index);
            });
        }
        for row in &mut self.rows {
            row.remove(index);
        }
    }

    /// Whether every cell of column `index` is null
    ///
    /// Only [`Value::Null`] counts; empty strings are values.
    pub fn column_is_empty(&self, index: usize) -> GridResult<bool> {
        self.verify_shape()?;
        self.check_column(index)?;
        Ok(self.rows.iter().all(|row| row[index].is_null()))
    }

    /// Remove every column whose cells are all null
    ///
    /// Columns are scanned from last to first. Headers, when present, are
    /// removed together with their column.
    pub fn remove_empty_columns(&mut self) -> GridResult<&mut Self> {
        let width = self.width()?;
        if width == 0 {
            return Ok(self);
        }
        let mut empty = Vec::new();
        for index in (0..width).rev() {
            if self.column_is_empty(index)? {
                empty.push(index);
            }
        }
        for &index in &empty {
            self.check_removable(index, width)?;
        }
        for &index in &empty {
            self.drop_column(index);
        }
        debug!(
            target: "gridkit::grid",
            removed = empty.len(),
            width = width - empty.len(),
            "Removed empty columns"
        );
        Ok(self)
    }

    /// Append a running-sum column of column `index`
    ///
    /// Sums are `f64`, accumulated top to bottom. A null cell adds 0 but
    /// still receives the sum so far. Strings are parsed as numbers; other
    /// non-numeric cells fail with [`GridError::NotNumeric`].
    ///
    /// With `add_header`, and when column `index` has a header, a copy of that
    /// header with [`CUMULATIVE_SUFFIX`] on its name and column is appended.
    pub fn add_cumulative_column(&mut self, index: usize, add_header: bool) -> GridResult<&mut Self> {
        self.verify_shape()?;
        let column = self.column(index)?;
        let (cumulative, total) = running_sums(&column, index)?;

        self.add_column(cumulative)?;

        if add_header {
            if let Some(header) = self.headers.get(index) {
                let header = header.suffixed(CUMULATIVE_SUFFIX);
                self.add_header(header);
            }
        }
        debug!(target: "gridkit::grid", column = index, total, "Added cumulative column");
        Ok(self)
    }

    /// Append cumulative columns, with headers, for `count` columns starting at `start`
    ///
    /// Columns are processed left to right, as if [`Grid::add_cumulative_column`]
    /// were called for each, so the range may reach columns appended earlier
    /// in the same call. Every column is computed before any is appended.
    pub fn add_cumulative_columns(&mut self, start: usize, count: usize) -> GridResult<&mut Self> {
        let width = self.width()?;
        let end = start
            .checked_add(count)
            .ok_or(GridError::ColumnOutOfBounds {
                row: 0,
                column: start,
                width,
            })?;

        let mut columns: Vec<Vec<Value>> = Vec::new();
        let mut headers: Vec<GridHeader> = Vec::new();
        for index in start..end {
            let source = if index < width {
                self.column(index)?
            } else if self.rows.is_empty() {
                Vec::new()
            } else {
                columns
                    .get(index - width)
                    .cloned()
                    .ok_or(GridError::ColumnOutOfBounds {
                        row: 0,
                        column: index,
                        width: width + columns.len(),
                    })?
            };
            let (cumulative, _) = running_sums(&source, index)?;

            let header = match index.checked_sub(self.headers.len()) {
                None => self.headers.get(index),
                Some(planned) => headers.get(planned),
            }
            .map(|h| h.suffixed(CUMULATIVE_SUFFIX));
            match header {
                Some(header) => headers.push(header),
                // Without rows only headers are added, and none can follow
                None if self.rows.is_empty() => break,
                None => {}
            }
            columns.push(cumulative);
        }

        let added = columns.len();
        for column in columns {
            self.add_column(column)?;
        }
        self.update_headers(|existing| existing.extend(headers));
        debug!(target: "gridkit::grid", start, added, "Added cumulative columns");
        Ok(self)
    }
}

/// Running `f64` sums of `column`; nulls add 0, other non-numeric cells fail
fn running_sums(column: &[Value], index: usize) -> GridResult<(Vec<Value>, f64)> {
    let mut sum = 0.0_f64;
    let mut cumulative = Vec::with_capacity(column.len());
    for (row, value) in column.iter().enumerate() {
        if !value.is_null() {
            sum += value.to_f64().ok_or_else(|| GridError::NotNumeric {
                row,
                column: index,
                value: value.to_string(),
            })?;
        }
        cumulative.push(Value::Float(sum));
    }
    Ok((cumulative, sum))
}

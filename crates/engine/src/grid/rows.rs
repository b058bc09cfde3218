//! Row store and write cursor

use super::Grid;
use gridkit_core::{GridError, GridResult, Value};
use tracing::debug;

impl Grid {
    // ========================================================================
    // Write cursor
    // ========================================================================

    /// Open a new empty row at the end and point the write cursor at it
    pub fn add_row(&mut self) -> &mut Self {
        self.rows.push(Vec::new());
        self.cursor = Some(self.rows.len() - 1);
        self
    }

    /// Append copies of all rows of `other`; the cursor moves to the last one
    pub fn add_rows(&mut self, other: &Grid) -> &mut Self {
        self.rows.extend(other.rows.iter().cloned());
        if !self.rows.is_empty() {
            self.cursor = Some(self.rows.len() - 1);
        }
        self
    }

    /// Index of the row currently accepting values
    pub fn current_row_index(&self) -> Option<usize> {
        self.cursor
    }

    fn current_row(&mut self) -> GridResult<&mut Vec<Value>> {
        self.cursor
            .and_then(|i| self.rows.get_mut(i))
            .ok_or(GridError::NoOpenRow)
    }

    /// Append one value to the current row
    pub fn add_value(&mut self, value: impl Into<Value>) -> GridResult<&mut Self> {
        self.current_row()?.push(value.into());
        Ok(self)
    }

    /// Append values to the current row, in order
    ///
    /// Accepts anything iterable over values or references to values: a
    /// `Vec<Value>`, a slice, an array, or the output of the
    /// [`cells!`](gridkit_core::cells) macro.
    pub fn add_values<I>(&mut self, values: I) -> GridResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.current_row()?.extend(values.into_iter().map(Into::into));
        Ok(self)
    }

    /// Append `count` empty strings to the current row
    pub fn add_empty_values(&mut self, count: usize) -> GridResult<&mut Self> {
        self.add_values(std::iter::repeat_with(|| Value::from("")).take(count))
    }

    /// Append `count` nulls to the current row
    pub fn add_null_values(&mut self, count: usize) -> GridResult<&mut Self> {
        self.add_values(std::iter::repeat(Value::Null).take(count))
    }

    /// Remove the row under the write cursor and move the cursor back one row
    pub fn remove_current_row(&mut self) -> GridResult<Vec<Value>> {
        let index = match self.cursor {
            Some(i) if i < self.rows.len() => i,
            _ => return Err(GridError::NoOpenRow),
        };
        let removed = self.rows.remove(index);
        self.cursor = index.checked_sub(1);
        Ok(removed)
    }

    // ========================================================================
    // Row access
    // ========================================================================

    /// Row at `index`
    pub fn row(&self, index: usize) -> GridResult<&[Value]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(GridError::RowOutOfBounds {
                row: index,
                height: self.rows.len(),
            })
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Rows restricted to the columns whose header is not hidden
    ///
    /// A grid without headers has no visible rows, whatever its content.
    /// Rows wider than the header list fail with
    /// [`GridError::HeaderWidthMismatch`].
    pub fn visible_rows(&self) -> GridResult<Vec<Vec<Value>>> {
        let width = self.width()?;
        if self.headers.is_empty() {
            return Ok(Vec::new());
        }
        if width > self.headers.len() {
            return Err(GridError::HeaderWidthMismatch {
                headers: self.headers.len(),
                width,
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.headers)
                    .filter(|(_, header)| !header.hidden)
                    .map(|(value, _)| value.clone())
                    .collect()
            })
            .collect())
    }

    /// Number of cells in the first visible row, 0 without visible rows
    pub fn visible_width(&self) -> GridResult<usize> {
        Ok(self.visible_rows()?.first().map_or(0, Vec::len))
    }

    /// Copy of the column at `index` across all rows
    pub fn column(&self, index: usize) -> GridResult<Vec<Value>> {
        self.check_column(index)?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    /// Cell at (`row`, `column`)
    ///
    /// Checks the row against the height and the column against that row's
    /// own length.
    pub fn value(&self, row: usize, column: usize) -> GridResult<&Value> {
        let cells = self.row(row)?;
        cells.get(column).ok_or(GridError::ColumnOutOfBounds {
            row,
            column,
            width: cells.len(),
        })
    }

    // ========================================================================
    // Limits
    // ========================================================================

    /// Keep only the first `limit` rows
    ///
    /// A limit of 0, or one at or above the current height, leaves the grid
    /// unchanged.
    pub fn limit(&mut self, limit: usize) -> &mut Self {
        if limit > 0 && limit <= self.rows.len() {
            self.rows.truncate(limit);
            self.clamp_cursor();
            debug!(target: "gridkit::grid", limit, "Limited grid");
        }
        self
    }

    /// Keep only rows in `[start, end)`
    ///
    /// Requires `start <= end <= height`.
    pub fn limit_window(&mut self, start: usize, end: usize) -> GridResult<&mut Self> {
        let height = self.rows.len();
        if start > end || end > height {
            return Err(GridError::InvalidWindow { start, end, height });
        }
        self.rows.truncate(end);
        self.rows.drain(..start);
        self.clamp_cursor();
        debug!(target: "gridkit::grid", start, end, "Limited grid to window");
        Ok(self)
    }

    fn clamp_cursor(&mut self) {
        if let Some(i) = self.cursor {
            if i >= self.rows.len() {
                self.cursor = self.rows.len().checked_sub(1);
            }
        }
    }
}

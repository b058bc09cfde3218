//! Row sorting
//!
//! Rows are ordered by the value in one column. Cells that cannot take part
//! in an ordered comparison (null, NaN, or missing) are *invalid*. Invalid
//! cells are grouped at the front of an ascending sort and at the back of a
//! descending one. Two invalid cells compare equal, so the stable sort keeps
//! their original relative order.

use super::Grid;
use gridkit_core::{GridError, GridResult, Value};
use std::cmp::Ordering;
use tracing::debug;

/// Requested row order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
    /// Leave rows as they are
    Unsorted,
}

impl SortOrder {
    /// Whether rows are reordered at all
    pub fn is_sorted(self) -> bool {
        !matches!(self, SortOrder::Unsorted)
    }
}

/// Signed order: negative is ascending, positive descending, zero leaves
/// rows untouched.
impl From<i32> for SortOrder {
    fn from(order: i32) -> Self {
        match order.cmp(&0) {
            Ordering::Less => SortOrder::Ascending,
            Ordering::Greater => SortOrder::Descending,
            Ordering::Equal => SortOrder::Unsorted,
        }
    }
}

/// Compares rows by the cell at a 0-based column
#[derive(Debug, Clone, Copy)]
pub struct RowComparator {
    column: usize,
    order: SortOrder,
}

impl RowComparator {
    /// Comparator over the cell at `column`
    pub fn new(column: usize, order: SortOrder) -> Self {
        RowComparator { column, order }
    }

    fn key<'a>(&self, row: &'a [Value]) -> Option<&'a Value> {
        row.get(self.column).filter(|v| v.is_sort_key())
    }

    /// Order two rows; invalid cells go first ascending and last descending
    pub fn compare(&self, a: &[Value], b: &[Value]) -> Ordering {
        let descending = self.order == SortOrder::Descending;
        match (self.key(a), self.key(b)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) if descending => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) if descending => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) if descending => y.sort_cmp(x),
            (Some(x), Some(y)) => x.sort_cmp(y),
        }
    }
}

impl Grid {
    /// Stable sort of rows by the value in a 1-based `column`
    ///
    /// `order` accepts a [`SortOrder`] or a signed integer. Unsorted order
    /// and grids without values are no-ops; otherwise `column` must lie in
    /// `1..=width`.
    pub fn sort(&mut self, column: usize, order: impl Into<SortOrder>) -> GridResult<&mut Self> {
        let order = order.into();
        if !order.is_sorted() || !self.has_values()? {
            return Ok(self);
        }
        let width = self.width()?;
        if column == 0 || column > width {
            return Err(GridError::SortColumnOutOfBounds { column, width });
        }

        let comparator = RowComparator::new(column - 1, order);
        self.rows.sort_by(|a, b| comparator.compare(a, b));

        debug!(target: "gridkit::grid", column, ?order, rows = self.rows.len(), "Sorted rows");
        Ok(self)
    }
}

//! Header registry

use super::Grid;
use gridkit_core::{GridError, GridHeader, GridResult};

impl Grid {
    /// Single choke point for header mutation; rebuilds the column index.
    pub(super) fn update_headers<R>(&mut self, f: impl FnOnce(&mut Vec<GridHeader>) -> R) -> R {
        let result = f(&mut self.headers);
        self.column_index.clear();
        for (i, header) in self.headers.iter().enumerate() {
            self.column_index.insert(header.column.clone(), i);
        }
        result
    }

    /// Append a header (a `&str` or `String` is taken as the header name)
    pub fn add_header(&mut self, header: impl Into<GridHeader>) -> &mut Self {
        let header = header.into();
        self.update_headers(|headers| headers.push(header));
        self
    }

    /// Insert a header at `index`, shifting later headers right
    pub fn insert_header(
        &mut self,
        index: usize,
        header: impl Into<GridHeader>,
    ) -> GridResult<&mut Self> {
        self.insert_headers(index, vec![header.into()])
    }

    /// Insert a batch of headers at `index`, keeping their relative order
    ///
    /// The first header of the batch ends up at `index`. An empty batch is a
    /// no-op.
    pub fn insert_headers(
        &mut self,
        index: usize,
        batch: Vec<GridHeader>,
    ) -> GridResult<&mut Self> {
        if batch.is_empty() {
            return Ok(self);
        }
        if index > self.headers.len() {
            return Err(GridError::HeaderOutOfBounds {
                index,
                len: self.headers.len(),
            });
        }
        self.update_headers(|headers| {
            headers.splice(index..index, batch);
        });
        Ok(self)
    }

    /// Append `count` blank, visible, non-meta headers
    pub fn add_empty_headers(&mut self, count: usize) -> &mut Self {
        self.update_headers(|headers| {
            headers.extend(std::iter::repeat_with(GridHeader::blank).take(count))
        });
        self
    }

    /// Remove and return the header at `index`
    ///
    /// Only the header list changes; rows keep their cells. Use
    /// [`Grid::remove_column`] to drop a whole column.
    pub fn remove_header_at(&mut self, index: usize) -> GridResult<GridHeader> {
        if index >= self.headers.len() {
            return Err(GridError::HeaderOutOfBounds {
                index,
                len: self.headers.len(),
            });
        }
        Ok(self.update_headers(|headers| headers.remove(index)))
    }

    /// Remove the first header equal (by name) to `header`
    ///
    /// Returns the removed header, or `None` when no header matches.
    pub fn remove_header(&mut self, header: &GridHeader) -> Option<GridHeader> {
        let index = self.headers.iter().position(|h| h == header)?;
        Some(self.update_headers(|headers| headers.remove(index)))
    }

    /// All headers in column order
    pub fn headers(&self) -> &[GridHeader] {
        &self.headers
    }

    /// Headers not flagged hidden, in column order
    pub fn visible_headers(&self) -> Vec<&GridHeader> {
        self.headers.iter().filter(|h| !h.hidden).collect()
    }

    /// Position of the first header with the given name
    ///
    /// A missing name is not an error: lookups are advisory and return `None`.
    pub fn index_of_header(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.name == name)
    }

    /// Position of the header with the given column label
    ///
    /// Answered from the column index. When several headers share a label the
    /// last one wins.
    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.column_index.get(column).copied()
    }

    /// Positions of all headers flagged meta
    pub fn meta_column_indexes(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.meta)
            .map(|(i, _)| i)
            .collect()
    }

    /// Rename the header at `index` in place
    pub(crate) fn rename_header(&mut self, index: usize, name: String) {
        self.update_headers(|headers| {
            if let Some(header) = headers.get_mut(index) {
                header.name = name;
            }
        });
    }
}

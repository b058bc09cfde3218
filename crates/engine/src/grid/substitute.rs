//! Metadata substitution and projections

use super::Grid;
use gridkit_core::{GridResult, Value};
use std::collections::{HashMap, HashSet};
use tracing::debug;

impl Grid {
    /// Replace identifiers with display names
    ///
    /// Each header whose name is a key of `map` is renamed to the mapped
    /// value. For every meta header, each cell in its column that is a key of
    /// `map` is replaced by the mapped value. Keys mapped to [`Value::Null`]
    /// are ignored.
    pub fn substitute_meta_data(&mut self, map: &HashMap<Value, Value>) -> GridResult<&mut Self> {
        if map.is_empty() || self.headers.is_empty() {
            return Ok(self);
        }
        let meta = self.meta_column_indexes();
        for &index in &meta {
            self.check_column(index)?;
        }

        let renames: Vec<(usize, String)> = self
            .headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| {
                lookup(map, &Value::String(h.name.clone())).map(|v| (i, v.to_string()))
            })
            .collect();
        for (index, name) in renames {
            self.rename_header(index, name);
        }

        for &index in &meta {
            self.substitute_cells(index, index, map);
        }
        debug!(target: "gridkit::grid", meta_columns = meta.len(), "Substituted metadata");
        Ok(self)
    }

    /// Write `map[source cell]` into the `target` column of the same row
    ///
    /// Rows whose source cell is not a key of `map` (or maps to null) keep
    /// their target cell.
    pub fn substitute_meta_data_columns(
        &mut self,
        source: usize,
        target: usize,
        map: &HashMap<Value, Value>,
    ) -> GridResult<&mut Self> {
        self.check_column(source)?;
        self.check_column(target)?;
        self.substitute_cells(source, target, map);
        Ok(self)
    }

    fn substitute_cells(&mut self, source: usize, target: usize, map: &HashMap<Value, Value>) {
        for row in &mut self.rows {
            if let Some(value) = lookup(map, &row[source]) {
                row[target] = value.clone();
            }
        }
    }

    /// Distinct values in the column headed `name`
    ///
    /// An unknown name yields an empty set.
    pub fn unique_values(&self, name: &str) -> GridResult<HashSet<Value>> {
        match self.index_of_header(name) {
            Some(index) => Ok(self.column(index)?.into_iter().collect()),
            None => Ok(HashSet::new()),
        }
    }

    /// Project rows into a map keyed by the remaining cells
    ///
    /// For each row, the cell at `value_index` becomes the value and the
    /// other cells, in column order and joined with `separator`, the key.
    /// Later rows overwrite earlier rows with the same key.
    pub fn as_map(&self, value_index: usize, separator: &str) -> GridResult<HashMap<String, Value>> {
        self.check_column(value_index)?;
        let mut map = HashMap::with_capacity(self.rows.len());
        for row in &self.rows {
            let key = row
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != value_index)
                .map(|(_, v)| v.to_string())
                .collect::<Vec<_>>()
                .join(separator);
            map.insert(key, row[value_index].clone());
        }
        Ok(map)
    }
}

fn lookup<'a>(map: &'a HashMap<Value, Value>, key: &Value) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

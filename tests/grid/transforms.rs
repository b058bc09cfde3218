//! Limits, metadata substitution and projections

use crate::common::*;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

// ============================================================================
// Limits
// ============================================================================

#[test]
fn limit_keeps_leading_rows() {
    let mut grid = grid_a();
    grid.limit(2);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.value(1, 0).unwrap(), &Value::from(21));

    grid.limit(0);
    assert_eq!(grid.height(), 2);
}

#[test]
fn limit_above_height_is_noop() {
    let mut grid = grid_a();
    grid.limit(6);
    assert_eq!(grid.height(), 4);
    grid.limit(4);
    assert_eq!(grid.height(), 4);
}

#[test]
fn limit_window() {
    let mut grid = grid_a();
    grid.limit_window(1, 3).unwrap();
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.value(0, 0).unwrap(), &Value::from(21));
    assert_eq!(grid.value(1, 0).unwrap(), &Value::from(31));
    assert_eq!(grid.current_row_index(), Some(1));
}

#[test]
fn limit_window_rejects_bad_range() {
    let mut grid = grid_a();
    let err = grid.limit_window(3, 5).unwrap_err();
    assert_eq!(err.to_string(), "Illegal start or end pos: 3, 5, 4");
    assert!(grid.limit_window(3, 2).is_err());
    assert_eq!(grid.height(), 4);
}

proptest! {
    #[test]
    fn prop_window_length(height in 0usize..20, a in 0usize..20, b in 0usize..20) {
        let (start, end) = (a.min(b), a.max(b));
        let mut grid = Grid::new();
        for i in 0..height {
            grid.add_row().add_value(i as i64).unwrap();
        }
        let result = grid.limit_window(start, end);
        if end <= height {
            prop_assert!(result.is_ok());
            prop_assert_eq!(grid.height(), end - start);
            if end > start {
                prop_assert_eq!(grid.value(0, 0).unwrap(), &Value::Int(start as i64));
            }
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(grid.height(), height);
        }
    }
}

// ============================================================================
// Metadata substitution
// ============================================================================

fn names() -> HashMap<Value, Value> {
    [
        (11, "Eleven"),
        (12, "Twelve"),
        (21, "TwentyOne"),
        (22, "TwentyTwo"),
    ]
    .into_iter()
    .map(|(k, v)| (Value::from(k), Value::from(v)))
    .collect()
}

#[test]
fn substitute_meta_columns() {
    let mut grid = grid_a();
    grid.substitute_meta_data(&names()).unwrap();
    assert_eq!(grid.row(0).unwrap(), &cells!["Eleven", "Twelve", 13][..]);
    assert_eq!(grid.row(1).unwrap(), &cells!["TwentyOne", "TwentyTwo", 23][..]);
    assert_eq!(grid.row(2).unwrap(), &cells![31, 32, 33][..]);
}

#[test]
fn substitute_between_columns() {
    let mut grid = grid_a();
    grid.substitute_meta_data_columns(0, 2, &names()).unwrap();
    assert_eq!(grid.column(2).unwrap(), cells!["Eleven", "TwentyOne", 33, 43]);
    assert_eq!(grid.column(0).unwrap(), cells![11, 21, 31, 41]);
}

#[test]
fn substitute_renames_headers() {
    let mut grid = grid_a();
    let mut map = names();
    map.insert(Value::from("ColB"), Value::from("Column B"));
    grid.substitute_meta_data(&map).unwrap();
    assert_eq!(grid.headers()[1].name, "Column B");
    assert_eq!(grid.index_of_header("Column B"), Some(1));
}

// ============================================================================
// Projections
// ============================================================================

#[test]
fn unique_values() {
    let mut grid = grid_a();
    grid.add_row().add_values([11, 12, 13]).unwrap();
    let expected: HashSet<Value> = [12, 22, 32, 42].into_iter().map(Value::from).collect();
    assert_eq!(grid.unique_values("ColB").unwrap(), expected);
    assert!(grid.unique_values("Unknown").unwrap().is_empty());
}

#[test]
fn as_map() {
    let grid = grid_a();
    let map = grid.as_map(2, "-").unwrap();
    assert_eq!(map.len(), 4);
    assert_eq!(map["11-12"], Value::from(13));
    assert_eq!(map["21-22"], Value::from(23));
    assert_eq!(map["31-32"], Value::from(33));
    assert_eq!(map["41-42"], Value::from(43));
}

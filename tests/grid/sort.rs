//! Row sorting through the public API

use crate::common::*;
use gridkit::{RowComparator, SortOrder};
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn sort_by_text_descending() {
    let mut grid = grid_of(vec![cells![1, "a"], cells![2, "b"], cells![3, "c"]]);
    grid.sort(2, 1).unwrap();
    assert_eq!(first_column(&grid), vec!["3", "2", "1"]);
}

#[test]
fn sort_by_int_ascending() {
    let mut grid = grid_of(vec![cells![3, "a"], cells![2, "b"], cells![1, "c"]]);
    grid.sort(1, -1).unwrap();
    assert_eq!(first_column(&grid), vec!["1", "2", "3"]);
}

#[test]
fn sort_by_int_descending() {
    let mut grid = grid_of(vec![cells![1, "c"], cells![3, "a"], cells![2, "b"]]);
    grid.sort(1, SortOrder::Descending).unwrap();
    assert_eq!(first_column(&grid), vec!["3", "2", "1"]);
}

#[test]
fn sort_by_float_descending() {
    let mut grid = grid_of(vec![
        cells!["a", "a", 5.2],
        cells!["b", "b", 0.0],
        cells!["c", "c", 108.1],
        cells!["d", "d", 45.0],
        cells!["e", "e", 4043.9],
        cells!["f", "f", 0.1],
    ]);
    grid.sort(3, 1).unwrap();
    assert_eq!(first_column(&grid), vec!["e", "c", "d", "a", "f", "b"]);
}

#[test]
fn null_sorts_last_descending() {
    let mut grid = grid_of(vec![
        cells!["two", 2],
        cells!["null", Value::Null],
        cells!["three", 3],
    ]);
    grid.sort(2, 1).unwrap();
    assert_eq!(first_column(&grid), vec!["three", "two", "null"]);
}

#[test]
fn null_sorts_first_ascending() {
    let mut grid = grid_of(vec![
        cells!["two", 2],
        cells!["null", Value::Null],
        cells!["one", 1],
    ]);
    grid.sort(2, -1).unwrap();
    assert_eq!(first_column(&grid), vec!["null", "one", "two"]);
}

#[test]
fn comparator_sorts_row_lists() {
    let mut rows = vec![cells!["b", "b", 50], cells!["c", "c", 400], cells!["a", "a", 6]];
    let comparator = RowComparator::new(2, SortOrder::from(-1));
    rows.sort_by(|a, b| comparator.compare(a, b));
    let firsts: Vec<_> = rows.iter().map(|r| r[0].to_string()).collect();
    assert_eq!(firsts, vec!["a", "b", "c"]);
}

#[test]
fn sort_bounds() {
    let mut grid = grid_a();
    assert!(matches!(
        grid.sort(4, 1).unwrap_err(),
        GridError::SortColumnOutOfBounds { column: 4, width: 3 }
    ));
    grid.sort(3, 1).unwrap();
    assert_eq!(grid.value(0, 2).unwrap(), &Value::from(43));
}

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::Null),
        4 => (-500i64..500).prop_map(Value::Int),
        4 => (-500.0f64..500.0).prop_map(Value::Float),
    ]
}

proptest! {
    #[test]
    fn prop_sort_permutes_and_orders(
        cells in proptest::collection::vec(cell(), 0..50),
        order in prop_oneof![Just(-1i32), Just(1i32)],
    ) {
        let mut grid = Grid::new();
        for (i, v) in cells.iter().enumerate() {
            grid.add_row().add_values(vec![Value::Int(i as i64), v.clone()]).unwrap();
        }
        grid.sort(2, order).unwrap();

        let mut seen: Vec<i64> = grid.rows().iter().filter_map(|r| r[0].as_int()).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..cells.len() as i64).collect::<Vec<_>>());

        let comparator = RowComparator::new(1, SortOrder::from(order));
        for pair in grid.rows().windows(2) {
            prop_assert!(comparator.compare(&pair[0], &pair[1]) != Ordering::Greater);
        }
    }
}

//! Column transforms: add, remove, prune, cumulative

use crate::common::*;
use gridkit::CUMULATIVE_SUFFIX;
use proptest::prelude::*;

#[test]
fn add_column_appends_and_inserts() {
    let mut grid = grid_a();
    grid.add_column(cells![14, 24, 34, 44]).unwrap();
    assert_eq!(grid.width().unwrap(), 4);
    assert_eq!(grid.row(0).unwrap(), &cells![11, 12, 13, 14][..]);

    grid.add_column_at(1, cells!["x", "y", "z", "w"]).unwrap();
    assert_eq!(grid.row(3).unwrap(), &cells![41, "w", 42, 43, 44][..]);
}

#[test]
fn add_column_wrong_length_changes_nothing() {
    let mut grid = grid_a();
    let err = grid.add_column(cells![1, 2, 3]).unwrap_err();
    assert!(matches!(
        err,
        GridError::ColumnLengthMismatch { values: 3, rows: 4 }
    ));
    assert_eq!(
        err.to_string(),
        "Number of column values (3) is not equal to number of rows (4)"
    );
    assert_eq!(grid.width().unwrap(), 3);
}

#[test]
fn populate_columns() {
    let mut grid = grid_a();
    grid.add_and_populate_columns(2, "n/a").unwrap();
    assert_eq!(grid.width().unwrap(), 5);
    assert_eq!(grid.column(4).unwrap(), cells!["n/a", "n/a", "n/a", "n/a"]);
}

#[test]
fn remove_column_drops_header_and_cells() {
    let mut grid = grid_a();
    grid.remove_column(0).unwrap();
    assert_eq!(grid.headers().len(), 2);
    assert_eq!(grid.headers()[0].name, "ColB");
    assert_eq!(grid.row(0).unwrap(), &cells![12, 13][..]);
    assert_eq!(grid.column_position("colB"), Some(0));
}

#[test]
fn remove_column_by_header() {
    let mut grid = grid_a();
    grid.remove_column_by_header(&GridHeader::new("ColB")).unwrap();
    assert_eq!(grid.row(0).unwrap(), &cells![11, 13][..]);

    grid.remove_column_by_header(&GridHeader::new("Missing")).unwrap();
    assert_eq!(grid.width().unwrap(), 2);
}

#[test]
fn remove_column_out_of_range() {
    let mut grid = grid_a();
    assert!(grid.remove_column(3).unwrap_err().is_bounds_violation());
    assert_eq!(grid.width().unwrap(), 3);
}

#[test]
fn remove_empty_columns_with_headers() {
    let mut grid = Grid::new();
    grid.add_header("A").add_header("B").add_header("C").add_header("D");
    grid.add_row().add_values(cells!["A1", Value::Null, "A3", Value::Null]).unwrap();
    grid.add_row().add_values(cells![Value::Null, Value::Null, "B3", Value::Null]).unwrap();
    grid.add_row().add_values(cells!["C1", Value::Null, "C3", Value::Null]).unwrap();

    assert!(!grid.column_is_empty(0).unwrap());
    assert!(grid.column_is_empty(1).unwrap());

    grid.remove_empty_columns().unwrap();
    assert_eq!(grid.width().unwrap(), 2);
    let names: Vec<_> = grid.headers().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn remove_empty_columns_without_headers() {
    let mut grid = grid_of(vec![
        cells!["A1", Value::Null, "A3", Value::Null],
        cells![Value::Null, Value::Null, "B3", Value::Null],
    ]);
    grid.remove_empty_columns().unwrap();
    assert_eq!(grid.width().unwrap(), 2);
    assert!(grid.headers().is_empty());
}

#[test]
fn cumulative_column() {
    let mut grid = grid_of(vec![cells![10.0], cells![50.0], cells![20.0], cells![60.0]]);
    grid.add_cumulative_column(0, true).unwrap();
    assert_eq!(grid.column(1).unwrap(), cells![10.0, 60.0, 80.0, 140.0]);
    // No header on column 0, so none was added
    assert!(grid.headers().is_empty());
}

#[test]
fn cumulative_columns_with_headers() {
    let mut grid = grid_a();
    grid.add_cumulative_columns(0, 2).unwrap();
    assert_eq!(grid.width().unwrap(), 5);
    let last = &grid.headers()[4];
    assert_eq!(last.name, format!("ColB{}", CUMULATIVE_SUFFIX));
    assert_eq!(last.column, "colB_cumulative");
    assert_eq!(grid.column(3).unwrap(), cells![11.0, 32.0, 63.0, 104.0]);
}

#[test]
fn cumulative_column_rejects_text() {
    let mut grid = grid_of(vec![cells![1], cells!["abc"]]);
    let err = grid.add_cumulative_column(0, false).unwrap_err();
    assert!(matches!(err, GridError::NotNumeric { row: 1, column: 0, .. }));
    assert_eq!(grid.width().unwrap(), 1);
}

#[test]
fn cumulative_columns_mixed_batch_is_atomic() {
    let mut grid = grid_a();
    grid.add_row().add_values(cells![51, "n/a", 53]).unwrap();
    let err = grid.add_cumulative_columns(0, 3).unwrap_err();
    assert!(matches!(err, GridError::NotNumeric { row: 4, column: 1, .. }));
    assert_eq!(grid.width().unwrap(), 3);
    assert_eq!(grid.headers().len(), 3);
}

#[test]
fn cumulative_columns_range_overflow() {
    let mut grid = grid_a();
    assert!(grid
        .add_cumulative_columns(5, usize::MAX)
        .unwrap_err()
        .is_bounds_violation());
    assert_eq!(grid.width().unwrap(), 3);
}

proptest! {
    #[test]
    fn prop_cumulative_last_equals_sum(values in proptest::collection::vec(-1000i64..1000, 1..30)) {
        let mut grid = Grid::new();
        for v in &values {
            grid.add_row().add_value(*v).unwrap();
        }
        grid.add_cumulative_column(0, false).unwrap();

        let total: i64 = values.iter().sum();
        let last = grid.value(values.len() - 1, 1).unwrap().as_float().unwrap();
        prop_assert_eq!(last, total as f64);
    }
}

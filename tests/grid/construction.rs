//! Building grids: headers, write cursor, shape and accessors

use crate::common::*;

// ============================================================================
// Headers
// ============================================================================

#[test]
fn add_headers_and_insert_batch() {
    let mut grid = Grid::new();
    grid.add_header(GridHeader::with_column("DataElementA", "Data element A"))
        .add_header(GridHeader::with_column("DataElementB", "Data element B"));

    let batch = vec![
        GridHeader::with_column("DataElementC", "Data element C"),
        GridHeader::with_column("DataElementD", "Data element D"),
    ];
    grid.insert_headers(1, batch).unwrap();

    let names: Vec<_> = grid.headers().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DataElementA", "DataElementC", "DataElementD", "DataElementB"]
    );
    assert_eq!(grid.column_position("Data element B"), Some(3));
}

#[test]
fn header_lookup_is_advisory() {
    let grid = grid_a();
    assert_eq!(grid.index_of_header("ColB"), Some(1));
    assert_eq!(grid.index_of_header("Nope"), None);
    assert_eq!(grid.meta_column_indexes(), vec![0, 1]);
}

#[test]
fn visible_projection_skips_hidden_column() {
    let grid = grid_a();
    assert_eq!(grid.visible_headers().len(), 2);
    let visible = grid.visible_rows().unwrap();
    assert_eq!(visible.len(), 4);
    assert_eq!(visible[0], cells![11, 12]);
    assert_eq!(grid.visible_width().unwrap(), 2);
}

#[test]
fn visible_rows_need_enough_headers() {
    let mut grid = grid_a();
    grid.remove_header_at(2).unwrap();
    let err = grid.visible_rows().unwrap_err();
    assert!(matches!(
        err,
        GridError::HeaderWidthMismatch {
            headers: 2,
            width: 3
        }
    ));
}

// ============================================================================
// Write cursor
// ============================================================================

#[test]
fn value_before_row_fails() {
    let mut grid = Grid::new();
    assert!(matches!(grid.add_value(1).unwrap_err(), GridError::NoOpenRow));
    assert_eq!(grid.height(), 0);
}

#[test]
fn add_values_as_list() {
    let grid = grid_of(vec![
        cells!["colA1", "colB1", "colC1"],
        cells!["colA2", "colB2", "colC2"],
    ]);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.width().unwrap(), 3);
    assert_eq!(grid.value(0, 1).unwrap(), &Value::from("colB1"));
    assert_eq!(grid.value(1, 2).unwrap(), &Value::from("colC2"));
}

#[test]
fn remove_current_row_moves_cursor_back() {
    let mut grid = grid_a();
    assert_eq!(grid.current_row_index(), Some(3));

    let removed = grid.remove_current_row().unwrap();
    assert_eq!(removed, cells![41, 42, 43]);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.current_row_index(), Some(2));

    // Appends now land on the previous row
    grid.add_value(99).unwrap();
    assert_eq!(grid.row(2).unwrap().len(), 4);
    assert!(grid.width().unwrap_err().is_shape_violation());
}

#[test]
fn add_rows_copies_other_grid() {
    let mut grid = grid_a();
    let other = grid_of(vec![cells![51, 52, 53], cells![61, 62, 63]]);
    grid.add_rows(&other);
    assert_eq!(grid.height(), 6);
    assert_eq!(grid.current_row_index(), Some(5));
    assert_eq!(other.height(), 2);
}

#[test]
fn filler_values() {
    let mut grid = Grid::new();
    grid.add_row()
        .add_empty_values(2)
        .unwrap()
        .add_null_values(1)
        .unwrap();
    assert_eq!(grid.row(0).unwrap(), &[Value::from(""), Value::from(""), Value::Null]);
}

// ============================================================================
// Shape and access
// ============================================================================

#[test]
fn ragged_rows_are_reported_at_first_offender() {
    let grid = grid_of(vec![cells![1, 2], cells![3, 4], cells![5]]);
    assert!(matches!(
        grid.verify_shape().unwrap_err(),
        GridError::RaggedRows {
            previous: 2,
            actual: 1,
            row: 2
        }
    ));
    // Row access does not need a rectangular grid
    assert_eq!(grid.row(2).unwrap(), &[Value::from(5)]);
}

#[test]
fn out_of_range_access() {
    let grid = grid_a();
    assert!(matches!(
        grid.row(4).unwrap_err(),
        GridError::RowOutOfBounds { row: 4, height: 4 }
    ));
    assert!(grid.value(0, 3).unwrap_err().is_bounds_violation());
    assert!(grid.column(3).unwrap_err().is_bounds_violation());
}

#[test]
fn column_copy() {
    let grid = grid_a();
    assert_eq!(grid.column(1).unwrap(), cells![12, 22, 32, 42]);
}

#[test]
fn descriptive_fields_and_meta_data() {
    let mut grid = Grid::new();
    grid.set_title("Title").set_subtitle("Sub").set_table("t1");
    grid.add_meta_data("k", 1);
    assert_eq!(grid.title(), Some("Title"));
    assert!(grid.has_meta_data_key("k"));
    assert_eq!(grid.meta_data()["k"], serde_json::json!(1));
}

//! Build grids from SQLite result sets
//!
//! One header per result column and one row per result row. Header types
//! come from the declared column type; expression columns without one are
//! TEXT.

use gridkit_core::{GridError, GridHeader, GridResult, Value, ValueType};
use gridkit_engine::Grid;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params, Statement};
use tracing::debug;

fn source_error(e: rusqlite::Error) -> GridError {
    GridError::Source(e.to_string())
}

/// Map a declared SQL column type to a [`ValueType`]
///
/// Only the type name is considered; a length or precision suffix such as
/// `VARCHAR(32)` is ignored. Unknown names map to TEXT.
pub fn value_type_for_decl(decl: &str) -> ValueType {
    let name = decl.split('(').next().unwrap_or_default().trim().to_ascii_uppercase();
    match name.as_str() {
        "TINYINT" | "SMALLINT" | "INT2" => ValueType::SmallInt,
        "INT" | "INTEGER" | "MEDIUMINT" | "INT4" => ValueType::Integer,
        "BIGINT" | "INT8" => ValueType::BigInt,
        "REAL" | "FLOAT4" => ValueType::Real,
        "FLOAT" | "DOUBLE" | "DOUBLE PRECISION" | "DECIMAL" | "FLOAT8" => ValueType::Double,
        "NUMERIC" => ValueType::Numeric,
        "BIT" | "BOOL" | "BOOLEAN" | "BINARY" | "VARBINARY" | "BLOB" => ValueType::Boolean,
        "CHAR" | "CHARACTER" | "NCHAR" => ValueType::Char,
        "DATE" => ValueType::Date,
        "TIME" | "TIMESTAMP" | "DATETIME" => ValueType::Timestamp,
        "TIMESTAMPTZ" | "TIMETZ" | "TIMESTAMP WITH TIME ZONE" | "TIME WITH TIME ZONE" => {
            ValueType::TimestampTz
        }
        _ => ValueType::Text,
    }
}

fn cell(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Run a prepared statement and collect its result set into a grid
pub fn from_statement<P: Params>(stmt: &mut Statement<'_>, params: P) -> GridResult<Grid> {
    let mut grid = Grid::new();
    let headers: Vec<GridHeader> = stmt
        .columns()
        .iter()
        .map(|c| GridHeader {
            name: c.name().to_string(),
            column: c.name().to_string(),
            value_type: c.decl_type().map_or(ValueType::Text, value_type_for_decl),
            hidden: false,
            meta: false,
        })
        .collect();
    let width = headers.len();
    for header in headers {
        grid.add_header(header);
    }

    let mut rows = stmt.query(params).map_err(source_error)?;
    while let Some(row) = rows.next().map_err(source_error)? {
        grid.add_row();
        for i in 0..width {
            grid.add_value(cell(row.get_ref(i).map_err(source_error)?))?;
        }
    }

    debug!(target: "gridkit::io", rows = grid.height(), columns = width, "Loaded SQL result set");
    Ok(grid)
}

/// Prepare and run `sql` without parameters
pub fn from_query(conn: &Connection, sql: &str) -> GridResult<Grid> {
    let mut stmt = conn.prepare(sql).map_err(source_error)?;
    from_statement(&mut stmt, [])
}

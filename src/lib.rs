//! gridkit - In-memory tabular grid with typed headers
//!
//! A [`Grid`] is a mutable, rectangular table of loosely typed [`Value`]s
//! described by an ordered list of [`GridHeader`]s. Producers fill it row
//! by row; consumers query, transform and render it.
//!
//! # Quick Start
//!
//! ```
//! use gridkit::{cells, Grid, WriterConfig};
//!
//! # fn main() -> gridkit::GridResult<()> {
//! let mut grid = Grid::new();
//! grid.add_header("District").add_header("Cases");
//! grid.add_row().add_values(cells!["North", 12])?;
//! grid.add_row().add_values(cells!["South", 30])?;
//!
//! grid.sort(2, 1)?.add_cumulative_column(1, true)?;
//!
//! let csv = gridkit::render_csv(&grid, &WriterConfig::default())?;
//! assert!(csv.starts_with("District,Cases,Cases_cumulative"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `gridkit-core`: values, headers, value types and errors
//! - `gridkit-engine`: the grid and its transforms
//! - `gridkit-io`: renderers, writer configuration and the SQLite source

pub use gridkit_core::{cells, GridError, GridHeader, GridResult, Value, ValueType};
pub use gridkit_engine::{Grid, MetaData, RowComparator, SortOrder, CUMULATIVE_SUFFIX};
pub use gridkit_io::{
    render_csv, render_html, render_json, to_json, write_json, CsvOptions, CsvWriter,
    HtmlOptions, HtmlWriter, WriterConfig, CONFIG_FILE_NAME,
};

#[cfg(feature = "sqlite")]
pub use gridkit_io::sqlite;

//! Renderers and sources for gridkit grids
//!
//! Everything here works against the public surface of
//! [`gridkit_engine::Grid`]:
//! - `csv_writer`: CSV with configurable delimiter and quoting
//! - `html`: standalone HTML document of the visible projection
//! - `json`: structural dump of headers, metadata and rows
//! - `config`: `gridkit.toml` renderer defaults
//! - `sqlite` (feature `sqlite`): grid from a SQLite result set

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod csv_writer;
pub mod html;
pub mod json;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use config::{WriterConfig, CONFIG_FILE_NAME};
pub use csv_writer::{CsvOptions, CsvWriter};
pub use html::{HtmlOptions, HtmlWriter};
pub use json::{to_json, write_json};

use gridkit_core::GridResult;
use gridkit_engine::Grid;

/// Render `grid` as CSV using the `[csv]` settings of `config`
pub fn render_csv(grid: &Grid, config: &WriterConfig) -> GridResult<String> {
    CsvWriter::new(config.csv_options()?).to_string(grid)
}

/// Render `grid` as HTML using the `[html]` settings of `config`
pub fn render_html(grid: &Grid, config: &WriterConfig) -> GridResult<String> {
    HtmlWriter::new(config.html_options()).to_string(grid)
}

/// Render `grid` as pretty-printed JSON
///
/// `config` is accepted for symmetry; the JSON dump has no settings.
pub fn render_json(grid: &Grid, _config: &WriterConfig) -> GridResult<String> {
    Ok(serde_json::to_string_pretty(&to_json(grid)?)?)
}

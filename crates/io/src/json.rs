//! Structural JSON dump of a grid

use gridkit_core::{GridHeader, GridResult, Value};
use gridkit_engine::{Grid, MetaData};
use serde::Serialize;
use std::io;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridDocument<'a> {
    title: Option<&'a str>,
    subtitle: Option<&'a str>,
    table: Option<&'a str>,
    headers: &'a [GridHeader],
    meta_data: &'a MetaData,
    height: usize,
    width: usize,
    rows: &'a [Vec<Value>],
}

impl<'a> GridDocument<'a> {
    fn new(grid: &'a Grid) -> GridResult<Self> {
        Ok(GridDocument {
            title: grid.title(),
            subtitle: grid.subtitle(),
            table: grid.table(),
            headers: grid.headers(),
            meta_data: grid.meta_data(),
            height: grid.height(),
            width: grid.width()?,
            rows: grid.rows(),
        })
    }
}

/// Grid as a JSON object
///
/// Fails on ragged rows, since the width is part of the document.
pub fn to_json(grid: &Grid) -> GridResult<serde_json::Value> {
    Ok(serde_json::to_value(GridDocument::new(grid)?)?)
}

/// Write the JSON document for `grid` into `out`
pub fn write_json<W: io::Write>(grid: &Grid, mut out: W, pretty: bool) -> GridResult<()> {
    let document = GridDocument::new(grid)?;
    if pretty {
        serde_json::to_writer_pretty(&mut out, &document)?;
    } else {
        serde_json::to_writer(&mut out, &document)?;
    }
    out.flush()?;
    debug!(target: "gridkit::io", rows = document.height, "Wrote JSON");
    Ok(())
}

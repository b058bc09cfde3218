//! HTML rendering
//!
//! Produces a standalone document with a small embedded stylesheet. Only
//! visible headers and visible rows are rendered.

use gridkit_core::GridResult;
use gridkit_engine::Grid;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io;
use tracing::debug;

const STYLE: &str = r#"<style type="text/css">
.gridDiv {
  font-family: sans-serif, arial;
}
table.gridTable {
  border-collapse: collapse;
  font-size: 11pt;
}
.gridTable th, .gridTable td {
  padding: 8px 4px 7px 4px;
  border: 1px solid #e7e7e7;
}
.gridTable th {
  background-color: #f3f3f3;
  font-weight: bold;
}
</style>"#;

/// Options for [`HtmlWriter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Prepend a `#` column numbering rows from 1
    pub row_numbers: bool,
}

/// Writes a grid as an HTML document
#[derive(Debug, Clone, Default)]
pub struct HtmlWriter {
    options: HtmlOptions,
}

impl HtmlWriter {
    /// Create a writer with the given options
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Render `grid` into `out`
    pub fn write<W: io::Write>(&self, grid: &Grid, mut out: W) -> GridResult<()> {
        let document = self.to_string(grid)?;
        out.write_all(document.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Render `grid` into a string
    pub fn to_string(&self, grid: &Grid) -> GridResult<String> {
        let rows = grid.visible_rows()?;
        let title = escape(grid.title().unwrap_or_default());
        let subtitle = escape(grid.subtitle().unwrap_or_default());

        let mut html = String::with_capacity(1024 + rows.len() * 64);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", title);
        html.push_str(STYLE);
        html.push_str("\n</head>\n<body>\n");

        html.push_str("<div class=\"gridDiv\">\n");
        let _ = writeln!(html, "<h2>{}</h2>", title);
        let _ = writeln!(html, "<h3>{}</h3>", subtitle);
        html.push_str("<table class=\"gridTable\">\n<thead>\n<tr>\n");
        if self.options.row_numbers {
            html.push_str("<th>#</th>");
        }
        for header in grid.visible_headers() {
            let _ = write!(html, "<th>{}</th>", escape(&header.column));
        }
        html.push_str("\n</tr>\n</thead>\n<tbody>\n");

        for (i, row) in rows.iter().enumerate() {
            html.push_str("<tr>");
            if self.options.row_numbers {
                let _ = write!(html, "<td>{}</td>", i + 1);
            }
            for value in row {
                let _ = write!(html, "<td>{}</td>", escape(&value.to_string()));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n</div>\n</body>\n</html>\n");

        debug!(target: "gridkit::io", rows = rows.len(), "Rendered HTML");
        Ok(html)
    }
}

/// Trim, then escape the five HTML-significant characters
pub fn escape(input: &str) -> String {
    let input = input.trim();
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

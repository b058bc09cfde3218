//! Writer configuration via `gridkit.toml`
//!
//! Holds the rendering defaults used by the `render_*` helpers. Every field
//! is optional in the file; missing sections take their defaults.

use crate::csv_writer::CsvOptions;
use crate::html::HtmlOptions;
use gridkit_core::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by callers that keep one next to their data.
pub const CONFIG_FILE_NAME: &str = "gridkit.toml";

/// `[csv]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvSection {
    /// Field delimiter, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Quote every field
    #[serde(default)]
    pub force_quote: bool,
}

fn default_delimiter() -> String {
    ",".to_string()
}

impl Default for CsvSection {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            force_quote: false,
        }
    }
}

/// `[html]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlSection {
    /// Prepend a row-number column
    #[serde(default)]
    pub row_numbers: bool,
}

/// Renderer configuration loaded from `gridkit.toml`.
///
/// # Example
///
/// ```toml
/// [csv]
/// delimiter = ";"
/// force_quote = true
///
/// [html]
/// row_numbers = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// CSV writer settings
    #[serde(default)]
    pub csv: CsvSection,
    /// HTML writer settings
    #[serde(default)]
    pub html: HtmlSection,
}

impl WriterConfig {
    /// Resolve the `[csv]` section into writer options.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless the delimiter is exactly one ASCII
    /// character.
    pub fn csv_options(&self) -> GridResult<CsvOptions> {
        let delimiter = match self.csv.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => *byte,
            _ => {
                return Err(GridError::InvalidConfig(format!(
                    "Invalid CSV delimiter '{}'. Expected a single ASCII character.",
                    self.csv.delimiter
                )))
            }
        };
        Ok(CsvOptions {
            delimiter,
            force_quote: self.csv.force_quote,
        })
    }

    /// Resolve the `[html]` section into writer options.
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            row_numbers: self.html.row_numbers,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r##"# gridkit renderer configuration

[csv]
# Field delimiter, a single ASCII character (default: ",")
delimiter = ","
# Quote every field instead of only those that need it (default: false)
force_quote = false

[html]
# Prepend a "#" column numbering rows from 1 (default: false)
row_numbers = false
"##
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> GridResult<Self> {
        let config: WriterConfig = toml::from_str(content)
            .map_err(|e| GridError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        // Validate the delimiter eagerly
        config.csv_options()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> GridResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            GridError::InvalidConfig(msg) => {
                GridError::InvalidConfig(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> GridResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> GridResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GridError::Serialization(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

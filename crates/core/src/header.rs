//! Column headers
//!
//! A [`GridHeader`] describes one grid column: its display name, a stable
//! machine-readable column label, the declared [`ValueType`] and two flags.
//!
//! ## Identity
//!
//! Two headers are equal when their `name`s are equal, whatever the other
//! fields hold. Header lookup and removal by value rely on this.

use crate::value_type::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Descriptor of a grid column
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridHeader {
    /// Display name
    pub name: String,
    /// Stable column label, defaults to `name`
    pub column: String,
    /// Declared value type
    pub value_type: ValueType,
    /// Excluded from visible projections
    pub hidden: bool,
    /// Values are keys into an external metadata map
    pub meta: bool,
}

impl GridHeader {
    /// Header with the given name used as column label, TEXT type, visible, not meta
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        GridHeader {
            column: name.clone(),
            name,
            value_type: ValueType::Text,
            hidden: false,
            meta: false,
        }
    }

    /// Header with a distinct column label
    pub fn with_column(name: impl Into<String>, column: impl Into<String>) -> Self {
        GridHeader {
            column: column.into(),
            ..GridHeader::new(name)
        }
    }

    /// Header with visibility and meta flags
    pub fn with_flags(name: impl Into<String>, hidden: bool, meta: bool) -> Self {
        GridHeader {
            hidden,
            meta,
            ..GridHeader::new(name)
        }
    }

    /// Header with every field given
    pub fn full(
        name: impl Into<String>,
        column: impl Into<String>,
        value_type: ValueType,
        hidden: bool,
        meta: bool,
    ) -> Self {
        GridHeader {
            name: name.into(),
            column: column.into(),
            value_type,
            hidden,
            meta,
        }
    }

    /// A blank, visible, non-meta header
    pub fn blank() -> Self {
        GridHeader::with_flags("", false, false)
    }

    /// Copy of this header with `suffix` appended to both name and column
    pub fn suffixed(&self, suffix: &str) -> Self {
        GridHeader {
            name: format!("{}{}", self.name, suffix),
            column: format!("{}{}", self.column, suffix),
            ..self.clone()
        }
    }
}

impl PartialEq for GridHeader {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for GridHeader {}

impl Hash for GridHeader {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl From<&str> for GridHeader {
    fn from(name: &str) -> Self {
        GridHeader::new(name)
    }
}

impl From<String> for GridHeader {
    fn from(name: String) -> Self {
        GridHeader::new(name)
    }
}

impl fmt::Display for GridHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Name: {}, column: {}, value type: {}]",
            self.name, self.column, self.value_type
        )
    }
}

//! Declared column value types
//!
//! A [`ValueType`] describes what a column is expected to hold. It is
//! descriptive metadata only: cells are never checked against it.
//!
//! | Variant | SQL name | Meaning |
//! |---------|----------|---------|
//! | SmallInt | SMALLINT | 2 byte integer |
//! | Integer | INTEGER | 4 byte integer |
//! | BigInt | BIGINT | 8 byte integer |
//! | Numeric | NUMERIC | Numeric / decimal |
//! | Real | REAL | 4 byte floating point |
//! | Double | DOUBLE | 8 byte floating point |
//! | Boolean | BOOLEAN | Boolean |
//! | Char | CHAR | Character |
//! | Text | TEXT | Text |
//! | Date | DATE | Date |
//! | Timestamp | TIMESTAMP | Timestamp |
//! | TimestampTz | TIMESTAMPTZ | Timestamp with timezone |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value type of a grid column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    /// 2 byte small integer
    SmallInt,
    /// 4 byte integer
    Integer,
    /// 8 byte big integer
    BigInt,
    /// Numeric / decimal value
    Numeric,
    /// 4 byte floating point value
    Real,
    /// 8 byte floating point value
    Double,
    /// Boolean value
    Boolean,
    /// Character value
    Char,
    /// Text value
    #[default]
    Text,
    /// Date
    Date,
    /// Timestamp
    Timestamp,
    /// Timestamp with timezone
    TimestampTz,
}

impl ValueType {
    /// All value types (for iteration)
    pub const ALL: [ValueType; 12] = [
        ValueType::SmallInt,
        ValueType::Integer,
        ValueType::BigInt,
        ValueType::Numeric,
        ValueType::Real,
        ValueType::Double,
        ValueType::Boolean,
        ValueType::Char,
        ValueType::Text,
        ValueType::Date,
        ValueType::Timestamp,
        ValueType::TimestampTz,
    ];

    /// SQL style name, as used in serialized headers
    pub const fn name(&self) -> &'static str {
        match self {
            ValueType::SmallInt => "SMALLINT",
            ValueType::Integer => "INTEGER",
            ValueType::BigInt => "BIGINT",
            ValueType::Numeric => "NUMERIC",
            ValueType::Real => "REAL",
            ValueType::Double => "DOUBLE",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Char => "CHAR",
            ValueType::Text => "TEXT",
            ValueType::Date => "DATE",
            ValueType::Timestamp => "TIMESTAMP",
            ValueType::TimestampTz => "TIMESTAMPTZ",
        }
    }

    /// Parse from the SQL style name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Whether cells of this type are numbers
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueType::SmallInt
                | ValueType::Integer
                | ValueType::BigInt
                | ValueType::Numeric
                | ValueType::Real
                | ValueType::Double
        )
    }

    /// Whether cells of this type are dates or timestamps
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            ValueType::Date | ValueType::Timestamp | ValueType::TimestampTz
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

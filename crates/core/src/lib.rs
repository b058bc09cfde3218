//! Core types for gridkit
//!
//! This crate defines the foundational types used by the grid and its
//! renderers:
//! - Value: closed enum of cell values, with `Null` as the only missing sentinel
//! - ValueType: declared (descriptive) column type
//! - GridHeader: column descriptor with name-only identity
//! - GridError: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod header;
pub mod value;
pub mod value_type;

pub use error::{GridError, GridResult};
pub use header::GridHeader;
pub use value::Value;
pub use value_type::ValueType;

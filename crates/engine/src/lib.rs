//! Grid engine for gridkit
//!
//! This crate owns the mutable table:
//! - Header registry with a derived column-label index
//! - Write cursor for row-by-row population
//! - Shape checks (rectangular rows)
//! - Transforms: sort, cumulative columns, metadata substitution,
//!   empty-column pruning, limits and windows
//!
//! Renderers and producers live in `gridkit-io` and only use the public
//! surface of [`Grid`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod grid;

pub use grid::{Grid, MetaData, RowComparator, SortOrder, CUMULATIVE_SUFFIX};

// Re-export the value model so callers need only one import path
pub use gridkit_core::{cells, GridError, GridHeader, GridResult, Value, ValueType};

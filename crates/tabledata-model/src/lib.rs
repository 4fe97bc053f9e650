//! Immutable table value object for data interchange.
//!
//! [`TableData`] pairs a table name, an ordered header list, and row data.
//! Rows may be positional or keyed by header name; a typed value matrix is
//! computed lazily (and exactly once) through a
//! [`ValueCoercer`](tabledata_cell::ValueCoercer). Tables are never mutated:
//! filtering and normalization produce new instances.
//!
//! # Example
//!
//! ```
//! use tabledata_model::{ColumnFilter, Row, TableData};
//!
//! let table = TableData::new(
//!     "sample",
//!     ["a", "b"],
//!     vec![Row::values([1, 2]), Row::values([3, 4])],
//! );
//!
//! let filtered = table.filter_column(&ColumnFilter::new(["a"]))?;
//! assert_eq!(filtered.headers(), ["a"]);
//! # Ok::<(), tabledata_model::TableDataError>(())
//! ```
//!
//! The lazy matrix cache uses `std::cell` interior mutability, so a
//! [`TableData`] shared across threads needs external synchronization.

mod error;
mod filter;
mod row;
mod table;

pub use error::{Result, TableDataError};
pub use filter::{ColumnFilter, PatternCombine};
pub use row::{Row, RowCount};
pub use table::TableData;

//! Cell value types and type coercion for tabular data.
//!
//! This crate provides the two value representations used throughout the
//! tabledata workspace: [`Value`], a raw cell value exactly as supplied by a
//! caller, and [`CellValue`], the typed form produced by running a raw value
//! through a [`ValueCoercer`]. The shipped [`DefaultCoercer`] detects
//! booleans, integers, floats, and timestamps inside text cells and treats
//! recognized empty forms as null.
//!
//! Coercion is deterministic and total: it never fails and never performs
//! I/O.

mod coerce;
mod value;

pub use coerce::{DefaultCoercer, ValueCoercer};
pub use value::{CellValue, Value};

//! Table and header name normalization.
//!
//! A [`TableDataNormalizer`] checks a table's name and headers against a
//! [`NamingPolicy`] and, in [`normalize`](TableDataNormalizer::normalize),
//! replaces invalid names with sanitized ones, always re-validating the
//! repaired result. Policies are injected values, not subclasses: a new
//! naming convention is a new [`NamingPolicy`] implementation.
//!
//! Two policies ship with the crate: [`DefaultPolicy`] (any non-empty name
//! is acceptable) and [`IdentifierPolicy`] (uppercase identifier rules with
//! spreadsheet-letter repair for unnamed columns).

pub mod name;
mod normalizer;
mod policy;

pub use name::NameError;
pub use normalizer::{NormalizeError, Result, TableDataNormalizer};
pub use policy::{DefaultPolicy, IdentifierPolicy, NamingPolicy};

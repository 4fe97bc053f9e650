//! Row polymorphism and the row count tri-state.

use std::collections::BTreeMap;

use serde::Serialize;
use tabledata_cell::Value;

/// A single table record.
///
/// Positional rows align to the header list left to right; keyed rows are
/// looked up by header name. For keyed rows only keys present in the header
/// list are read: missing keys yield null, extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Values(Vec<Value>),
    Keyed(BTreeMap<String, Value>),
}

impl Row {
    /// Build a positional row.
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Row::Values(values.into_iter().map(Into::into).collect())
    }

    /// Build a keyed row from header/value pairs.
    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Row::Keyed(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Effective column count: the length of a positional row, or `None`
    /// for keyed rows, which are exempt from width checks.
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        match self {
            Row::Values(values) => Some(values.len()),
            Row::Keyed(_) => None,
        }
    }

    /// Raw value for the given column, aligned to the header list.
    pub(crate) fn cell(&self, index: usize, header: &str) -> Value {
        match self {
            Row::Values(values) => values.get(index).cloned().unwrap_or(Value::Null),
            Row::Keyed(entries) => entries.get(header).cloned().unwrap_or(Value::Null),
        }
    }
}

/// Row count of a table.
///
/// `Known` only when the row container's length can be determined without
/// consuming a one-shot source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCount {
    Known(usize),
    Unknown,
}

impl RowCount {
    /// The count, if known.
    #[must_use]
    pub fn known(self) -> Option<usize> {
        match self {
            RowCount::Known(count) => Some(count),
            RowCount::Unknown => None,
        }
    }

    /// Whether the count is known.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self, RowCount::Known(_))
    }
}

//! Column selection by name patterns.

use regex::Regex;
use tabledata_cell::Value;
use tracing::debug;

use crate::error::Result;
use crate::row::Row;
use crate::table::TableData;

/// How multiple regex patterns combine.
///
/// Exact-string mode always behaves as `Or` ("is one of"), regardless of
/// this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternCombine {
    /// A header matches if at least one pattern matches.
    #[default]
    Or,
    /// A header matches only if every pattern matches.
    And,
}

/// A column-selection specification.
///
/// An empty pattern list selects nothing to change: filtering with it
/// returns an equivalent copy of the input table.
#[derive(Debug, Clone, Default)]
pub struct ColumnFilter {
    /// Patterns to match headers against.
    pub patterns: Vec<String>,
    /// Complement the match set.
    pub invert: bool,
    /// Treat patterns as regular expressions (unanchored search) instead of
    /// exact strings.
    pub use_regex: bool,
    /// Combination rule for multiple regex patterns.
    pub combine: PatternCombine,
}

impl ColumnFilter {
    /// Create a filter matching headers equal to any of the patterns.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Select the complement of the matching columns.
    #[must_use]
    pub fn invert(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Treat patterns as regular expressions.
    #[must_use]
    pub fn regex(mut self) -> Self {
        self.use_regex = true;
        self
    }

    /// Require every pattern to match (regex mode only).
    #[must_use]
    pub fn match_all(mut self) -> Self {
        self.combine = PatternCombine::And;
        self
    }

    fn compile(&self) -> Result<Vec<Matcher>> {
        self.patterns
            .iter()
            .map(|pattern| {
                if self.use_regex {
                    Ok(Matcher::Pattern(Regex::new(pattern)?))
                } else {
                    Ok(Matcher::Exact(pattern.clone()))
                }
            })
            .collect()
    }

    /// Per-pattern match results with invert applied, combined per mode.
    fn selects(&self, matchers: &[Matcher], header: &str) -> bool {
        let mut results = matchers
            .iter()
            .map(|matcher| matcher.is_match(header) != self.invert);
        match (self.use_regex, self.combine) {
            (true, PatternCombine::And) => results.all(|matched| matched),
            _ => results.any(|matched| matched),
        }
    }
}

enum Matcher {
    Exact(String),
    Pattern(Regex),
}

impl Matcher {
    fn is_match(&self, header: &str) -> bool {
        match self {
            Matcher::Exact(pattern) => header == pattern,
            Matcher::Pattern(pattern) => pattern.is_match(header),
        }
    }
}

impl TableData {
    /// Produce a new table containing only the columns selected by
    /// `filter`, headers in their original order.
    ///
    /// Output rows are positional and aligned to the filtered header order,
    /// whatever representation the input rows used. A filter that matches
    /// no column yields a table with empty headers and empty rows; an empty
    /// pattern list yields an equivalent copy of the input. One-shot row
    /// sources are drained.
    pub fn filter_column(&self, filter: &ColumnFilter) -> Result<TableData> {
        debug!(
            table = self.table_name(),
            patterns = ?filter.patterns,
            invert = filter.invert,
            use_regex = filter.use_regex,
            combine = ?filter.combine,
            "filter_column"
        );

        if filter.patterns.is_empty() {
            let rows = self.rows().to_vec();
            return Ok(
                TableData::new(self.table_name(), self.headers().to_vec(), rows)
                    .with_coercer(self.coercer()),
            );
        }

        let matchers = filter.compile()?;
        let selected: Vec<(usize, &String)> = self
            .headers()
            .iter()
            .enumerate()
            .filter(|&(_, header)| filter.selects(&matchers, header.as_str()))
            .collect();

        debug!(
            table = self.table_name(),
            matched = ?selected.iter().map(|(_, header)| header.as_str()).collect::<Vec<_>>(),
            "filter_column matched headers"
        );

        let headers: Vec<String> = selected
            .iter()
            .map(|(_, header)| (*header).clone())
            .collect();
        let rows: Vec<Row> = if selected.is_empty() {
            Vec::new()
        } else {
            self.rows()
                .iter()
                .map(|row| {
                    Row::Values(
                        selected
                            .iter()
                            .map(|(index, header)| row.cell(*index, header))
                            .collect::<Vec<Value>>(),
                    )
                })
                .collect()
        };

        Ok(TableData::new(self.table_name(), headers, rows).with_coercer(self.coercer()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_mode_ignores_and_combination() {
        let table = TableData::new(
            "t",
            ["a", "b"],
            vec![Row::values([1, 2])],
        );
        let filter = ColumnFilter::new(["a", "b"]).match_all();
        let filtered = table.filter_column(&filter).expect("filter");
        assert_eq!(filtered.headers(), ["a", "b"]);
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let table = TableData::new("t", ["a"], vec![Row::values([1])]);
        let filter = ColumnFilter::new(["["]).regex();
        assert!(table.filter_column(&filter).is_err());
    }

    #[test]
    fn duplicate_headers_are_matched_by_position() {
        let table = TableData::new(
            "t",
            ["a", "a", "b"],
            vec![Row::values([1, 2, 3])],
        );
        let filtered = table
            .filter_column(&ColumnFilter::new(["a"]))
            .expect("filter");
        assert_eq!(filtered.headers(), ["a", "a"]);
        assert_eq!(filtered.rows()[0], Row::values([1, 2]));
    }
}

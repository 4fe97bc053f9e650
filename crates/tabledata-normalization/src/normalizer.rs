//! The validate / normalize pipeline.

use tabledata_model::TableData;
use thiserror::Error;
use tracing::debug;

use crate::name::NameError;
use crate::policy::NamingPolicy;

/// Errors produced by name validation and normalization.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The table name is invalid and could not be repaired.
    #[error("invalid table name: {0}")]
    InvalidTableName(#[source] NameError),

    /// A header name is invalid and could not be repaired.
    #[error("invalid header name at column {index}: {source}")]
    InvalidHeaderName {
        index: usize,
        #[source]
        source: NameError,
    },
}

impl NormalizeError {
    /// Create an InvalidHeaderName error.
    #[must_use]
    pub fn invalid_header(index: usize, source: NameError) -> Self {
        Self::InvalidHeaderName { index, source }
    }
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Validates and repairs a table's name and headers against an injected
/// [`NamingPolicy`].
///
/// [`validate`](Self::validate) is fail-fast and never repairs;
/// [`normalize`](Self::normalize) repairs what it can and fails only when a
/// sanitized name still does not validate. Both leave the input table
/// untouched.
pub struct TableDataNormalizer<'a, P: NamingPolicy> {
    table: &'a TableData,
    policy: P,
}

impl<'a, P: NamingPolicy> TableDataNormalizer<'a, P> {
    /// Pair a table with a naming policy.
    pub fn new(table: &'a TableData, policy: P) -> Self {
        Self { table, policy }
    }

    /// Check the (preprocessed) table name, then every header in column
    /// order. Fails on the first defect; performs no sanitization.
    pub fn validate(&self) -> Result<()> {
        let table_name = self.policy.preprocess_table_name(self.table.table_name());
        self.policy
            .validate_table_name(&table_name)
            .map_err(NormalizeError::InvalidTableName)?;

        for (index, header) in self.table.headers().iter().enumerate() {
            let header = self.policy.preprocess_header(index, header);
            self.policy
                .validate_header(&header)
                .map_err(|source| NormalizeError::invalid_header(index, source))?;
        }
        Ok(())
    }

    /// Produce a new table whose name and headers are valid under the
    /// policy, substituting sanitized names for invalid ones.
    ///
    /// Every sanitized name is re-validated; a repair the policy's own
    /// validator rejects propagates as an error. Row values are carried
    /// over unconverted (a one-shot source is drained into the new table).
    pub fn normalize(&self) -> Result<TableData> {
        let table_name = self.normalized_table_name()?;
        let headers = self.normalized_headers()?;
        let rows = self.table.rows().to_vec();
        Ok(TableData::new(table_name, headers, rows).with_coercer(self.table.coercer()))
    }

    fn normalized_table_name(&self) -> Result<String> {
        let name = self.policy.preprocess_table_name(self.table.table_name());
        if self.policy.validate_table_name(&name).is_ok() {
            return Ok(name);
        }

        let repaired = self.policy.sanitize_table_name(&name);
        debug!(original = %name, %repaired, "sanitized table name");
        self.policy
            .validate_table_name(&repaired)
            .map_err(NormalizeError::InvalidTableName)?;
        Ok(repaired)
    }

    fn normalized_headers(&self) -> Result<Vec<String>> {
        self.table
            .headers()
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let header = self.policy.preprocess_header(index, header);
                if self.policy.validate_header(&header).is_ok() {
                    return Ok(header);
                }

                let repaired = self.policy.sanitize_header(&header);
                debug!(index, original = %header, %repaired, "sanitized header");
                self.policy
                    .validate_header(&repaired)
                    .map_err(|source| NormalizeError::invalid_header(index, source))?;
                Ok(repaired)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tabledata_model::Row;

    use super::*;
    use crate::policy::DefaultPolicy;

    #[test]
    fn validate_reports_the_table_name_first() {
        let table = TableData::new("", vec![""; 2], vec![Row::values([1, 2])]);
        let normalizer = TableDataNormalizer::new(&table, DefaultPolicy);
        assert!(matches!(
            normalizer.validate(),
            Err(NormalizeError::InvalidTableName(NameError::Empty))
        ));
    }

    #[test]
    fn validate_reports_the_first_bad_header() {
        let table = TableData::new("t", ["ok", "", ""], vec![Row::values([1, 2, 3])]);
        let normalizer = TableDataNormalizer::new(&table, DefaultPolicy);
        assert!(matches!(
            normalizer.validate(),
            Err(NormalizeError::InvalidHeaderName {
                index: 1,
                source: NameError::Empty,
            })
        ));
    }
}

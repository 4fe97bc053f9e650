//! Pluggable naming policies.

use crate::name::{self, NameError};

/// The capability set a naming convention must provide.
///
/// `preprocess_*` runs before every validation and defaults to identity;
/// `validate_*` decides whether a name is acceptable; `sanitize_*` repairs
/// a name that failed validation. A sanitized name is always re-validated
/// by the normalizer, so a policy's sanitizer must produce output its own
/// validator accepts for every name it claims to repair.
pub trait NamingPolicy {
    /// Preprocess the table name before validation.
    fn preprocess_table_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Decide whether the table name is acceptable.
    fn validate_table_name(&self, name: &str) -> Result<(), NameError>;

    /// Repair an invalid table name.
    fn sanitize_table_name(&self, name: &str) -> String;

    /// Preprocess a header before validation. The column index is available
    /// for positional repairs.
    fn preprocess_header(&self, index: usize, header: &str) -> String {
        let _ = index;
        header.to_string()
    }

    /// Decide whether a header name is acceptable.
    fn validate_header(&self, header: &str) -> Result<(), NameError>;

    /// Repair an invalid header name.
    fn sanitize_header(&self, header: &str) -> String;
}

/// The default policy: any name with visible content is acceptable.
///
/// Sanitization trims surrounding whitespace and strips control characters.
/// Emptiness cannot be repaired, so normalizing a table with an empty name
/// or header fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl NamingPolicy for DefaultPolicy {
    fn validate_table_name(&self, name: &str) -> Result<(), NameError> {
        name::validate_name(name)
    }

    fn sanitize_table_name(&self, name: &str) -> String {
        clean_text(name)
    }

    fn validate_header(&self, header: &str) -> Result<(), NameError> {
        name::validate_name(header)
    }

    fn sanitize_header(&self, header: &str) -> String {
        clean_text(header)
    }
}

fn clean_text(name: &str) -> String {
    name.trim().chars().filter(|ch| !ch.is_control()).collect()
}

/// Identifier rules: uppercase ASCII alphanumeric plus underscore, no
/// leading digit, bounded length.
///
/// Unnamed columns are repaired during preprocessing with their
/// spreadsheet column letters (`A`, `B`, ... `AA`), so this policy can
/// normalize header-sparse input that [`DefaultPolicy`] rejects.
#[derive(Debug, Clone)]
pub struct IdentifierPolicy {
    /// Maximum identifier length.
    pub max_len: usize,
    /// Replacement for a table name with no usable characters.
    pub table_fallback: String,
}

impl Default for IdentifierPolicy {
    fn default() -> Self {
        Self {
            max_len: 32,
            table_fallback: "TABLE".to_string(),
        }
    }
}

impl IdentifierPolicy {
    /// Create a policy with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum identifier length.
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

impl NamingPolicy for IdentifierPolicy {
    fn validate_table_name(&self, name: &str) -> Result<(), NameError> {
        name::validate_identifier(name)?;
        if name.len() > self.max_len {
            return Err(NameError::invalid(
                name,
                format!("longer than {} characters", self.max_len),
            ));
        }
        Ok(())
    }

    fn sanitize_table_name(&self, name: &str) -> String {
        name::sanitize_identifier(name, &self.table_fallback, 'T', self.max_len)
    }

    fn preprocess_header(&self, index: usize, header: &str) -> String {
        if header.trim().is_empty() {
            name::column_letters(index)
        } else {
            header.to_string()
        }
    }

    fn validate_header(&self, header: &str) -> Result<(), NameError> {
        name::validate_identifier(header)?;
        if header.len() > self.max_len {
            return Err(NameError::invalid(
                header,
                format!("longer than {} characters", self.max_len),
            ));
        }
        Ok(())
    }

    fn sanitize_header(&self, header: &str) -> String {
        name::sanitize_identifier(header, "COLUMN", 'C', self.max_len)
    }
}

//! Name validation and sanitization primitives.

use thiserror::Error;

/// Reasons a table or header name fails validation.
///
/// Emptiness is its own variant so callers can remap it to their own error
/// kinds instead of treating it as a generic defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is empty (or whitespace only).
    #[error("name is empty")]
    Empty,

    /// The name violates the active naming rules.
    #[error("invalid name '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

impl NameError {
    /// Create an Invalid error.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Accept any name with visible content.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        Err(NameError::Empty)
    } else {
        Ok(())
    }
}

/// Accept identifiers: ASCII alphanumeric or underscore, not starting with
/// a digit, non-empty.
pub fn validate_identifier(name: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        return Err(NameError::invalid(name, "must not start with a digit"));
    }
    if let Some(bad) = name.chars().find(|ch| !ch.is_ascii_alphanumeric() && *ch != '_') {
        return Err(NameError::invalid(
            name,
            format!("character '{bad}' is not allowed"),
        ));
    }
    Ok(())
}

/// Sanitize a raw name into a valid identifier.
///
/// Converts to uppercase alphanumeric, replaces other characters with
/// underscore, collapses runs, prefixes a leading digit with `prefix`, and
/// limits the result to `max_len` characters. Falls back to `fallback` when
/// nothing usable remains.
pub fn sanitize_identifier(raw: &str, fallback: &str, prefix: char, max_len: usize) -> String {
    let mut safe = String::with_capacity(raw.len());
    let mut last_was_underscore = true; // Treat start as underscore to skip leading
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            safe.push(ch.to_ascii_uppercase());
            last_was_underscore = false;
        } else if !last_was_underscore {
            safe.push('_');
            last_was_underscore = true;
        }
    }

    if safe.ends_with('_') {
        safe.pop();
    }

    if safe.is_empty() {
        return fallback.chars().take(max_len).collect();
    }

    if safe.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        safe.insert(0, prefix);
    }

    if safe.len() <= max_len {
        safe
    } else {
        safe.chars().take(max_len).collect()
    }
}

/// Spreadsheet-style column letters for a zero-based column index:
/// `A`, `B`, ... `Z`, `AA`, `AB`, ...
#[must_use]
pub fn column_letters(column_index: usize) -> String {
    if column_index < 26 {
        return char::from(b'A' + column_index as u8).to_string();
    }
    let div = column_index / 26;
    let rem = column_index % 26;
    format!("{}{}", column_letters(div - 1), column_letters(rem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_name_rejects_blank_input() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
        assert_eq!(validate_name("   "), Err(NameError::Empty));
        assert!(validate_name("ok").is_ok());
        assert!(validate_name(" spaced ").is_ok());
    }

    #[test]
    fn validate_identifier_rules() {
        assert!(validate_identifier("ok_col").is_ok());
        assert!(validate_identifier("OK2").is_ok());
        assert_eq!(validate_identifier(""), Err(NameError::Empty));
        assert!(matches!(
            validate_identifier("1abc"),
            Err(NameError::Invalid { .. })
        ));
        assert!(matches!(
            validate_identifier("a b"),
            Err(NameError::Invalid { .. })
        ));
    }

    #[test]
    fn sanitize_uppercases_and_collapses() {
        assert_eq!(sanitize_identifier("weight", "X", 'T', 8), "WEIGHT");
        assert_eq!(sanitize_identifier("my--table", "X", 'T', 16), "MY_TABLE");
        assert_eq!(sanitize_identifier("  padded  ", "X", 'T', 16), "PADDED");
    }

    #[test]
    fn sanitize_prefixes_leading_digit() {
        assert_eq!(sanitize_identifier("123abc", "X", 'T', 16), "T123ABC");
    }

    #[test]
    fn sanitize_truncates_to_max_len() {
        assert_eq!(sanitize_identifier("verylongname", "X", 'T', 8), "VERYLONG");
    }

    #[test]
    fn sanitize_falls_back_when_nothing_remains() {
        assert_eq!(sanitize_identifier("---", "TABLE", 'T', 8), "TABLE");
        assert_eq!(sanitize_identifier("", "TABLE", 'T', 8), "TABLE");
    }

    #[test]
    fn column_letters_roll_over_past_z() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(26 * 27), "AAA");
    }
}

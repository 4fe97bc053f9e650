//! Type detection and conversion for raw cell values.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::value::{CellValue, Value};

/// Converts raw cell values into their typed form.
///
/// Implementations must be deterministic and total: every raw value maps to
/// exactly one [`CellValue`] and the conversion never fails. Recognized
/// empty forms (null, blank text) map to [`CellValue::Null`].
pub trait ValueCoercer {
    /// Classify a raw value and convert it to its typed form.
    fn coerce(&self, raw: &Value) -> CellValue;

    /// Force a raw value into its plain string form, regardless of type.
    fn force_text(&self, raw: &Value) -> String {
        raw.to_string()
    }
}

/// The standard coercion rules.
///
/// Text cells are probed in order: boolean literals, integers, floats
/// (including `inf`/`nan`), then timestamps; anything else stays text,
/// stored verbatim. Finite floats with no fractional part collapse to
/// integers, so `2.0` and `"2.0"` both coerce to `Int(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCoercer;

impl ValueCoercer for DefaultCoercer {
    fn coerce(&self, raw: &Value) -> CellValue {
        match raw {
            Value::Null => CellValue::Null,
            Value::Bool(value) => CellValue::Bool(*value),
            Value::Int(value) => CellValue::Int(*value),
            Value::Float(value) => coerce_float(*value),
            Value::Text(value) => coerce_text(value),
        }
    }
}

fn coerce_float(value: f64) -> CellValue {
    let integral = value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value <= i64::MAX as f64;
    if integral {
        CellValue::Int(value as i64)
    } else {
        CellValue::Float(value)
    }
}

fn coerce_text(text: &str) -> CellValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return CellValue::Int(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return coerce_float(value);
    }
    if let Some(datetime) = parse_datetime(trimmed) {
        return CellValue::DateTime(datetime);
    }
    CellValue::Text(text.to_string())
}

/// Accepts RFC 3339 plus the common space-separated layout, with or without
/// an offset. Offset-less timestamps are taken as UTC.
fn parse_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(datetime);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    None
}

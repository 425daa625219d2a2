//! Lenient field accessors for provider JSON.
//!
//! The booking site's read API is schema-less in practice: ids arrive as
//! numbers or numeric strings, flags are sometimes missing, and list fields
//! occasionally come back as other shapes entirely. These helpers formalize
//! the normalization contract: a malformed shape is treated as absence, never
//! as an error.

use serde_json::Value;

/// Reads a field as an integer, accepting JSON integers and integer-valued
/// strings. Floats with a fractional part and everything else are absence.
pub fn int_field(value: &Value, key: &str) -> Option<i64> {
    match value.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Reads a field as a string slice.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

/// Reads a field as a trimmed, non-empty string slice.
pub fn trimmed_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    let trimmed = str_field(value, key)?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// True iff the field is the JSON literal `true`.
pub fn flag_field(value: &Value, key: &str) -> bool {
    value.get(key) == Some(&Value::Bool(true))
}

/// Reads a field as an array slice; any other shape is an empty list.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

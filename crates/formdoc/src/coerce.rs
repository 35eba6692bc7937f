//! Coercion of loosely-typed input values into canonical types.
//!
//! Inputs may arrive as serialized form data, so booleans and numbers can be
//! delivered as strings. Coercion is total: malformed input degrades to the
//! caller's default, it never raises.

use crate::types::Value;

/// Coerce a value to a boolean.
///
/// Returns `true` only for the literal boolean `true` or the exact string
/// `"true"` (surrounding whitespace ignored). Everything else is `false`,
/// including `"false"`, `"True"`, `"1"`, numbers, and `Null`. The string
/// case exists because flags round-trip through serialized form data;
/// strictness here is what keeps `"false"` from reading as set.
///
/// # Example
///
/// ```
/// use formdoc::{coerce_bool, Value};
///
/// assert!(coerce_bool(&Value::from(true)));
/// assert!(coerce_bool(&Value::from("true")));
/// assert!(!coerce_bool(&Value::from("false")));
/// assert!(!coerce_bool(&Value::from(1)));
/// ```
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim() == "true",
        _ => false,
    }
}

/// Coerce a value to a float.
///
/// Numbers pass through unchanged; numeric strings parse after trimming and
/// stripping a leading `$` and comma separators (so `"$1,500"` reads as
/// `1500.0`). Unparseable input yields `None`; the caller substitutes its
/// numeric default, typically zero.
///
/// # Example
///
/// ```
/// use formdoc::{coerce_number, Value};
///
/// assert_eq!(coerce_number(&Value::from(1500)), Some(1500.0));
/// assert_eq!(coerce_number(&Value::from("1500.50")), Some(1500.5));
/// assert_eq!(coerce_number(&Value::from("$1,500")), Some(1500.0));
/// assert_eq!(coerce_number(&Value::from("TBD")), None);
/// ```
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

/// Coerce a value to a whole calendar year.
///
/// Floats truncate toward zero; strings parse via the numeric rules.
pub fn coerce_year(value: &Value) -> Option<i64> {
    coerce_number(value).map(|n| n.trunc() as i64)
}

/// Parse a numeric string, tolerating currency punctuation.
fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let bare: String = rest
        .strip_prefix('$')
        .unwrap_or(rest)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    bare.parse::<f64>().ok().map(|n| sign * n)
}

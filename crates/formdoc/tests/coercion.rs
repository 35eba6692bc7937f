//! Integration tests for boolean and numeric coercion.
//!
//! Inputs arrive as serialized form data, so a flag may be the string
//! `"true"` and an amount may be `"$1,500"`. Coercion is total: nothing in
//! this module can fail, only degrade.

use formdoc::{Record, Value, coerce_bool, coerce_number, coerce_year};

// =============================================================================
// Boolean Coercion Totality
// =============================================================================

#[test]
fn bool_literal_true() {
    assert!(coerce_bool(&Value::Bool(true)));
}

#[test]
fn bool_string_true() {
    assert!(coerce_bool(&Value::from("true")));
}

#[test]
fn bool_string_true_with_whitespace() {
    assert!(coerce_bool(&Value::from("  true  ")));
}

#[test]
fn bool_string_false_is_false() {
    // The case naive truthy-string logic gets wrong.
    assert!(!coerce_bool(&Value::from("false")));
}

#[test]
fn bool_everything_else_is_false() {
    let falsy = [
        Value::Bool(false),
        Value::from("True"),
        Value::from("TRUE"),
        Value::from("yes"),
        Value::from("1"),
        Value::from("0"),
        Value::from(""),
        Value::from(0),
        Value::from(1),
        Value::from(1.0),
        Value::Null,
        Value::List(vec![Record::new()]),
    ];
    for value in falsy {
        assert!(!coerce_bool(&value), "expected false for {value:?}");
    }
}

// =============================================================================
// Numeric Coercion
// =============================================================================

#[test]
fn number_integer_passthrough() {
    assert_eq!(coerce_number(&Value::from(1500)), Some(1500.0));
}

#[test]
fn number_float_passthrough() {
    assert_eq!(coerce_number(&Value::from(5.5)), Some(5.5));
}

#[test]
fn number_negative_integer() {
    assert_eq!(coerce_number(&Value::from(-250)), Some(-250.0));
}

#[test]
fn number_plain_string() {
    assert_eq!(coerce_number(&Value::from("1500")), Some(1500.0));
}

#[test]
fn number_decimal_string() {
    assert_eq!(coerce_number(&Value::from("1500.50")), Some(1500.5));
}

#[test]
fn number_string_with_whitespace() {
    assert_eq!(coerce_number(&Value::from("  42  ")), Some(42.0));
}

#[test]
fn number_currency_string() {
    assert_eq!(coerce_number(&Value::from("$1,500")), Some(1500.0));
}

#[test]
fn number_negative_currency_string() {
    assert_eq!(coerce_number(&Value::from("-$2,000")), Some(-2000.0));
}

#[test]
fn number_explicit_plus_sign() {
    assert_eq!(coerce_number(&Value::from("+15000")), Some(15000.0));
}

#[test]
fn number_unparseable_yields_none() {
    assert_eq!(coerce_number(&Value::from("TBD")), None);
    assert_eq!(coerce_number(&Value::from("")), None);
    assert_eq!(coerce_number(&Value::from("$")), None);
    assert_eq!(coerce_number(&Value::from("12 Oak St")), None);
}

#[test]
fn number_non_numeric_shapes_yield_none() {
    assert_eq!(coerce_number(&Value::Null), None);
    assert_eq!(coerce_number(&Value::Bool(true)), None);
    assert_eq!(coerce_number(&Value::List(Vec::new())), None);
}

// =============================================================================
// Year Coercion
// =============================================================================

#[test]
fn year_from_number() {
    assert_eq!(coerce_year(&Value::from(1975)), Some(1975));
}

#[test]
fn year_from_string() {
    assert_eq!(coerce_year(&Value::from("1975")), Some(1975));
}

#[test]
fn year_float_truncates() {
    assert_eq!(coerce_year(&Value::from(1977.9)), Some(1977));
}

#[test]
fn year_unparseable_yields_none() {
    assert_eq!(coerce_year(&Value::from("circa 1920")), None);
    assert_eq!(coerce_year(&Value::Null), None);
}

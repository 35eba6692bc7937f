//! Integration tests for currency, percent, and thousands formatting.

use formdoc::{
    MISSING_AMOUNT, format_currency, format_percent, format_signed_currency, group_thousands,
};

// =============================================================================
// Currency Formatting
// =============================================================================

#[test]
fn currency_groups_thousands() {
    assert_eq!(format_currency(Some(1234567.0)), "$1,234,567");
}

#[test]
fn currency_no_spurious_separator() {
    assert_eq!(format_currency(Some(999.0)), "$999");
}

#[test]
fn currency_first_separator_at_four_digits() {
    assert_eq!(format_currency(Some(1000.0)), "$1,000");
}

#[test]
fn currency_zero_renders_placeholder() {
    // Zero is conflated with "not provided" by longstanding convention.
    assert_eq!(format_currency(Some(0.0)), "---");
}

#[test]
fn currency_none_renders_placeholder() {
    assert_eq!(format_currency(None), "---");
}

#[test]
fn currency_placeholder_constant() {
    assert_eq!(format_currency(None), MISSING_AMOUNT);
}

#[test]
fn currency_rounds_to_whole_dollars() {
    assert_eq!(format_currency(Some(1234.6)), "$1,235");
    assert_eq!(format_currency(Some(1234.4)), "$1,234");
}

#[test]
fn currency_rounding_to_zero_is_placeholder() {
    assert_eq!(format_currency(Some(0.4)), "---");
    assert_eq!(format_currency(Some(-0.4)), "---");
}

#[test]
fn currency_negative_amount() {
    assert_eq!(format_currency(Some(-1234.0)), "-$1,234");
}

#[test]
fn currency_small_amounts() {
    assert_eq!(format_currency(Some(1.0)), "$1");
    assert_eq!(format_currency(Some(75.0)), "$75");
}

// =============================================================================
// Signed Currency (Adjustment Deltas)
// =============================================================================

#[test]
fn signed_positive_gets_explicit_plus() {
    assert_eq!(format_signed_currency(15000.0), "+$15,000");
}

#[test]
fn signed_negative_gets_minus() {
    assert_eq!(format_signed_currency(-10000.0), "-$10,000");
}

#[test]
fn signed_zero_has_no_sign() {
    assert_eq!(format_signed_currency(0.0), "$0");
}

#[test]
fn signed_zero_is_not_conflated_with_missing() {
    // A waived fee formatted through the signed form stays visible.
    assert_ne!(format_signed_currency(0.0), MISSING_AMOUNT);
}

#[test]
fn signed_rounds_before_choosing_sign() {
    assert_eq!(format_signed_currency(0.4), "$0");
    assert_eq!(format_signed_currency(-0.4), "$0");
    assert_eq!(format_signed_currency(0.6), "+$1");
}

// =============================================================================
// Percent Formatting
// =============================================================================

#[test]
fn percent_rounds_to_precision() {
    assert_eq!(format_percent(7.456, 2), "7.46%");
}

#[test]
fn percent_keeps_trailing_zero() {
    assert_eq!(format_percent(7.0, 1), "7.0%");
}

#[test]
fn percent_zero_decimals() {
    assert_eq!(format_percent(5.5, 0), "6%");
}

#[test]
fn percent_zero_value() {
    assert_eq!(format_percent(0.0, 1), "0.0%");
}

// =============================================================================
// Thousands Grouping
// =============================================================================

#[test]
fn grouping_short_numbers_untouched() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(7), "7");
    assert_eq!(group_thousands(42), "42");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn grouping_inserts_from_least_significant_digit() {
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(10000), "10,000");
    assert_eq!(group_thousands(100000), "100,000");
    assert_eq!(group_thousands(1000000), "1,000,000");
}

#[test]
fn grouping_never_leads_with_separator() {
    // Exact multiples of three digits must not start with a comma.
    assert_eq!(group_thousands(100), "100");
    assert_eq!(group_thousands(123456), "123,456");
    assert_eq!(group_thousands(123456789), "123,456,789");
}

#[test]
fn grouping_handles_large_values() {
    assert_eq!(group_thousands(1234567890123), "1,234,567,890,123");
    assert_eq!(
        group_thousands(u64::MAX),
        "18,446,744,073,709,551,615"
    );
}

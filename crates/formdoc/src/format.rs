//! Display formatting for currency and percentage values.
//!
//! Formatting is the last step before text reaches the page, so these
//! functions are total: there is no input for which they fail. The
//! zero-as-missing convention in [`format_currency`] is longstanding
//! template behavior that several documents depend on; see the function
//! docs for the escape hatch.

/// Placeholder rendered where an amount is absent.
pub const MISSING_AMOUNT: &str = "---";

/// Format an amount as whole dollars: `$` prefix, comma-grouped thousands.
///
/// The amount is rounded half away from zero to an integer. `None` and
/// amounts that round to zero both render as `"---"`: historically these
/// templates treat a zero amount as "not provided". A deliberately waived
/// fee that must print as `$0` should be formatted with
/// [`format_signed_currency`], which has no such conflation.
///
/// # Example
///
/// ```
/// use formdoc::format_currency;
///
/// assert_eq!(format_currency(Some(1234567.0)), "$1,234,567");
/// assert_eq!(format_currency(Some(999.0)), "$999");
/// assert_eq!(format_currency(Some(0.0)), "---");
/// assert_eq!(format_currency(None), "---");
/// ```
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return MISSING_AMOUNT.to_string();
    };
    let rounded = round_half_away(amount);
    if rounded == 0 {
        return MISSING_AMOUNT.to_string();
    }
    if rounded < 0 {
        format!("-${}", group_thousands(rounded.unsigned_abs()))
    } else {
        format!("${}", group_thousands(rounded.unsigned_abs()))
    }
}

/// Format a signed dollar delta with an explicit sign.
///
/// Positive deltas carry a `+` prefix, negative a `-`, and an exact zero
/// renders `$0` with no sign at all. Used for comparable-sale adjustments,
/// where the direction of the delta is the whole point and zero means
/// "appraiser entered zero", not "missing".
///
/// # Example
///
/// ```
/// use formdoc::format_signed_currency;
///
/// assert_eq!(format_signed_currency(15000.0), "+$15,000");
/// assert_eq!(format_signed_currency(-10000.0), "-$10,000");
/// assert_eq!(format_signed_currency(0.0), "$0");
/// ```
pub fn format_signed_currency(delta: f64) -> String {
    let rounded = round_half_away(delta);
    match rounded {
        0 => "$0".to_string(),
        n if n < 0 => format!("-${}", group_thousands(n.unsigned_abs())),
        n => format!("+${}", group_thousands(n.unsigned_abs())),
    }
}

/// Format a ratio as a percentage with fixed decimal precision.
///
/// # Example
///
/// ```
/// use formdoc::format_percent;
///
/// assert_eq!(format_percent(7.456, 2), "7.46%");
/// assert_eq!(format_percent(7.0, 1), "7.0%");
/// ```
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Insert a comma every three digits counting from the least-significant
/// digit, never at the leading position.
///
/// # Example
///
/// ```
/// use formdoc::group_thousands;
///
/// assert_eq!(group_thousands(999), "999");
/// assert_eq!(group_thousands(1000), "1,000");
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len().div_euclid(3));
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining.rem_euclid(3) == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Round half away from zero to the nearest integer.
///
/// Non-finite input rounds to zero.
pub(crate) fn round_half_away(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    value.round() as i64
}

//! Derived values: calculators that run fresh on every render.
//!
//! Everything here is a pure function of resolved inputs. Nothing is
//! cached between documents; two renders with the same input map produce
//! the same derived values.

use crate::compose::{Cell, Inline, Tone};
use crate::engine::RenderContext;
use crate::format::{format_signed_currency, round_half_away};
use crate::types::Record;

/// Sum of several money fields.
///
/// Each field is coerced independently, so string amounts add as numbers
/// and a malformed field contributes zero (after the context records its
/// warning) instead of poisoning the total.
pub fn sum_money(ctx: &mut RenderContext<'_>, fields: &[&str]) -> f64 {
    fields
        .iter()
        .map(|field| ctx.money(field).unwrap_or(0.0))
        .sum()
}

/// Rent owed for a partial period.
///
/// `days_in_basis` is explicit (the form says whether it prorates over the
/// actual month length or a 30-day convention). A zero or negative basis
/// yields `0.0`.
pub fn prorate(monthly: f64, days_occupied: f64, days_in_basis: f64) -> f64 {
    if days_in_basis <= 0.0 {
        return 0.0;
    }
    monthly * days_occupied / days_in_basis
}

/// Weight-blended average of `(value, weight)` pairs.
///
/// Returns `None` when the weights sum to zero, which the caller renders
/// as a missing amount rather than inventing a figure.
pub fn weighted_average(pairs: &[(f64, f64)]) -> Option<f64> {
    let total_weight: f64 = pairs.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0.0 {
        return None;
    }
    let total: f64 = pairs.iter().map(|(value, weight)| value * weight).sum();
    Some(total / total_weight)
}

/// Whether a year falls strictly before a threshold year.
pub fn year_predates(year: i64, threshold: i64) -> bool {
    year < threshold
}

// ============================================================================
// Comparable sales
// ============================================================================

/// Typed view over one comparable-sale record.
///
/// The total adjustment and adjusted price are read from the record as
/// entered. The grid does not recompute them from the line adjustments;
/// reconciling the arithmetic is the appraiser's responsibility, and a
/// mismatch must survive into the printed report rather than being
/// silently corrected.
#[derive(Debug, Clone)]
pub struct Comparable {
    pub address: String,
    pub sale_price: Option<f64>,
    /// Reconciliation weight; `0.0` when absent.
    pub weight: f64,
    pub total_adjustment: f64,
    pub adjusted_price: Option<f64>,
    pub adjustments: Vec<Adjustment>,
    record: Record,
}

/// One line adjustment on a comparable: a category label and a signed
/// dollar delta.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub category: String,
    pub delta: f64,
}

impl Comparable {
    /// Extract the typed view from an input record.
    ///
    /// Missing numeric fields read as absent or zero per field; a
    /// malformed delta reads as zero. The record itself is retained for
    /// feature lookups in the grid.
    pub fn from_record(record: &Record) -> Self {
        let adjustments = record
            .list("adjustments")
            .iter()
            .map(|line| Adjustment {
                category: line.display("category"),
                delta: line.float("delta").unwrap_or(0.0),
            })
            .collect();
        Comparable {
            address: record.display("address"),
            sale_price: record.float("sale_price"),
            weight: record.float("weight").unwrap_or(0.0),
            total_adjustment: record.float("total_adjustment").unwrap_or(0.0),
            adjusted_price: record.float("adjusted_price"),
            adjustments,
            record: record.clone(),
        }
    }

    /// Display text of a feature field, for grid cells.
    pub fn feature_text(&self, field: &str) -> String {
        self.record.display(field)
    }

    /// The delta for a category label, matched after trimming and ASCII
    /// case folding. `None` when no line adjustment carries the label.
    pub fn adjustment_for(&self, category: &str) -> Option<f64> {
        self.adjustments
            .iter()
            .find(|line| line.category.trim().eq_ignore_ascii_case(category.trim()))
            .map(|line| line.delta)
    }
}

/// A grid cell pairing a raw feature value with its adjustment delta.
///
/// The delta renders in parentheses after the value: `(+$15,000)` toned
/// positive, `(-$10,000)` toned negative, `($0)` untoned. With no matching
/// adjustment the raw value stands alone. Tone follows the rounded dollar
/// figure, so a delta that prints as `$0` never carries a tone.
pub fn adjustment_cell(raw: &str, delta: Option<f64>) -> Cell {
    let mut inlines = vec![Inline::text(raw)];
    if let Some(delta) = delta {
        let tone = match round_half_away(delta) {
            0 => Tone::Normal,
            n if n < 0 => Tone::Negative,
            _ => Tone::Positive,
        };
        inlines.push(Inline::text(" "));
        inlines.push(Inline::toned(
            format!("({})", format_signed_currency(delta)),
            tone,
        ));
    }
    Cell::from_inlines(inlines)
}

//! Rendering the appraisal report: the comparison grid and the
//! reconciled value.

use formdoc::{Record, RenderWarning, fields};
use formdoc_forms::appraisal;

fn comparable(
    address: &str,
    sale_price: i64,
    bedrooms: i64,
    delta: Option<i64>,
    adjusted_price: i64,
    weight: i64,
) -> Record {
    let mut record = Record::new()
        .with("address", address)
        .with("sale_price", sale_price)
        .with("bedrooms", bedrooms)
        .with("adjusted_price", adjusted_price)
        .with("weight", weight)
        .with("total_adjustment", adjusted_price - sale_price);
    if let Some(delta) = delta {
        record = record.with(
            "adjustments",
            vec![Record::new().with("category", "Bedrooms").with("delta", delta)],
        );
    }
    record
}

// =============================================================================
// Sales comparison grid
// =============================================================================

#[test]
fn grid_pairs_features_with_toned_deltas() {
    let input = fields! {
        "comparables" => vec![
            comparable("123 Oak St", 250000, 4, Some(15000), 265000, 50),
            comparable("456 Elm Ave", 260000, 3, Some(-10000), 250000, 30),
            comparable("789 Pine Rd", 255000, 4, None, 255000, 20),
        ],
    };
    let (document, warnings) = appraisal::form().render(&input).unwrap();
    let text = document.to_string();
    assert!(text.contains("analyzes 3 recent sale(s)"));
    assert!(text.contains("Feature | 123 Oak St | 456 Elm Ave | 789 Pine Rd"));
    assert!(text.contains("Sale Price | $250,000 | $260,000 | $255,000"));
    assert!(text.contains("Bedrooms | 4 (+$15,000) | 3 (-$10,000) | 4"));
    assert!(text.contains("Total Adjustments | +$15,000 | -$10,000 | $0"));
    assert!(text.contains("Adjusted Price | $265,000 | $250,000 | $255,000"));
    assert!(warnings.is_empty());
}

#[test]
fn missing_comparables_render_a_placeholder() {
    let (document, warnings) = appraisal::form().render(&fields! {}).unwrap();
    let text = document.to_string();
    assert!(text.contains("No comparable sales provided."));
    assert!(warnings.iter().any(|w| matches!(
        w,
        RenderWarning::EmptyList { field } if field == "comparables"
    )));
}

// =============================================================================
// Reconciliation
// =============================================================================

#[test]
fn indicated_value_blends_adjusted_prices_by_weight() {
    let input = fields! {
        "comparables" => vec![
            comparable("123 Oak St", 250000, 4, None, 265000, 50),
            comparable("456 Elm Ave", 260000, 3, None, 250000, 30),
            comparable("789 Pine Rd", 255000, 4, None, 255000, 20),
        ],
        "reconciliation" => "Greatest weight is given to the most similar sale.",
    };
    let (document, _) = appraisal::form().render(&input).unwrap();
    let text = document.to_string();
    assert!(text.contains("Greatest weight is given to the most similar sale."));
    // (265,000 * 50 + 250,000 * 30 + 255,000 * 20) / 100
    assert!(text.contains("Indicated value by sales comparison approach: $258,500"));
}

#[test]
fn zero_weights_leave_the_indicated_value_missing() {
    let input = fields! {
        "comparables" => vec![
            comparable("123 Oak St", 250000, 4, None, 265000, 0),
        ],
    };
    let (document, _) = appraisal::form().render(&input).unwrap();
    assert!(
        document
            .to_string()
            .contains("Indicated value by sales comparison approach: ---")
    );
}

// =============================================================================
// Subject and certification
// =============================================================================

#[test]
fn subject_table_shows_values_as_entered() {
    let input = fields! {
        "subject_address" => "14 Birch Ln",
        "subject_bedrooms" => 3,
        "subject_square_feet" => 1850,
        "subject_condition" => "Average",
    };
    let (document, _) = appraisal::form().render(&input).unwrap();
    let text = document.to_string();
    assert!(text.contains("Address | 14 Birch Ln"));
    assert!(text.contains("Bedrooms | 3"));
    assert!(text.contains("Square Feet | 1850"));
    assert!(text.contains("Condition | Average"));
}

#[test]
fn certification_carries_the_appraiser_signature() {
    let input = fields! {
        "appraiser_name" => "Rae Ellison",
        "effective_date" => "July 30, 2026",
    };
    let (document, _) = appraisal::form().render(&input).unwrap();
    let text = document.to_string();
    assert!(text.contains("Effective date of value: July 30, 2026."));
    assert!(text.contains("Rae Ellison, Appraiser"));
}

//! Integration tests for derived-value calculators.

use formdoc::{
    Adjustment, Comparable, FieldSchema, FieldSpec, Inline, Record, RenderContext, Tone, fields,
    prorate, sum_money, weighted_average, year_predates,
};

// =============================================================================
// Total-Due Aggregation
// =============================================================================

#[test]
fn sum_money_adds_components() {
    let schema = FieldSchema::from_specs([
        FieldSpec::money("monthly_rent"),
        FieldSpec::money("security_deposit"),
        FieldSpec::money("pet_deposit"),
    ]);
    let input = fields! {
        "monthly_rent" => 1500,
        "security_deposit" => 1500,
        "pet_deposit" => 250,
    };
    let mut ctx = RenderContext::new(&input, &schema);
    let total = sum_money(&mut ctx, &["monthly_rent", "security_deposit", "pet_deposit"]);
    assert_eq!(total, 3250.0);
}

#[test]
fn sum_money_coerces_string_amounts() {
    // String inputs must add as numbers, never concatenate.
    let schema = FieldSchema::from_specs([
        FieldSpec::money("monthly_rent"),
        FieldSpec::money("security_deposit"),
    ]);
    let input = fields! { "monthly_rent" => "1500", "security_deposit" => "$1,500" };
    let mut ctx = RenderContext::new(&input, &schema);
    assert_eq!(sum_money(&mut ctx, &["monthly_rent", "security_deposit"]), 3000.0);
}

#[test]
fn sum_money_skips_absent_and_malformed() {
    let schema = FieldSchema::from_specs([
        FieldSpec::money("monthly_rent"),
        FieldSpec::money("security_deposit"),
        FieldSpec::money("pet_deposit"),
    ]);
    let input = fields! { "monthly_rent" => 1500, "security_deposit" => "TBD" };
    let mut ctx = RenderContext::new(&input, &schema);
    let total = sum_money(&mut ctx, &["monthly_rent", "security_deposit", "pet_deposit"]);
    assert_eq!(total, 1500.0);
    // The malformed component left a warning behind.
    assert_eq!(ctx.warnings().len(), 1);
}

// =============================================================================
// Proration
// =============================================================================

#[test]
fn prorate_partial_month() {
    assert_eq!(prorate(1500.0, 10.0, 30.0), 500.0);
}

#[test]
fn prorate_full_period() {
    assert_eq!(prorate(1500.0, 30.0, 30.0), 1500.0);
}

#[test]
fn prorate_actual_month_basis() {
    let amount = prorate(1550.0, 11.0, 31.0);
    assert!((amount - 550.0).abs() < 1e-9);
}

#[test]
fn prorate_zero_basis_is_zero() {
    assert_eq!(prorate(1500.0, 10.0, 0.0), 0.0);
    assert_eq!(prorate(1500.0, 10.0, -1.0), 0.0);
}

// =============================================================================
// Weighted Average
// =============================================================================

#[test]
fn weighted_average_blends_by_weight() {
    // Percentage weights, as appraisal reconciliations enter them.
    let indicated = weighted_average(&[(250000.0, 50.0), (260000.0, 30.0), (240000.0, 20.0)]);
    assert_eq!(indicated, Some(251000.0));
}

#[test]
fn weighted_average_single_pair() {
    assert_eq!(weighted_average(&[(250000.0, 1.0)]), Some(250000.0));
}

#[test]
fn weighted_average_zero_weights_is_none() {
    assert_eq!(weighted_average(&[(250000.0, 0.0), (260000.0, 0.0)]), None);
    assert_eq!(weighted_average(&[]), None);
}

// =============================================================================
// Date-Boundary Classification
// =============================================================================

#[test]
fn year_predates_threshold() {
    assert!(year_predates(1950, 1978));
    assert!(!year_predates(1978, 1978));
    assert!(!year_predates(1990, 1978));
}

// =============================================================================
// Comparable Records
// =============================================================================

fn comparable_record() -> Record {
    Record::new()
        .with("address", "12 Oak St")
        .with("sale_price", 250000)
        .with("weight", 0.5)
        .with("total_adjustment", 5000)
        .with("adjusted_price", 255000)
        .with("bedrooms", 4)
        .with(
            "adjustments",
            vec![
                Record::new().with("category", "Bedrooms").with("delta", 15000),
                Record::new().with("category", "Condition").with("delta", -10000),
            ],
        )
}

#[test]
fn comparable_typed_view() {
    let comp = Comparable::from_record(&comparable_record());
    assert_eq!(comp.address, "12 Oak St");
    assert_eq!(comp.sale_price, Some(250000.0));
    assert_eq!(comp.weight, 0.5);
    assert_eq!(comp.total_adjustment, 5000.0);
    assert_eq!(comp.adjusted_price, Some(255000.0));
    assert_eq!(
        comp.adjustments,
        vec![
            Adjustment { category: "Bedrooms".to_string(), delta: 15000.0 },
            Adjustment { category: "Condition".to_string(), delta: -10000.0 },
        ]
    );
}

#[test]
fn comparable_missing_fields_degrade() {
    let comp = Comparable::from_record(&Record::new());
    assert_eq!(comp.address, "");
    assert_eq!(comp.sale_price, None);
    assert_eq!(comp.weight, 0.0);
    assert_eq!(comp.total_adjustment, 0.0);
    assert_eq!(comp.adjusted_price, None);
    assert!(comp.adjustments.is_empty());
}

#[test]
fn adjustment_lookup_by_category() {
    let comp = Comparable::from_record(&comparable_record());
    assert_eq!(comp.adjustment_for("Bedrooms"), Some(15000.0));
    assert_eq!(comp.adjustment_for("Condition"), Some(-10000.0));
    assert_eq!(comp.adjustment_for("Garage"), None);
}

#[test]
fn adjustment_lookup_ignores_case_and_whitespace() {
    let comp = Comparable::from_record(&comparable_record());
    assert_eq!(comp.adjustment_for("bedrooms"), Some(15000.0));
    assert_eq!(comp.adjustment_for("  CONDITION  "), Some(-10000.0));
}

#[test]
fn totals_are_trusted_not_recomputed() {
    // Line adjustments sum to +5,000 but the entered total says +7,500;
    // the entered figure must survive into the view untouched.
    let record = comparable_record().with("total_adjustment", 7500);
    let comp = Comparable::from_record(&record);
    assert_eq!(comp.total_adjustment, 7500.0);
}

// =============================================================================
// Adjustment Cells
// =============================================================================

fn cell_parts(cell: &formdoc::Cell) -> Vec<(String, Tone)> {
    cell.inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text { text, tone, .. } => (text.clone(), *tone),
            Inline::Checkbox { .. } => panic!("unexpected checkbox"),
        })
        .collect()
}

#[test]
fn positive_delta_renders_green_with_plus() {
    let cell = formdoc::adjustment_cell("4", Some(15000.0));
    let parts = cell_parts(&cell);
    assert_eq!(parts[0], ("4".to_string(), Tone::Normal));
    assert_eq!(parts[2], ("(+$15,000)".to_string(), Tone::Positive));
}

#[test]
fn negative_delta_renders_red_with_minus() {
    let cell = formdoc::adjustment_cell("Average", Some(-10000.0));
    let parts = cell_parts(&cell);
    assert_eq!(parts[2], ("(-$10,000)".to_string(), Tone::Negative));
}

#[test]
fn zero_delta_has_no_sign_and_no_tone() {
    let cell = formdoc::adjustment_cell("2", Some(0.0));
    let parts = cell_parts(&cell);
    assert_eq!(parts[2], ("($0)".to_string(), Tone::Normal));
}

#[test]
fn missing_adjustment_renders_raw_value_alone() {
    let cell = formdoc::adjustment_cell("3", None);
    let parts = cell_parts(&cell);
    assert_eq!(parts, vec![("3".to_string(), Tone::Normal)]);
}

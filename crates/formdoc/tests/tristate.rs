//! Integration tests for tri-state disclosure fields.

use formdoc::{
    FieldSchema, FieldSpec, RenderContext, RenderWarning, TriState, Value, fields, inline_text,
    tristate_row,
};

// =============================================================================
// Value Interpretation
// =============================================================================

#[test]
fn canonical_strings() {
    assert_eq!(TriState::from_value(&Value::from("yes")), TriState::Yes);
    assert_eq!(TriState::from_value(&Value::from("no")), TriState::No);
    assert_eq!(TriState::from_value(&Value::from("unknown")), TriState::Unknown);
}

#[test]
fn strings_trimmed_and_case_folded() {
    assert_eq!(TriState::from_value(&Value::from(" Yes ")), TriState::Yes);
    assert_eq!(TriState::from_value(&Value::from("NO")), TriState::No);
}

#[test]
fn literal_booleans_map_to_yes_no() {
    assert_eq!(TriState::from_value(&Value::Bool(true)), TriState::Yes);
    assert_eq!(TriState::from_value(&Value::Bool(false)), TriState::No);
}

#[test]
fn unrecognized_input_is_unknown_never_no() {
    let stray = [
        Value::from("n/a"),
        Value::from("maybe"),
        Value::from(""),
        Value::from(0),
        Value::from(1),
        Value::Null,
    ];
    for value in stray {
        assert_eq!(
            TriState::from_value(&value),
            TriState::Unknown,
            "expected unknown for {value:?}"
        );
    }
}

#[test]
fn default_is_unknown() {
    assert_eq!(TriState::default(), TriState::Unknown);
}

// =============================================================================
// Context Resolution
// =============================================================================

#[test]
fn unset_field_resolves_unknown() {
    let schema = FieldSchema::from_specs([FieldSpec::tristate("lead_paint_known")]);
    let input = fields! {};
    let mut ctx = RenderContext::new(&input, &schema);
    assert_eq!(ctx.tristate("lead_paint_known"), TriState::Unknown);
    assert!(ctx.warnings().is_empty());
}

#[test]
fn declared_default_applies_when_absent() {
    let schema =
        FieldSchema::from_specs([FieldSpec::tristate("odometer_accurate").default("yes")]);
    let input = fields! {};
    let mut ctx = RenderContext::new(&input, &schema);
    assert_eq!(ctx.tristate("odometer_accurate"), TriState::Yes);
}

#[test]
fn stray_answer_warns_and_stays_unknown() {
    let schema = FieldSchema::from_specs([FieldSpec::tristate("lead_paint_known")]);
    let input = fields! { "lead_paint_known" => "probably" };
    let mut ctx = RenderContext::new(&input, &schema);
    assert_eq!(ctx.tristate("lead_paint_known"), TriState::Unknown);
    assert_eq!(
        ctx.warnings(),
        &[RenderWarning::UnrecognizedTriState {
            field: "lead_paint_known".to_string(),
            raw: "probably".to_string(),
        }]
    );
}

#[test]
fn explicit_unknown_does_not_warn() {
    let schema = FieldSchema::from_specs([FieldSpec::tristate("lead_paint_known")]);
    let input = fields! { "lead_paint_known" => "Unknown" };
    let mut ctx = RenderContext::new(&input, &schema);
    assert_eq!(ctx.tristate("lead_paint_known"), TriState::Unknown);
    assert!(ctx.warnings().is_empty());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn row_checks_exactly_one_option() {
    let row = tristate_row("Lead-based paint present", TriState::Yes);
    let formdoc::Block::Paragraph { inlines } = row else {
        panic!("expected paragraph");
    };
    let checked: Vec<&str> = inlines
        .iter()
        .filter_map(|inline| match inline {
            formdoc::Inline::Checkbox { checked: true, label } => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(checked, vec!["Yes"]);
}

#[test]
fn unset_field_renders_unknown_checked() {
    let schema = FieldSchema::from_specs([FieldSpec::tristate("lead_paint_known")]);
    let input = fields! {};
    let mut ctx = RenderContext::new(&input, &schema);
    let state = ctx.tristate("lead_paint_known");
    let row = tristate_row("Lead-based paint present", state);
    let formdoc::Block::Paragraph { inlines } = row else {
        panic!("expected paragraph");
    };
    assert_eq!(
        inline_text(&inlines),
        "Lead-based paint present:  [ ] Yes   [ ] No   [x] Unknown"
    );
}

#[test]
fn canonical_string_form() {
    assert_eq!(TriState::Yes.as_str(), "yes");
    assert_eq!(TriState::No.to_string(), "no");
    assert_eq!(TriState::Unknown.to_string(), "unknown");
}

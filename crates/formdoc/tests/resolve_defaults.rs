//! Integration tests for base field resolution and default substitution.

use formdoc::{Record, Value, fields, resolve};

// =============================================================================
// Present Fields
// =============================================================================

#[test]
fn resolve_present_field() {
    let input = fields! { "monthly_rent" => 1500 };
    let value = resolve(&input, "monthly_rent", Value::Null);
    assert_eq!(value, Value::Number(1500));
}

#[test]
fn resolve_present_string_field() {
    let input = fields! { "tenant_name" => "Jane Roe" };
    let value = resolve(&input, "tenant_name", Value::from("nobody"));
    assert_eq!(value, Value::String("Jane Roe".to_string()));
}

#[test]
fn resolve_present_ignores_default() {
    let input = fields! { "late_fee_percent" => 5.5 };
    let value = resolve(&input, "late_fee_percent", Value::from(0));
    assert_eq!(value, Value::Float(5.5));
}

// =============================================================================
// Absent Fields: Caller-Specified Defaults Of Every Type
// =============================================================================

#[test]
fn resolve_absent_string_default() {
    let input = fields! {};
    let value = resolve(&input, "tenant_name", Value::from("[Tenant Name]"));
    assert_eq!(value, Value::String("[Tenant Name]".to_string()));
}

#[test]
fn resolve_absent_number_default() {
    let input = fields! {};
    let value = resolve(&input, "pet_deposit", Value::from(0));
    assert_eq!(value, Value::Number(0));
}

#[test]
fn resolve_absent_bool_default() {
    let input = fields! {};
    let value = resolve(&input, "has_pets", Value::from(false));
    assert_eq!(value, Value::Bool(false));
}

#[test]
fn resolve_absent_list_default() {
    let input = fields! {};
    let default = Value::List(vec![Record::new().with("description", "none")]);
    let value = resolve(&input, "line_items", default.clone());
    assert_eq!(value, default);
}

#[test]
fn resolve_absent_null_default() {
    let input = fields! {};
    let value = resolve(&input, "anything", Value::Null);
    assert_eq!(value, Value::Null);
}

// =============================================================================
// Null Treated As Absent
// =============================================================================

#[test]
fn resolve_explicit_null_uses_default() {
    let input = fields! { "security_deposit" => Value::Null };
    let value = resolve(&input, "security_deposit", Value::from(250));
    assert_eq!(value, Value::Number(250));
}

#[test]
fn resolve_null_from_optional_none() {
    let none: Option<i64> = None;
    let input = fields! { "pet_deposit" => none };
    let value = resolve(&input, "pet_deposit", Value::from(0));
    assert_eq!(value, Value::Number(0));
}

// =============================================================================
// The fields! Macro
// =============================================================================

#[test]
fn fields_macro_empty() {
    let input = fields! {};
    assert!(input.is_empty());
}

#[test]
fn fields_macro_mixed_types() {
    let input = fields! {
        "tenant_name" => "Jane Roe",
        "monthly_rent" => 1500,
        "late_fee_percent" => 5.5,
        "has_pets" => true,
    };
    assert_eq!(input.len(), 4);
    assert_eq!(input["tenant_name"].as_str(), Some("Jane Roe"));
    assert_eq!(input["monthly_rent"].as_number(), Some(1500));
    assert_eq!(input["late_fee_percent"].as_float(), Some(5.5));
    assert_eq!(input["has_pets"].as_bool(), Some(true));
}

#[test]
fn fields_macro_record_list() {
    let input = fields! {
        "line_items" => vec![
            Record::new().with("description", "Rent").with("amount", 1500),
            Record::new().with("description", "Parking").with("amount", 75),
        ],
    };
    let items = input["line_items"].as_list().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].text("description"), Some("Parking"));
}

// =============================================================================
// Record Accessors
// =============================================================================

#[test]
fn record_typed_getters() {
    let record = Record::new()
        .with("address", "12 Oak St")
        .with("sale_price", 250000)
        .with("selected", true);
    assert_eq!(record.text("address"), Some("12 Oak St"));
    assert_eq!(record.float("sale_price"), Some(250000.0));
    assert!(record.flag("selected"));
}

#[test]
fn record_missing_fields() {
    let record = Record::new();
    assert_eq!(record.text("address"), None);
    assert_eq!(record.float("sale_price"), None);
    assert!(!record.flag("selected"));
    assert_eq!(record.display("address"), "");
    assert!(record.list("adjustments").is_empty());
}

#[test]
fn record_null_field_reads_as_absent() {
    let record = Record::new().with("weight", Value::Null);
    assert_eq!(record.get("weight"), None);
    assert_eq!(record.float("weight"), None);
}

#[test]
fn record_float_coerces_numeric_strings() {
    let record = Record::new().with("amount", "1500.50");
    assert_eq!(record.float("amount"), Some(1500.5));
}

#[test]
fn record_display_renders_numbers() {
    let record = Record::new().with("bedrooms", 4);
    assert_eq!(record.display("bedrooms"), "4");
}

#[test]
fn record_nested_list() {
    let record = Record::new().with(
        "adjustments",
        vec![Record::new().with("category", "Bedrooms").with("delta", 15000)],
    );
    let adjustments = record.list("adjustments");
    assert_eq!(adjustments.len(), 1);
    assert_eq!(adjustments[0].text("category"), Some("Bedrooms"));
}

#[test]
fn record_from_iterator() {
    let record: Record = [("description", "Security deposit"), ("note", "refundable")]
        .into_iter()
        .collect();
    assert_eq!(record.len(), 2);
    assert_eq!(record.text("note"), Some("refundable"));
}

#[test]
fn record_names_sorted() {
    let record = Record::new().with("zebra", 1).with("apple", 2).with("mango", 3);
    let names: Vec<&str> = record.names().collect();
    assert_eq!(names, vec!["apple", "mango", "zebra"]);
}

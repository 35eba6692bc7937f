//! The appraisal report.
//!
//! The sales comparison approach drives the whole report: each comparable
//! sale arrives as a record with per-feature adjustment lines, the grid
//! prints raw values beside their toned deltas, and the reconciliation
//! blends the adjusted prices through the appraiser's weights.

use formdoc::{
    Block, Cell, Comparable, FieldSchema, FieldSpec, Form, RenderContext, RenderWarning,
    SectionDef, comparison_grid, labeled_amount, signature_block, weighted_average,
};

/// Grid feature rows: display label and the record field it reads. The
/// label doubles as the adjustment category match key.
const FEATURE_ROWS: &[(&str, &str)] = &[
    ("Bedrooms", "bedrooms"),
    ("Bathrooms", "bathrooms"),
    ("Square Feet", "square_feet"),
    ("Year Built", "year_built"),
    ("Condition", "condition"),
];

/// The appraisal report form definition.
pub fn form() -> Form {
    Form::builder()
        .name("appraisal_report")
        .title("RESIDENTIAL APPRAISAL REPORT")
        .schema(schema())
        .sections(vec![
            SectionDef::new("purpose", purpose).titled("Purpose"),
            SectionDef::new("subject", subject).titled("Subject Property"),
            SectionDef::new("comparison", comparison).titled("Sales Comparison Approach"),
            SectionDef::new("reconciliation", reconciliation).titled("Reconciliation"),
            SectionDef::new("certification", certification).titled("Certification"),
        ])
        .build()
}

fn schema() -> FieldSchema {
    FieldSchema::from_specs([
        FieldSpec::text("appraiser_name").label("Appraiser's full name"),
        FieldSpec::text("client_name").label("Client the report is prepared for"),
        FieldSpec::text("effective_date").label("Effective date of value"),
        FieldSpec::text("subject_address").label("Street address of the subject"),
        FieldSpec::number("subject_bedrooms"),
        FieldSpec::number("subject_bathrooms"),
        FieldSpec::number("subject_square_feet"),
        FieldSpec::year("subject_year_built"),
        FieldSpec::text("subject_condition"),
        FieldSpec::list("comparables"),
        FieldSpec::text("reconciliation"),
    ])
}

/// Raw display text of a field: the value as entered, blank when absent.
fn raw_text(ctx: &mut RenderContext<'_>, name: &str) -> String {
    match ctx.raw(name) {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn purpose(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let client = ctx.text_or("client_name", "[Client Name]");
    let date = ctx.text_or("effective_date", "[Effective Date]");
    vec![Block::text(format!(
        "This report states the appraiser's opinion of the market value of the subject \
         property as of {date}, prepared for {client}."
    ))]
}

fn subject(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let rows = vec![
        vec![
            Cell::text("Address"),
            Cell::text(ctx.text_or("subject_address", "[Subject Address]")),
        ],
        vec![
            Cell::text("Bedrooms"),
            Cell::text(raw_text(ctx, "subject_bedrooms")),
        ],
        vec![
            Cell::text("Bathrooms"),
            Cell::text(raw_text(ctx, "subject_bathrooms")),
        ],
        vec![
            Cell::text("Square Feet"),
            Cell::text(raw_text(ctx, "subject_square_feet")),
        ],
        vec![
            Cell::text("Year Built"),
            Cell::text(raw_text(ctx, "subject_year_built")),
        ],
        vec![
            Cell::text("Condition"),
            Cell::text(ctx.text("subject_condition")),
        ],
    ];
    vec![Block::Table {
        headers: vec!["Feature".to_string(), "Subject".to_string()],
        rows,
    }]
}

fn comparison(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let records = ctx.list("comparables");
    if records.is_empty() {
        ctx.warn(RenderWarning::EmptyList {
            field: "comparables".to_string(),
        });
        return vec![Block::Placeholder {
            text: "No comparable sales provided.".to_string(),
        }];
    }
    let comparables: Vec<Comparable> = records.iter().map(Comparable::from_record).collect();
    vec![
        Block::text(format!(
            "The sales comparison approach analyzes {} recent sale(s) of similar \
             properties, each adjusted for differences from the subject.",
            comparables.len()
        )),
        comparison_grid(FEATURE_ROWS, &comparables),
    ]
}

fn reconciliation(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let pairs: Vec<(f64, f64)> = ctx
        .list("comparables")
        .iter()
        .map(Comparable::from_record)
        .filter_map(|comp| comp.adjusted_price.map(|price| (price, comp.weight)))
        .collect();
    let narrative = ctx.text_or(
        "reconciliation",
        "[Reconciliation of the value indications]",
    );
    vec![
        Block::text(narrative),
        labeled_amount(
            "Indicated value by sales comparison approach",
            weighted_average(&pairs),
        ),
    ]
}

fn certification(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let date = ctx.text_or("effective_date", "[Effective Date]");
    let appraiser = ctx.text("appraiser_name");
    let mut blocks = vec![
        Block::text(
            "The undersigned certifies that the statements of fact in this report are \
             true and correct, that the analyses and conclusions are the appraiser's \
             impartial professional opinion, and that the appraiser has no undisclosed \
             interest in the subject property.",
        ),
        Block::text(format!("Effective date of value: {date}.")),
    ];
    blocks.extend(signature_block(&[("Appraiser", appraiser.as_str())]));
    blocks
}

//! The invoice.
//!
//! Line items arrive as a record list. Each line's amount is taken as
//! entered, falling back to quantity times unit price when the amount
//! column is blank, and the total due is summed fresh on every render.

use formdoc::{
    Block, Cell, FieldSchema, FieldSpec, Form, Include, Inline, Record, RenderContext,
    RenderWarning, SectionDef, format_currency, format_percent, labeled_amount,
};

/// The invoice form definition.
pub fn form() -> Form {
    Form::builder()
        .name("invoice")
        .title("INVOICE")
        .schema(schema())
        .sections(vec![
            SectionDef::new("header", header),
            SectionDef::new("parties", parties),
            SectionDef::new("items", items).titled("Charges"),
            SectionDef::new("terms", terms).titled("Terms"),
            SectionDef::new("notes", notes)
                .titled("Notes")
                .when(Include::non_empty("notes")),
        ])
        .build()
}

fn schema() -> FieldSchema {
    FieldSchema::from_specs([
        FieldSpec::text("invoice_number").label("Invoice number"),
        FieldSpec::text("invoice_date"),
        FieldSpec::text("due_date"),
        FieldSpec::text("from_name").label("Issuer"),
        FieldSpec::text("from_address"),
        FieldSpec::text("bill_to_name").label("Recipient"),
        FieldSpec::text("bill_to_address"),
        FieldSpec::list("line_items"),
        FieldSpec::number("late_fee_percent").label("Monthly late charge, percent"),
        FieldSpec::text("notes"),
    ])
}

/// One line's charge: the amount as entered, else quantity times unit
/// price when both are present.
fn line_total(record: &Record) -> Option<f64> {
    record.float("amount").or_else(|| {
        let quantity = record.float("quantity")?;
        let unit = record.float("unit_price")?;
        Some(quantity * unit)
    })
}

fn header(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let number = ctx.text_or("invoice_number", "[Invoice Number]");
    let date = ctx.text_or("invoice_date", "[Invoice Date]");
    let due = ctx.text_or("due_date", "[Due Date]");
    vec![
        Block::paragraph(vec![Inline::bold(format!("Invoice No. {number}"))]),
        Block::text(format!("Invoice date: {date}")),
        Block::text(format!("Payment due: {due}")),
    ]
}

fn contact_line(prefix: &str, name: String, address: String) -> Block {
    let mut line = format!("{prefix}: {name}");
    if !address.trim().is_empty() {
        line.push_str(", ");
        line.push_str(&address);
    }
    Block::text(line)
}

fn parties(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![
        contact_line(
            "From",
            ctx.text_or("from_name", "[Issuer Name]"),
            ctx.text("from_address"),
        ),
        contact_line(
            "Bill to",
            ctx.text_or("bill_to_name", "[Recipient Name]"),
            ctx.text("bill_to_address"),
        ),
    ]
}

fn items(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let records = ctx.list("line_items");
    if records.is_empty() {
        ctx.warn(RenderWarning::EmptyList {
            field: "line_items".to_string(),
        });
        return vec![Block::Placeholder {
            text: "No line items provided.".to_string(),
        }];
    }

    let rows = records
        .iter()
        .map(|record| {
            vec![
                Cell::text(record.display("description")),
                Cell::text(record.display("quantity")),
                Cell::text(format_currency(record.float("unit_price"))),
                Cell::text(format_currency(line_total(record))),
            ]
        })
        .collect();
    let total: f64 = records.iter().filter_map(line_total).sum();

    vec![
        Block::Table {
            headers: vec![
                "Description".to_string(),
                "Qty".to_string(),
                "Unit Price".to_string(),
                "Amount".to_string(),
            ],
            rows,
        },
        Block::Spacer,
        labeled_amount("Total due", Some(total)),
    ]
}

fn terms(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let due = ctx.text_or("due_date", "[Due Date]");
    let mut blocks = vec![Block::text(format!("Payment is due by {due}."))];
    let late = ctx.number("late_fee_percent");
    if late > 0.0 {
        blocks.push(Block::text(format!(
            "Balances unpaid after the due date accrue a late charge of {} per month.",
            format_percent(late, 1)
        )));
    }
    blocks
}

fn notes(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(ctx.text("notes"))]
}

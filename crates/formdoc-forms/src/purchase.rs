//! The real estate purchase agreement.
//!
//! Three optional numbered contingencies (financing, inspection,
//! appraisal) sit in the middle of the body, so the printed number of
//! every later section depends on which contingencies the transaction
//! carries. Lettered attachments use "Exhibit" rather than the default
//! attachment word.

use formdoc::{
    Block, Column, FieldSchema, FieldSpec, Form, Include, Inline, RenderContext, SectionDef,
    format_currency, format_percent, record_table, signature_block,
};

/// The purchase agreement form definition.
pub fn form() -> Form {
    Form::builder()
        .name("purchase_agreement")
        .title("REAL ESTATE PURCHASE AGREEMENT")
        .attachment_word("Exhibit")
        .schema(schema())
        .sections(vec![
            SectionDef::new("parties", parties).titled("Parties").numbered(),
            SectionDef::new("property", property).titled("Property").numbered(),
            SectionDef::new("price", price).titled("Purchase Price").numbered(),
            SectionDef::new("financing", financing)
                .titled("Financing Contingency")
                .numbered()
                .when(Include::flag("financing_contingency")),
            SectionDef::new("inspection", inspection)
                .titled("Inspection Contingency")
                .numbered()
                .when(Include::flag("inspection_contingency")),
            SectionDef::new("appraisal", appraisal)
                .titled("Appraisal Contingency")
                .numbered()
                .when(Include::flag("appraisal_contingency")),
            SectionDef::new("personal_property", personal_property)
                .titled("Included Personal Property")
                .numbered()
                .when(Include::non_empty("personal_property")),
            SectionDef::new("closing", closing)
                .titled("Closing and Possession")
                .numbered(),
            SectionDef::new("remedies", remedies)
                .titled("Default and Remedies")
                .numbered(),
            SectionDef::new("signatures", signatures).titled("Signatures"),
            SectionDef::new("legal_description", legal_description)
                .titled("Legal Description")
                .lettered()
                .when(Include::non_empty("legal_description"))
                .on_new_page(),
        ])
        .build()
}

fn schema() -> FieldSchema {
    FieldSchema::from_specs([
        FieldSpec::text("buyer_name").label("Buyer's full name"),
        FieldSpec::text("seller_name").label("Seller's full name"),
        FieldSpec::text("property_address").label("Street address of the property"),
        FieldSpec::money("purchase_price").label("Total purchase price"),
        FieldSpec::money("earnest_money").label("Earnest money deposit"),
        FieldSpec::text("escrow_agent"),
        FieldSpec::text("closing_date"),
        FieldSpec::flag("financing_contingency"),
        FieldSpec::money("loan_amount"),
        FieldSpec::number("max_interest_rate").label("Maximum interest rate, percent"),
        FieldSpec::number("loan_term_years").default(30),
        FieldSpec::number("financing_days").default(21).label("Days to deliver loan approval"),
        FieldSpec::flag("inspection_contingency"),
        FieldSpec::number("inspection_days").default(10),
        FieldSpec::list("inspection_types"),
        FieldSpec::flag("appraisal_contingency"),
        FieldSpec::list("personal_property"),
        FieldSpec::text("legal_description"),
    ])
}

fn parties(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let seller = ctx.text_or("seller_name", "[Seller Name]");
    let buyer = ctx.text_or("buyer_name", "[Buyer Name]");
    vec![Block::text(format!(
        "This Real Estate Purchase Agreement (\"Agreement\") is made between {seller} \
         (\"Seller\") and {buyer} (\"Buyer\")."
    ))]
}

fn property(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let address = ctx.text_or("property_address", "[Property Address]");
    let mut text = format!(
        "Seller agrees to sell and Buyer agrees to buy the real property located at \
         {address}, together with all improvements and fixtures (the \"Property\")."
    );
    if let Some(label) = ctx.label_for("legal_description") {
        text.push_str(&format!(
            " The full legal description appears in Exhibit {label}."
        ));
    }
    vec![Block::text(text)]
}

fn price(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let escrow = ctx.text_or("escrow_agent", "[Escrow Agent]");
    vec![
        Block::paragraph(vec![
            Inline::text("The total purchase price is "),
            Inline::bold(format_currency(ctx.money("purchase_price"))),
            Inline::text(", payable as provided in this Agreement."),
        ]),
        Block::paragraph(vec![
            Inline::text("Buyer shall deposit earnest money of "),
            Inline::text(format_currency(ctx.money("earnest_money"))),
            Inline::text(format!(
                " with {escrow} within three (3) days of mutual acceptance, to be \
                 credited against the purchase price at closing."
            )),
        ]),
    ]
}

fn financing(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let loan = format_currency(ctx.money("loan_amount"));
    let term = ctx.number("loan_term_years");
    let rate = format_percent(ctx.number("max_interest_rate"), 2);
    let days = ctx.number("financing_days");
    vec![
        Block::text(format!(
            "This Agreement is contingent on Buyer obtaining a loan of {loan} for a term \
             of {term} years at an interest rate not exceeding {rate}."
        )),
        Block::text(format!(
            "Buyer shall apply for financing promptly and deliver evidence of loan \
             approval within {days} day(s) of mutual acceptance. If approval is not \
             delivered, either party may terminate this Agreement and the earnest money \
             returns to Buyer."
        )),
    ]
}

fn inspection(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let days = ctx.number("inspection_days");
    let table = record_table(
        ctx,
        "inspection_types",
        "inspection types",
        &[
            Column::checkbox("Ordered", "selected"),
            Column::text("Inspection", "name"),
        ],
    );
    vec![
        Block::text(format!(
            "Buyer may, within {days} day(s) of mutual acceptance, obtain the \
             inspections marked below at Buyer's expense, and may terminate this \
             Agreement if an inspection report is unacceptable to Buyer."
        )),
        table,
    ]
}

fn appraisal(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "This Agreement is contingent on the Property appraising at no less than the \
         purchase price. If the appraised value is lower, Buyer may renegotiate or \
         terminate, in which case the earnest money returns to Buyer.",
    )]
}

fn personal_property(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let table = record_table(
        ctx,
        "personal_property",
        "personal property items",
        &[
            Column::text("Item", "item"),
            Column::text("Condition", "condition"),
        ],
    );
    vec![
        Block::text(
            "The following personal property conveys with the Property at no additional \
             cost, in its present condition:",
        ),
        table,
    ]
}

fn closing(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let date = ctx.text_or("closing_date", "[Closing Date]");
    vec![Block::text(format!(
        "Closing shall occur on or before {date}. Possession transfers to Buyer at \
         closing, subject to any agreed rent-back."
    ))]
}

fn remedies(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "If Buyer fails to perform without legal excuse, Seller may retain the earnest \
         money as liquidated damages. If Seller fails to perform, Buyer may pursue \
         specific performance or terminate and recover the earnest money.",
    )]
}

fn signatures(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let seller = ctx.text("seller_name");
    let buyer = ctx.text("buyer_name");
    signature_block(&[("Seller", seller.as_str()), ("Buyer", buyer.as_str())])
}

fn legal_description(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(ctx.text("legal_description"))]
}

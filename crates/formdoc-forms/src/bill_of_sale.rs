//! The bill of sale.
//!
//! A short numbered form. Vehicle details and the odometer disclosure
//! attach behind a single flag, and the warranty clause is exclusive with
//! the as-is clause through one enumerated field whose declared default
//! keeps the as-is path when the caller says nothing.

use formdoc::{
    Block, Cell, FieldSchema, FieldSpec, Form, Include, Inline, RenderContext, SectionDef,
    format_currency, group_thousands, signature_block, tristate_row,
};

/// Accepted payment methods: canonical value and checkbox caption.
const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("cash", "Cash"),
    ("check", "Check"),
    ("certified_funds", "Certified funds"),
    ("electronic_transfer", "Electronic transfer"),
];

/// The bill of sale form definition.
pub fn form() -> Form {
    Form::builder()
        .name("bill_of_sale")
        .title("BILL OF SALE")
        .schema(schema())
        .sections(vec![
            SectionDef::new("sale", sale).titled("Sale").numbered(),
            SectionDef::new("payment", payment).titled("Payment").numbered(),
            SectionDef::new("title", title).titled("Title").numbered(),
            SectionDef::new("vehicle", vehicle)
                .titled("Vehicle Description")
                .numbered()
                .when(Include::flag("is_vehicle")),
            SectionDef::new("odometer", odometer)
                .titled("Odometer Disclosure")
                .numbered()
                .when(Include::flag("is_vehicle")),
            SectionDef::new("warranty", warranty)
                .titled("Express Warranty")
                .numbered()
                .when(Include::equals("warranty_type", ["express_warranty"])),
            SectionDef::new("as_is", as_is)
                .titled("As-Is Sale")
                .numbered()
                .when(Include::equals("warranty_type", ["as_is"])),
            SectionDef::new("signatures", signatures).titled("Signatures"),
        ])
        .build()
}

fn schema() -> FieldSchema {
    FieldSchema::from_specs([
        FieldSpec::text("seller_name").label("Seller's full name"),
        FieldSpec::text("buyer_name").label("Buyer's full name"),
        FieldSpec::text("sale_date").label("Date of sale"),
        FieldSpec::text("item_description").label("Property sold"),
        FieldSpec::money("sale_price").label("Sale price"),
        FieldSpec::text("price_in_words"),
        FieldSpec::choice(
            "payment_method",
            PAYMENT_METHODS.iter().map(|(value, _)| *value),
        ),
        FieldSpec::flag("is_vehicle").label("The property is a motor vehicle"),
        FieldSpec::text("vehicle_make"),
        FieldSpec::text("vehicle_model"),
        FieldSpec::year("vehicle_year"),
        FieldSpec::text("vehicle_vin").label("Vehicle identification number"),
        FieldSpec::number("odometer_reading").label("Odometer reading, miles"),
        FieldSpec::tristate("odometer_accurate"),
        FieldSpec::choice("warranty_type", ["as_is", "express_warranty"]).default("as_is"),
        FieldSpec::text("warranty_terms"),
    ])
}

fn sale(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let date = ctx.text_or("sale_date", "[Date of Sale]");
    let seller = ctx.text_or("seller_name", "[Seller Name]");
    let buyer = ctx.text_or("buyer_name", "[Buyer Name]");
    let item = ctx.text_or("item_description", "[Description of Property]");
    let price = format_currency(ctx.money("sale_price"));
    let words = ctx.text("price_in_words");
    let tail = if words.trim().is_empty() {
        ", receipt of which Seller acknowledges.".to_string()
    } else {
        format!(" ({words}), receipt of which Seller acknowledges.")
    };
    vec![
        Block::text(format!(
            "On {date}, {seller} (\"Seller\") sells and transfers to {buyer} (\"Buyer\") \
             the following property: {item}."
        )),
        Block::paragraph(vec![
            Inline::text("The total sale price is "),
            Inline::bold(price),
            Inline::text(tail),
        ]),
    ]
}

fn payment(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let chosen = ctx.choice("payment_method");
    let mut inlines = vec![Inline::text("Payment received by:  ")];
    for (i, (value, label)) in PAYMENT_METHODS.iter().enumerate() {
        if i > 0 {
            inlines.push(Inline::text("   "));
        }
        inlines.push(Inline::checkbox(chosen == *value, *label));
    }
    vec![Block::paragraph(inlines)]
}

fn title(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "Seller warrants that Seller is the lawful owner of the property, that it is \
         free of all liens and encumbrances, and that Seller has full right and \
         authority to sell it.",
    )]
}

fn vehicle(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let year = match ctx.year("vehicle_year") {
        Some(year) => year.to_string(),
        None => "[Year]".to_string(),
    };
    vec![Block::Table {
        headers: vec!["Detail".to_string(), "Value".to_string()],
        rows: vec![
            vec![Cell::text("Make"), Cell::text(ctx.text_or("vehicle_make", "[Make]"))],
            vec![
                Cell::text("Model"),
                Cell::text(ctx.text_or("vehicle_model", "[Model]")),
            ],
            vec![Cell::text("Year"), Cell::text(year)],
            vec![Cell::text("VIN"), Cell::text(ctx.text_or("vehicle_vin", "[VIN]"))],
        ],
    }]
}

fn odometer(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let miles = ctx.number("odometer_reading");
    vec![
        Block::text(format!(
            "The odometer reading at the time of sale is {} miles.",
            group_thousands(miles as u64)
        )),
        tristate_row(
            "The odometer reading reflects the actual mileage of the vehicle",
            ctx.tristate("odometer_accurate"),
        ),
    ]
}

fn warranty(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let terms = ctx.text_or("warranty_terms", "[Warranty Terms]");
    vec![
        Block::text(format!("Seller warrants the property as follows: {terms}")),
        Block::text("Except as stated above, no other warranty, express or implied, is made."),
    ]
}

fn as_is(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "The property is sold in its present condition, AS-IS, WHERE-IS, with all \
         faults and without any warranty, express or implied, including any warranty of \
         merchantability or fitness for a particular purpose. Buyer has inspected the \
         property to Buyer's satisfaction.",
    )]
}

fn signatures(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let seller = ctx.text("seller_name");
    let buyer = ctx.text("buyer_name");
    signature_block(&[("Seller", seller.as_str()), ("Buyer", buyer.as_str())])
}

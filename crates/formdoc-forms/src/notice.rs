//! The notice to vacate.
//!
//! A letter, not a numbered contract: every section is unlabeled. One
//! enumerated field chooses between the pay-or-quit, cure-or-quit, and
//! unconditional variants; an unrecognized or missing notice type selects
//! none of them, so the printed notice never carries the wrong demand.

use formdoc::{
    Block, FieldSchema, FieldSpec, Form, Include, Inline, RenderContext, SectionDef,
    labeled_amount, signature_block,
};

/// Service methods for the certificate of service.
const SERVICE_METHODS: &[(&str, &str)] = &[
    ("hand_delivery", "Hand delivery"),
    ("certified_mail", "Certified mail"),
    ("posting_and_mailing", "Posting and mailing"),
];

/// The notice-to-vacate form definition.
pub fn form() -> Form {
    Form::builder()
        .name("notice_to_vacate")
        .title("NOTICE TO VACATE")
        .schema(schema())
        .sections(vec![
            SectionDef::new("addressee", addressee),
            SectionDef::new("pay_or_quit", pay_or_quit)
                .titled("Notice to Pay Rent or Quit")
                .when(Include::equals("notice_type", ["pay_or_quit"])),
            SectionDef::new("cure_or_quit", cure_or_quit)
                .titled("Notice to Cure or Quit")
                .when(Include::equals("notice_type", ["cure_or_quit"])),
            SectionDef::new("unconditional", unconditional)
                .titled("Unconditional Notice to Quit")
                .when(Include::equals("notice_type", ["unconditional"])),
            SectionDef::new("reservation", reservation),
            SectionDef::new("service", service).titled("Certificate of Service"),
        ])
        .build()
}

fn schema() -> FieldSchema {
    FieldSchema::from_specs([
        FieldSpec::text("tenant_name").label("Tenant's full name"),
        FieldSpec::text("landlord_name").label("Landlord's full name"),
        FieldSpec::text("premises_address"),
        FieldSpec::choice(
            "notice_type",
            ["pay_or_quit", "cure_or_quit", "unconditional"],
        ),
        FieldSpec::number("notice_days").default(3).label("Days to comply after service"),
        FieldSpec::money("amount_owed").label("Past-due rent"),
        FieldSpec::text("rent_period").label("Rental period the arrears cover"),
        FieldSpec::text("violation_description"),
        FieldSpec::text("served_date"),
        FieldSpec::choice(
            "served_by",
            SERVICE_METHODS.iter().map(|(value, _)| *value),
        ),
        FieldSpec::text("server_name").label("Person who served the notice"),
    ])
}

fn addressee(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let tenant = ctx.text_or("tenant_name", "[Tenant Name]");
    let address = ctx.text_or("premises_address", "[Premises Address]");
    let landlord = ctx.text_or("landlord_name", "[Landlord Name]");
    vec![
        Block::text(format!(
            "To: {tenant}, and all others in possession of the premises located at \
             {address}."
        )),
        Block::text(format!("From: {landlord} (Landlord).")),
    ]
}

fn pay_or_quit(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let days = ctx.number("notice_days");
    let period = ctx.text_or("rent_period", "[Rental Period]");
    vec![
        Block::text(format!(
            "Within {days} day(s) after service of this notice, you must pay the \
             past-due rent stated below or vacate and deliver possession of the \
             premises to Landlord."
        )),
        labeled_amount("Past-due rent", ctx.money("amount_owed")),
        Block::text(format!("The amount stated covers the rental period {period}.")),
        Block::text(
            "If you fail to comply within the stated period, Landlord will begin legal \
             proceedings to recover possession, rent, damages, and costs.",
        ),
    ]
}

fn cure_or_quit(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let days = ctx.number("notice_days");
    let violation = ctx.text_or("violation_description", "[Description of Violation]");
    vec![
        Block::text(format!(
            "You are in violation of your lease as follows: {violation}"
        )),
        Block::text(format!(
            "Within {days} day(s) after service of this notice, you must cure the \
             violation stated above or vacate and deliver possession of the premises \
             to Landlord."
        )),
    ]
}

fn unconditional(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let days = ctx.number("notice_days");
    vec![Block::text(format!(
        "Within {days} day(s) after service of this notice, you must vacate and \
         deliver possession of the premises to Landlord. This notice is unconditional; \
         no opportunity to cure is offered."
    ))]
}

fn reservation(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "Landlord reserves all rights and remedies, including the right to recover rent \
         accruing through the date possession is returned. Acceptance of a partial \
         payment does not waive this notice.",
    )]
}

fn service(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let date = ctx.text_or("served_date", "[Date of Service]");
    let chosen = ctx.choice("served_by");
    let server = ctx.text("server_name");

    let mut inlines = vec![Inline::text("Served by:  ")];
    for (i, (value, label)) in SERVICE_METHODS.iter().enumerate() {
        if i > 0 {
            inlines.push(Inline::text("   "));
        }
        inlines.push(Inline::checkbox(chosen == *value, *label));
    }

    let mut blocks = vec![
        Block::text(format!(
            "On {date}, a copy of this notice was served on the tenant(s) named above \
             by the method indicated below."
        )),
        Block::paragraph(inlines),
    ];
    blocks.extend(signature_block(&[("Served by", server.as_str())]));
    blocks
}

//! The residential lease agreement.
//!
//! The fullest template in the library: numbered body sections with two
//! conditional insertions (prorated rent, the pre-1978 lead-based paint
//! disclosure), tri-state policy rows, and six flag-driven lettered
//! addenda. The addenda index cross-references assigned letters, so the
//! printed references always match the set actually attached.

use formdoc::{
    Block, Cell, FieldSchema, FieldSpec, Form, Include, Inline, RenderContext, SectionDef,
    format_currency, format_percent, labeled_amount, prorate, signature_block, sum_money,
    tristate_row,
};

/// Lettered addenda in canonical order: section key and display title.
const ADDENDA: &[(&str, &str)] = &[
    ("pets", "Pet Addendum"),
    ("smoking", "No-Smoking Addendum"),
    ("pool", "Pool and Spa Addendum"),
    ("mold", "Mold Disclosure Addendum"),
    ("bed_bugs", "Bed Bug Disclosure Addendum"),
    ("crime_free", "Crime-Free Housing Addendum"),
];

/// The residential lease form definition.
pub fn form() -> Form {
    Form::builder()
        .name("residential_lease")
        .title("RESIDENTIAL LEASE AGREEMENT")
        .schema(schema())
        .sections(vec![
            SectionDef::new("parties", parties).titled("Parties").numbered(),
            SectionDef::new("premises", premises).titled("Premises").numbered(),
            SectionDef::new("term", term).titled("Term").numbered(),
            SectionDef::new("rent", rent).titled("Rent").numbered(),
            SectionDef::new("prorated_rent", prorated_rent)
                .titled("Prorated Rent")
                .numbered()
                .when(Include::flag("prorate_first_month")),
            SectionDef::new("deposits", deposits)
                .titled("Deposits and Amounts Due at Signing")
                .numbered(),
            SectionDef::new("policies", policies).titled("Policies").numbered(),
            SectionDef::new("lead_paint", lead_paint)
                .titled("Lead-Based Paint Disclosure")
                .numbered()
                .when(Include::year_before("year_built", 1978)),
            SectionDef::new("special_terms", special_terms)
                .titled("Additional Terms")
                .numbered()
                .when(Include::non_empty("special_terms")),
            SectionDef::new("addenda_index", addenda_index).titled("Addenda"),
            SectionDef::new("signatures", signatures).titled("Signatures"),
            SectionDef::new("pets", pet_addendum)
                .titled("Pet Addendum")
                .lettered()
                .when(Include::flag("has_pets"))
                .on_new_page(),
            SectionDef::new("smoking", smoking_addendum)
                .titled("No-Smoking Addendum")
                .lettered()
                .when(Include::flag("no_smoking"))
                .on_new_page(),
            SectionDef::new("pool", pool_addendum)
                .titled("Pool and Spa Addendum")
                .lettered()
                .when(Include::flag("has_pool"))
                .on_new_page(),
            SectionDef::new("mold", mold_addendum)
                .titled("Mold Disclosure Addendum")
                .lettered()
                .when(Include::flag("mold_disclosure"))
                .on_new_page(),
            SectionDef::new("bed_bugs", bed_bug_addendum)
                .titled("Bed Bug Disclosure Addendum")
                .lettered()
                .when(Include::flag("bed_bug_disclosure"))
                .on_new_page(),
            SectionDef::new("crime_free", crime_free_addendum)
                .titled("Crime-Free Housing Addendum")
                .lettered()
                .when(Include::flag("crime_free_addendum"))
                .on_new_page(),
        ])
        .build()
}

fn schema() -> FieldSchema {
    FieldSchema::from_specs([
        FieldSpec::text("landlord_name").label("Landlord's full name"),
        FieldSpec::text("tenant_name").label("Tenant's full name"),
        FieldSpec::text("premises_address").label("Street address of the premises"),
        FieldSpec::text("lease_start").label("First day of the term"),
        FieldSpec::text("lease_end").label("Last day of the term"),
        FieldSpec::money("monthly_rent").label("Monthly rent"),
        FieldSpec::number("rent_due_day").default(1).label("Day of month rent is due"),
        FieldSpec::number("late_fee_percent").label("Late fee, percent of monthly rent"),
        FieldSpec::number("late_fee_grace_days").default(5),
        FieldSpec::flag("prorate_first_month"),
        FieldSpec::number("prorated_days").label("Days occupied in the first month"),
        FieldSpec::number("days_in_month").default(30).label("Proration basis"),
        FieldSpec::money("security_deposit").label("Security deposit"),
        FieldSpec::money("pet_deposit").label("Pet deposit"),
        FieldSpec::tristate("pets_allowed"),
        FieldSpec::tristate("smoking_allowed"),
        FieldSpec::year("year_built").label("Year the structure was built"),
        FieldSpec::tristate("lead_paint_present"),
        FieldSpec::tristate("lead_paint_records"),
        FieldSpec::text("special_terms"),
        FieldSpec::flag("has_pets").label("Attach pet addendum"),
        FieldSpec::text("pet_description"),
        FieldSpec::flag("no_smoking").label("Attach no-smoking addendum"),
        FieldSpec::flag("has_pool").label("Attach pool and spa addendum"),
        FieldSpec::flag("mold_disclosure").label("Attach mold disclosure"),
        FieldSpec::flag("bed_bug_disclosure").label("Attach bed bug disclosure"),
        FieldSpec::tristate("bed_bug_history"),
        FieldSpec::flag("crime_free_addendum").label("Attach crime-free housing addendum"),
    ])
}

// ============================================================================
// Numbered body
// ============================================================================

fn parties(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let landlord = ctx.text_or("landlord_name", "[Landlord Name]");
    let tenant = ctx.text_or("tenant_name", "[Tenant Name]");
    vec![Block::text(format!(
        "This Residential Lease Agreement (\"Lease\") is entered into by and between \
         {landlord} (\"Landlord\") and {tenant} (\"Tenant\")."
    ))]
}

fn premises(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let address = ctx.text_or("premises_address", "[Premises Address]");
    vec![Block::text(format!(
        "Landlord leases to Tenant the residential premises located at {address} \
         (the \"Premises\"), for use as a private residence only."
    ))]
}

fn term(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let start = ctx.text_or("lease_start", "[Start Date]");
    let end = ctx.text_or("lease_end", "[End Date]");
    vec![Block::text(format!(
        "The term of this Lease begins on {start} and ends on {end}, unless terminated \
         earlier under its terms."
    ))]
}

fn rent(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let monthly = ctx.money("monthly_rent");
    let due_day = ctx.number("rent_due_day");
    let mut blocks = vec![Block::paragraph(vec![
        Inline::text("Tenant shall pay rent of "),
        Inline::bold(format_currency(monthly)),
        Inline::text(format!(
            " per month, due in advance on day {due_day} of each calendar month."
        )),
    ])];

    let late_percent = ctx.number("late_fee_percent");
    if late_percent > 0.0 {
        let grace = ctx.number("late_fee_grace_days");
        blocks.push(Block::text(format!(
            "If rent is not received within {grace} day(s) of the due date, Tenant shall \
             pay a late fee of {} of the monthly rent.",
            format_percent(late_percent, 1)
        )));
    }
    blocks
}

fn prorated_rent(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let monthly = ctx.money("monthly_rent").unwrap_or(0.0);
    let days = ctx.number("prorated_days");
    let basis = ctx.number("days_in_month");
    let amount = prorate(monthly, days, basis);
    vec![Block::text(format!(
        "Tenant takes possession partway through the first month, occupying {days} of \
         {basis} days. Prorated rent of {} is due for that period in place of a full \
         month's rent.",
        format_currency(Some(amount))
    ))]
}

fn deposits(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let rent = ctx.money("monthly_rent");
    let security = ctx.money("security_deposit");
    let pet = ctx.money("pet_deposit");
    let total = sum_money(ctx, &["monthly_rent", "security_deposit", "pet_deposit"]);
    vec![
        Block::Table {
            headers: vec!["Item".to_string(), "Amount".to_string()],
            rows: vec![
                vec![
                    Cell::text("First month's rent"),
                    Cell::text(format_currency(rent)),
                ],
                vec![
                    Cell::text("Security deposit"),
                    Cell::text(format_currency(security)),
                ],
                vec![Cell::text("Pet deposit"), Cell::text(format_currency(pet))],
                vec![
                    Cell::text("Total due at signing"),
                    Cell::text(format_currency(Some(total))),
                ],
            ],
        },
        Block::text(
            "The security deposit secures Tenant's performance under this Lease and will \
             be returned as required by law, less lawful deductions. A pet deposit applies \
             only when a pet addendum is attached.",
        ),
    ]
}

fn policies(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![
        tristate_row("Pets permitted on the Premises", ctx.tristate("pets_allowed")),
        tristate_row(
            "Smoking permitted on the Premises",
            ctx.tristate("smoking_allowed"),
        ),
        Block::text(
            "Where a policy above is marked No or Unknown, the corresponding addendum, if \
             attached, controls.",
        ),
    ]
}

fn lead_paint(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![
        Block::text(
            "The Premises were built before 1978. Housing built before 1978 may contain \
             lead-based paint and lead-based paint hazards. Landlord makes the following \
             federally required disclosure.",
        ),
        tristate_row(
            "Known lead-based paint or hazards are present in the housing",
            ctx.tristate("lead_paint_present"),
        ),
        tristate_row(
            "Landlord has reports or records pertaining to lead-based paint",
            ctx.tristate("lead_paint_records"),
        ),
        Block::text(
            "Tenant acknowledges receipt of the pamphlet Protect Your Family From Lead \
             in Your Home.",
        ),
    ]
}

fn special_terms(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(ctx.text("special_terms"))]
}

fn addenda_index(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let attached: Vec<(String, &str)> = ADDENDA
        .iter()
        .filter_map(|(key, title)| ctx.label_for(key).map(|label| (label.to_string(), *title)))
        .collect();
    if attached.is_empty() {
        return vec![Block::text("No addenda are attached to this Lease.")];
    }
    let mut blocks = vec![Block::text(
        "The following addenda are attached to and incorporated into this Lease:",
    )];
    for (label, title) in attached {
        blocks.push(Block::text(format!("Addendum {label} - {title}")));
    }
    blocks
}

fn signatures(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let landlord = ctx.text("landlord_name");
    let tenant = ctx.text("tenant_name");
    let mut blocks = vec![Block::text(
        "IN WITNESS WHEREOF, the parties have executed this Lease as of the dates below.",
    )];
    blocks.extend(signature_block(&[
        ("Landlord", landlord.as_str()),
        ("Tenant", tenant.as_str()),
    ]));
    blocks
}

// ============================================================================
// Lettered addenda
// ============================================================================

fn pet_addendum(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    let description = ctx.text_or("pet_description", "[Pet Description]");
    vec![
        Block::text(format!(
            "Tenant may keep the following pet(s) on the Premises: {description}."
        )),
        labeled_amount("Additional pet deposit", ctx.money("pet_deposit")),
        Block::text(
            "Tenant shall keep the Premises free of pet damage and odors, restrain the \
             pet(s) in common areas, and comply with all animal-related ordinances. This \
             addendum does not authorize animals excluded elsewhere in this Lease.",
        ),
    ]
}

fn smoking_addendum(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "Smoking of any substance, including by electronic device, is prohibited inside \
         the Premises and within 25 feet of any building opening. Violation of this \
         addendum is a material breach of the Lease.",
    )]
}

fn pool_addendum(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "The Premises include a pool or spa. Tenant accepts sole responsibility for its \
         safe use by occupants and guests, shall keep gates and safety covers secured, \
         and shall promptly report equipment damage to Landlord.",
    )]
}

fn mold_addendum(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "Mold thrives on moisture. Tenant shall ventilate bathrooms and kitchens, \
         promptly report leaks, standing water, and visible mold growth, and shall not \
         obstruct ventilation openings. Landlord will remediate reported conditions as \
         required by law.",
    )]
}

fn bed_bug_addendum(ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![
        tristate_row(
            "A prior bed bug infestation has been reported for the Premises",
            ctx.tristate("bed_bug_history"),
        ),
        Block::text(
            "Tenant represents that Tenant's belongings are free of bed bugs and agrees \
             to report any suspected infestation immediately. Treatment coordination and \
             cost allocation follow applicable law.",
        ),
    ]
}

fn crime_free_addendum(_ctx: &mut RenderContext<'_>) -> Vec<Block> {
    vec![Block::text(
        "Tenant, any member of the household, and any guest shall not engage in criminal \
         activity on or near the Premises, including drug-related criminal activity. A \
         single violation is a material and irreparable breach of the Lease and good \
         cause for termination.",
    )]
}

//! Form-driven assembly of legal and real-estate documents.
//!
//! `formdoc` renders fixed-layout documents (leases, purchase agreements,
//! bills of sale, notices, invoices, appraisal reports) from a flat
//! key-value input map. Fields resolve through a per-form schema with
//! typed defaults, loosely-typed input coerces at the access site,
//! conditional sections are selected and labeled contiguously, and the
//! result is a content tree of styled blocks for an external paginated
//! renderer. Rendering never fails on bad input; it degrades visibly and
//! reports warnings.

pub mod coerce;
pub mod compose;
pub mod derive;
pub mod engine;
pub mod form;
pub mod format;
pub mod schema;
pub mod section;
pub mod types;

pub use coerce::{coerce_bool, coerce_number, coerce_year};
pub use compose::{
    Block, Cell, Column, ColumnKind, Document, Inline, RenderedSection, Tone, comparison_grid,
    inline_text, labeled_amount, record_table, signature_block, tristate_row,
};
pub use derive::{
    Adjustment, Comparable, adjustment_cell, prorate, sum_money, weighted_average, year_predates,
};
pub use engine::{
    FormError, FormWarning, RenderContext, RenderWarning, compute_suggestions, lint_form,
};
pub use form::Form;
pub use format::{
    MISSING_AMOUNT, format_currency, format_percent, format_signed_currency, group_thousands,
};
pub use schema::{FieldKind, FieldSchema, FieldSpec};
pub use section::{Include, LabelKind, SectionDef, SelectedSection, letter_label, select_sections};
pub use types::{InputMap, Record, TriState, Value, resolve};

/// Creates an input map (`HashMap<String, Value>`) from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans,
/// strings, and record lists can be passed directly.
///
/// # Example
///
/// ```
/// use formdoc::fields;
///
/// let input = fields! { "monthly_rent" => 1500, "tenant_name" => "Jane Roe" };
/// assert_eq!(input.len(), 2);
/// assert_eq!(input["monthly_rent"].as_number(), Some(1500));
/// assert_eq!(input["tenant_name"].as_str(), Some("Jane Roe"));
/// ```
#[macro_export]
macro_rules! fields {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

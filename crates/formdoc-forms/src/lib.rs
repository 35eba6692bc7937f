//! Shipped document templates for the formdoc assembly engine.
//!
//! Each template is a [`Form`](formdoc::Form) value: a field schema plus an
//! ordered section list. Templates hold no rendering logic of their own;
//! resolution, coercion, formatting, and labeling all live in the engine, so
//! the modules here read as declarative descriptions of the documents.

use formdoc::{Form, FormError};

pub mod appraisal;
pub mod bill_of_sale;
pub mod invoice;
pub mod lease;
pub mod notice;
pub mod purchase;

/// Registry names of every shipped form, sorted.
pub const FORM_NAMES: &[&str] = &[
    "appraisal_report",
    "bill_of_sale",
    "invoice",
    "notice_to_vacate",
    "purchase_agreement",
    "residential_lease",
];

/// Build a form by its registry name.
pub fn build(name: &str) -> Result<Form, FormError> {
    match name {
        "appraisal_report" => Ok(appraisal::form()),
        "bill_of_sale" => Ok(bill_of_sale::form()),
        "invoice" => Ok(invoice::form()),
        "notice_to_vacate" => Ok(notice::form()),
        "purchase_agreement" => Ok(purchase::form()),
        "residential_lease" => Ok(lease::form()),
        other => Err(FormError::UnknownForm {
            name: other.to_string(),
        }),
    }
}

/// Every shipped form, in registry-name order.
pub fn all() -> Vec<Form> {
    vec![
        appraisal::form(),
        bill_of_sale::form(),
        invoice::form(),
        notice::form(),
        purchase::form(),
        lease::form(),
    ]
}

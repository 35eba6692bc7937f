//! The rendering engine: schema-aware field access, the warning channel,
//! and static analysis of form definitions.
//!
//! The engine never fails mid-document. Input problems degrade to defaults
//! or visible placeholders and surface as [`RenderWarning`]s; hard errors
//! exist only for unusable form definitions, caught before rendering.

mod context;
mod error;
mod lint;

pub use context::RenderContext;
pub use error::{FormError, FormWarning, RenderWarning, compute_suggestions};
pub use lint::lint_form;

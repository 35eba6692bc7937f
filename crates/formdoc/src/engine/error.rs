//! Error and warning types for form validation and rendering.

use std::cmp::Ordering;

use thiserror::Error;

/// A hard error raised at the rendering boundary, before any content is
/// produced.
///
/// Rendering itself never fails: malformed input degrades to defaults and
/// placeholders (see [`RenderWarning`]). These errors cover the cases where
/// the *form definition* is unusable, which is a programming error caught
/// by pre-render validation.
#[derive(Debug, Error)]
pub enum FormError {
    /// No form registered under the requested name.
    #[error("unknown form: '{name}'")]
    UnknownForm { name: String },

    /// A field spec is internally inconsistent (e.g. a default that does
    /// not fit the declared kind).
    #[error("form '{form}': field '{field}': {message}")]
    Schema {
        form: String,
        field: String,
        message: String,
    },

    /// Two sections share a key, which would break cross-references.
    #[error("form '{form}': duplicate section key '{key}'")]
    DuplicateSection { form: String, key: String },
}

/// A non-fatal degradation recorded while rendering one document.
///
/// Warnings never abort the render; the worst outcome is visible
/// placeholder text in the output. They are collected (deduplicated) on the
/// render context so tooling can surface them, and a partially-filled input
/// still produces a complete, if visibly incomplete, document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderWarning {
    /// A numeric field held something unparseable; the default was used.
    #[error("field '{field}' is not numeric: '{raw}' (default used)")]
    MalformedNumber { field: String, raw: String },

    /// A list field held a non-list value; an empty list was used.
    #[error("field '{field}' is not a record list (treated as empty)")]
    NotAList { field: String },

    /// An enumerated field held a value outside its declared set.
    #[error("field '{field}' has unrecognized option '{raw}' (using '{fallback}')")]
    UnrecognizedChoice {
        field: String,
        raw: String,
        fallback: String,
    },

    /// A tri-state disclosure held something other than yes/no/unknown.
    #[error("field '{field}' has unrecognized answer '{raw}' (treated as unknown)")]
    UnrecognizedTriState { field: String, raw: String },

    /// An included list-driven table had no rows; a placeholder block was
    /// emitted instead of an empty table.
    #[error("list field '{field}' is empty; placeholder emitted")]
    EmptyList { field: String },

    /// A body or predicate read a field the schema does not declare.
    #[error("field '{field}' is not declared in the form schema{}", match suggestion { Some(s) => format!(" (did you mean '{s}'?)"), None => String::new() })]
    UndeclaredField {
        field: String,
        suggestion: Option<String>,
    },
}

/// A static lint finding over a form definition (no input involved).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormWarning {
    /// The definition fails hard validation; [`Form::render`] would refuse
    /// it. Reported here so `check` tooling surfaces everything in one
    /// pass.
    ///
    /// [`Form::render`]: crate::Form::render
    #[error("{message}")]
    InvalidDefinition { message: String },

    /// A section predicate references a field missing from the schema.
    #[error("section '{section}' references undeclared field '{field}'{}", match suggestion { Some(s) => format!(" (did you mean '{s}'?)"), None => String::new() })]
    UndeclaredPredicateField {
        section: String,
        field: String,
        suggestion: Option<String>,
    },

    /// An `Equals` predicate tests a value the field's enum set does not
    /// declare, so the section could never be included.
    #[error("section '{section}' matches '{value}', which field '{field}' does not declare")]
    UnknownChoiceValue {
        section: String,
        field: String,
        value: String,
    },

    /// An `Equals` predicate targets a field that is not an enumerated kind.
    #[error("section '{section}' matches against field '{field}', which is not an enumerated field")]
    NonChoiceMatch { section: String, field: String },

    /// A labeled section has no title to attach the label to.
    #[error("section '{section}' carries a label but has no title")]
    UntitledLabeledSection { section: String },
}

/// Rank declared field names by similarity to a misspelled name.
///
/// Returns up to three candidates with a Jaro-Winkler similarity of at
/// least 0.8, best first. Used to build "did you mean" hints in warnings.
pub fn compute_suggestions(input: &str, candidates: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|(score, _)| *score >= 0.8)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

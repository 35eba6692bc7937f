//! Static analysis of form definitions.
//!
//! The linter inspects a form without rendering it: no input map is
//! involved, so every finding is a property of the definition itself and
//! holds for all documents the form could produce. The forms library runs
//! this over every shipped form in its tests.

use crate::engine::error::{FormWarning, compute_suggestions};
use crate::form::Form;
use crate::schema::FieldKind;
use crate::section::{Include, LabelKind};

/// Lint one form definition.
///
/// Findings, in section order:
/// - the definition fails [`Form::validate`] (reported once, first)
/// - a predicate reads a field the schema does not declare
/// - an `Equals` predicate tests values outside the field's declared set,
///   or targets a field that is not enumerated
/// - a numbered or lettered section has no title to carry its label
pub fn lint_form(form: &Form) -> Vec<FormWarning> {
    let mut warnings = Vec::new();

    if let Err(error) = form.validate() {
        warnings.push(FormWarning::InvalidDefinition {
            message: error.to_string(),
        });
    }

    let schema = form.schema();
    let declared: Vec<String> = schema.names().map(str::to_string).collect();

    for section in form.sections() {
        if section.label != LabelKind::None && section.title.is_none() {
            warnings.push(FormWarning::UntitledLabeledSection {
                section: section.key.clone(),
            });
        }

        let Some(field) = section.include.field() else {
            continue;
        };
        match schema.get(field) {
            None => {
                let suggestion = compute_suggestions(field, &declared).into_iter().next();
                warnings.push(FormWarning::UndeclaredPredicateField {
                    section: section.key.clone(),
                    field: field.to_string(),
                    suggestion,
                });
            }
            Some(spec) => {
                if let Include::Equals { any_of, .. } = &section.include {
                    if let FieldKind::Choice { allowed } = &spec.kind {
                        for value in any_of {
                            if !allowed.iter().any(|a| a == value) {
                                warnings.push(FormWarning::UnknownChoiceValue {
                                    section: section.key.clone(),
                                    field: field.to_string(),
                                    value: value.clone(),
                                });
                            }
                        }
                    } else {
                        warnings.push(FormWarning::NonChoiceMatch {
                            section: section.key.clone(),
                            field: field.to_string(),
                        });
                    }
                }
            }
        }
    }

    warnings
}

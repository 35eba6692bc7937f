//! Render context carrying input, schema, and collected warnings.

use std::collections::BTreeMap;
use std::mem;

use crate::coerce::{coerce_bool, coerce_number, coerce_year};
use crate::engine::error::{RenderWarning, compute_suggestions};
use crate::schema::{FieldKind, FieldSchema, FieldSpec};
use crate::types::{InputMap, Record, TriState, Value};

/// Schema-aware access to one document's input, plus the warning channel.
///
/// The context is created per render and dropped with it; nothing is cached
/// across documents. All getters are total: a missing field resolves to the
/// declared default (falling back to the kind's zero value), and malformed
/// input degrades to that same default while recording a [`RenderWarning`].
/// The worst case is a visibly incomplete document, never a failed render.
///
/// Section labels assigned by the selection pass are published here so body
/// text can emit cross-references ("see Addendum F") that match the
/// numbering of the document actually being produced.
pub struct RenderContext<'a> {
    /// The input map for this document generation.
    input: &'a InputMap,
    /// Field contracts declared by the form.
    schema: &'a FieldSchema,
    /// Labels assigned to included sections, keyed by section key.
    labels: BTreeMap<String, String>,
    /// Warnings collected during selection and body rendering.
    warnings: Vec<RenderWarning>,
}

impl<'a> RenderContext<'a> {
    /// Create a context over one input map and the form's schema.
    pub fn new(input: &'a InputMap, schema: &'a FieldSchema) -> Self {
        Self {
            input,
            schema,
            labels: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    // =========================================================================
    // Typed field access
    // =========================================================================

    /// Get a text field, or its default when absent or blank.
    ///
    /// Scalar non-string values render through their display form, so a
    /// numeric unit count supplied as `42` still prints.
    pub fn text(&mut self, name: &str) -> String {
        let spec = self.lookup(name);
        let default = spec
            .and_then(|s| s.default.as_ref())
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        match self.raw(name) {
            Some(Value::List(_)) => default,
            Some(value) => {
                let text = value.to_string();
                if text.trim().is_empty() { default } else { text }
            }
            None => default,
        }
    }

    /// Get a text field, substituting a visible placeholder (e.g.
    /// `"[Tenant Name]"`) when the field is absent, blank, and has no
    /// declared default.
    pub fn text_or(&mut self, name: &str, placeholder: &str) -> String {
        let text = self.text(name);
        if text.trim().is_empty() {
            placeholder.to_string()
        } else {
            text
        }
    }

    /// Get a monetary field as an amount.
    ///
    /// Returns `None` when the field is absent with no declared default,
    /// which [`crate::format_currency`] renders as `"---"`. A present but
    /// unparseable value records a warning and degrades the same way.
    pub fn money(&mut self, name: &str) -> Option<f64> {
        let declared = self.declared_number(name);
        match self.raw(name) {
            Some(value) => match coerce_number(&value) {
                Some(amount) => Some(amount),
                None => {
                    self.warn(RenderWarning::MalformedNumber {
                        field: name.to_string(),
                        raw: value.to_string(),
                    });
                    declared
                }
            },
            None => declared,
        }
    }

    /// Get a plain numeric field (day counts, percentages, quantities).
    ///
    /// Fails closed: absent resolves to the declared default (else `0.0`),
    /// and malformed input records a warning and uses that same default.
    pub fn number(&mut self, name: &str) -> f64 {
        let declared = self.declared_number(name).unwrap_or(0.0);
        match self.raw(name) {
            Some(value) => match coerce_number(&value) {
                Some(n) => n,
                None => {
                    self.warn(RenderWarning::MalformedNumber {
                        field: name.to_string(),
                        raw: value.to_string(),
                    });
                    declared
                }
            },
            None => declared,
        }
    }

    /// Get a boolean flag using the strict coercion rules.
    ///
    /// `Bool(true)` and the exact string `"true"` are set; everything else,
    /// including `"false"`, is unset. Absent resolves to the declared
    /// default (else `false`). Coercion is total, so no warning arises.
    pub fn flag(&mut self, name: &str) -> bool {
        let declared = self
            .lookup(name)
            .and_then(|s| s.default.as_ref())
            .is_some_and(coerce_bool);
        match self.raw(name) {
            Some(value) => coerce_bool(&value),
            None => declared,
        }
    }

    /// Get a tri-state disclosure answer.
    ///
    /// A present but unrecognized value records a warning and resolves to
    /// `Unknown`, never silently to `No`.
    pub fn tristate(&mut self, name: &str) -> TriState {
        let declared = self
            .lookup(name)
            .and_then(|s| s.default.as_ref())
            .map(TriState::from_value)
            .unwrap_or_default();
        match self.raw(name) {
            Some(value) => {
                let state = TriState::from_value(&value);
                if state == TriState::Unknown && !recognizably_unknown(&value) {
                    self.warn(RenderWarning::UnrecognizedTriState {
                        field: name.to_string(),
                        raw: value.to_string(),
                    });
                }
                state
            }
            None => declared,
        }
    }

    /// Get an enumerated field, validated against its declared set.
    ///
    /// A value outside the declared set records a warning and falls back to
    /// the declared default (else the empty string, which matches no
    /// section predicate and so leaves optional content out).
    pub fn choice(&mut self, name: &str) -> String {
        let spec = self.lookup(name);
        let allowed: Vec<String> = match spec.map(|s| &s.kind) {
            Some(FieldKind::Choice { allowed }) => allowed.clone(),
            _ => Vec::new(),
        };
        let fallback = spec
            .and_then(|s| s.default.as_ref())
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        match self.raw(name) {
            Some(Value::String(s)) => {
                let trimmed = s.trim().to_string();
                if allowed.is_empty() || allowed.iter().any(|a| a == &trimmed) {
                    trimmed
                } else {
                    self.warn(RenderWarning::UnrecognizedChoice {
                        field: name.to_string(),
                        raw: trimmed,
                        fallback: fallback.clone(),
                    });
                    fallback
                }
            }
            Some(other) => {
                self.warn(RenderWarning::UnrecognizedChoice {
                    field: name.to_string(),
                    raw: other.to_string(),
                    fallback: fallback.clone(),
                });
                fallback
            }
            None => fallback,
        }
    }

    /// Get a list-valued field's records.
    ///
    /// A present non-list value records a warning and reads as empty. The
    /// empty-list placeholder behavior belongs to table composition, not
    /// resolution, so no warning is recorded here for an empty list.
    pub fn list(&mut self, name: &str) -> Vec<Record> {
        match self.raw(name) {
            Some(Value::List(records)) => records,
            Some(_) => {
                self.warn(RenderWarning::NotAList {
                    field: name.to_string(),
                });
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Get a calendar-year field.
    ///
    /// Returns `None` when absent (years have no meaningful zero); a
    /// malformed value records a warning and reads as absent.
    pub fn year(&mut self, name: &str) -> Option<i64> {
        let declared = self
            .lookup(name)
            .and_then(|s| s.default.as_ref())
            .and_then(coerce_year);
        match self.raw(name) {
            Some(value) => match coerce_year(&value) {
                Some(year) => Some(year),
                None => {
                    self.warn(RenderWarning::MalformedNumber {
                        field: name.to_string(),
                        raw: value.to_string(),
                    });
                    declared
                }
            },
            None => declared,
        }
    }

    /// Raw resolution: the field's value when present and non-null.
    ///
    /// Reading a field the schema does not declare still resolves, but
    /// records a warning with a did-you-mean suggestion so the missing
    /// declaration is caught by `check` tooling.
    pub fn raw(&mut self, name: &str) -> Option<Value> {
        if self.schema.get(name).is_none() {
            let declared = self.schema.names().map(str::to_string).collect::<Vec<_>>();
            let suggestion = compute_suggestions(name, &declared).into_iter().next();
            self.warn(RenderWarning::UndeclaredField {
                field: name.to_string(),
                suggestion,
            });
        }
        self.input.get(name).filter(|v| !v.is_null()).cloned()
    }

    // =========================================================================
    // Section labels
    // =========================================================================

    /// The label assigned to an included section, if any.
    ///
    /// Labels are published by the selection pass before bodies run, so a
    /// body can reference sibling addenda by their displayed letter or
    /// number for this document.
    pub fn label_for(&self, section_key: &str) -> Option<&str> {
        self.labels.get(section_key).map(String::as_str)
    }

    /// Publish an assigned label. Called by the selection pass.
    pub fn assign_label(&mut self, section_key: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(section_key.into(), label.into());
    }

    // =========================================================================
    // Warnings
    // =========================================================================

    /// Record a warning, dropping exact duplicates.
    pub fn warn(&mut self, warning: RenderWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Drain all collected warnings from this context.
    pub fn take_warnings(&mut self) -> Vec<RenderWarning> {
        mem::take(&mut self.warnings)
    }

    /// Warnings collected so far.
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    /// The schema this context resolves against.
    pub fn schema(&self) -> &FieldSchema {
        self.schema
    }

    fn lookup(&self, name: &str) -> Option<&FieldSpec> {
        self.schema.get(name)
    }

    /// The declared default for a numeric field, coerced.
    fn declared_number(&self, name: &str) -> Option<f64> {
        self.lookup(name)
            .and_then(|s| s.default.as_ref())
            .and_then(coerce_number)
    }
}

/// True when an input value is one of the shapes that legitimately mean
/// "unknown" rather than a malformed answer: absent, null, a blank string,
/// or the canonical string itself.
fn recognizably_unknown(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let t = s.trim();
            t.is_empty() || t.eq_ignore_ascii_case("unknown")
        }
        _ => false,
    }
}

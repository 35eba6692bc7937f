//! Per-form field contracts: name, expected kind, declared default.
//!
//! Historically every access site invented its own default and implicit
//! type, which is how the same field drifted between templates. The schema
//! centralizes those contracts per document type and is validated once
//! before rendering; the render context then resolves every access through
//! it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::coerce::{coerce_number, coerce_year};
use crate::engine::FormError;
use crate::types::{TriState, Value};

/// The expected shape of one input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text (names, addresses, descriptions).
    Text,
    /// A plain number: day counts, percentages, quantities.
    Number,
    /// A dollar amount; participates in the zero-as-missing display rule.
    Money,
    /// A boolean toggle, possibly serialized as the string `"true"`.
    Flag,
    /// A yes/no/unknown disclosure answer.
    TriState,
    /// One of a small fixed set of canonical string values.
    Choice { allowed: Vec<String> },
    /// A calendar year, used by date-boundary predicates.
    Year,
    /// A list of records (line items, comparables, inspection types).
    List,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Money => write!(f, "money"),
            FieldKind::Flag => write!(f, "flag"),
            FieldKind::TriState => write!(f, "tri-state"),
            FieldKind::Choice { allowed } => write!(f, "choice({})", allowed.join("|")),
            FieldKind::Year => write!(f, "year"),
            FieldKind::List => write!(f, "list"),
        }
    }
}

/// The contract for one field: name, kind, optional default and label.
///
/// Built with the kind-specific constructors:
///
/// ```
/// use formdoc::FieldSpec;
///
/// let spec = FieldSpec::money("security_deposit")
///     .default(0)
///     .label("Security deposit");
/// assert_eq!(spec.name, "security_deposit");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Used when the field is absent or malformed; `None` falls back to
    /// the kind's zero value at the access site.
    pub default: Option<Value>,
    /// Human-readable label for tooling output.
    pub label: Option<String>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            label: None,
        }
    }

    /// A free-text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// A plain numeric field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// A dollar-amount field.
    pub fn money(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Money)
    }

    /// A boolean toggle field.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    /// A yes/no/unknown disclosure field.
    pub fn tristate(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::TriState)
    }

    /// An enumerated field restricted to `allowed`.
    pub fn choice<S: Into<String>>(
        name: impl Into<String>,
        allowed: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Choice {
                allowed: allowed.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// A calendar-year field.
    pub fn year(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Year)
    }

    /// A list-of-records field.
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::List)
    }

    /// Attach a declared default.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Attach a human-readable label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check that the declared default fits the declared kind.
    fn validate_default(&self) -> Result<(), String> {
        let Some(default) = &self.default else {
            return Ok(());
        };
        let ok = match &self.kind {
            FieldKind::Text => default.as_str().is_some(),
            FieldKind::Number | FieldKind::Money => coerce_number(default).is_some(),
            FieldKind::Flag => default.as_bool().is_some(),
            FieldKind::TriState => {
                default.as_bool().is_some()
                    || TriState::from_value(default) != TriState::Unknown
                    || default
                        .as_str()
                        .is_some_and(|s| s.trim().eq_ignore_ascii_case("unknown"))
            }
            FieldKind::Choice { allowed } => default
                .as_str()
                .is_some_and(|s| allowed.iter().any(|a| a == s)),
            FieldKind::Year => coerce_year(default).is_some(),
            FieldKind::List => default.as_list().is_some(),
        };
        if ok {
            Ok(())
        } else {
            Err(format!(
                "default {default:?} does not fit declared kind {}",
                self.kind
            ))
        }
    }
}

/// The field contracts for one document type.
///
/// Lookup is by field name; iteration is in name order so tooling output
/// and lint reports are deterministic.
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    specs: BTreeMap<String, FieldSpec>,
    /// Names declared more than once, caught at validation time.
    duplicates: Vec<String>,
}

impl FieldSchema {
    /// An empty schema (every access is an undeclared-field warning).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from a spec list, remembering duplicate names for
    /// [`FieldSchema::validate`] to report.
    pub fn from_specs(specs: impl IntoIterator<Item = FieldSpec>) -> Self {
        let mut schema = Self::new();
        for spec in specs {
            if schema.specs.contains_key(&spec.name) {
                schema.duplicates.push(spec.name.clone());
            }
            schema.specs.insert(spec.name.clone(), spec);
        }
        schema
    }

    /// Get the contract for a field.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.specs.get(name)
    }

    /// Declared field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Declared specs in field-name order.
    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.values()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Validate the schema once, before rendering.
    ///
    /// Reports duplicate declarations, enumerated fields with an empty
    /// allowed set, and defaults that contradict their declared kind.
    pub fn validate(&self, form: &str) -> Result<(), FormError> {
        if let Some(duplicate) = self.duplicates.first() {
            return Err(FormError::Schema {
                form: form.to_string(),
                field: duplicate.clone(),
                message: "declared more than once".to_string(),
            });
        }
        for spec in self.specs.values() {
            if let FieldKind::Choice { allowed } = &spec.kind {
                if allowed.is_empty() {
                    return Err(FormError::Schema {
                        form: form.to_string(),
                        field: spec.name.clone(),
                        message: "enumerated field declares no allowed values".to_string(),
                    });
                }
            }
            if let Err(message) = spec.validate_default() {
                return Err(FormError::Schema {
                    form: form.to_string(),
                    field: spec.name.clone(),
                    message,
                });
            }
        }
        Ok(())
    }
}

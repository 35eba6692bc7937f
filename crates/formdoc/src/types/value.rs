use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::coerce::{coerce_bool, coerce_number};

/// A runtime value supplied in the input map of a document generation.
///
/// The `Value` enum provides a dynamic type system for form fields, allowing
/// strings, numbers, booleans, and lists of records to be passed
/// interchangeably. Inputs often arrive as serialized form data, so a field
/// that is logically numeric may hold `Value::String("1500")`; coercion to
/// the expected type happens at the access site, never at construction.
///
/// `Null` exists because serialized form data contains explicit nulls.
/// Resolution treats `Null` exactly like an absent key.
///
/// # Example
///
/// ```
/// use formdoc::Value;
///
/// // Numbers become Value::Number
/// let rent: Value = 1500.into();
///
/// // Strings become Value::String
/// let tenant: Value = "Jane Roe".into();
///
/// assert_eq!(rent.as_float(), Some(1500.0));
/// assert_eq!(tenant.as_str(), Some("Jane Roe"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit null (treated as absent during resolution).
    #[default]
    Null,

    /// A boolean flag.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A list of records (comparable sales, line items, inspection types).
    List(Vec<Record>),
}

impl Value {
    /// Returns true if this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float. Integer values widen losslessly.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a record list, if it is one.
    pub fn as_list(&self) -> Option<&[Record]> {
        match self {
            Value::List(records) => Some(records),
            _ => None,
        }
    }

    /// Returns true for a non-blank string or a non-empty list.
    ///
    /// Every other shape (including `Bool(true)`) is not "non-empty" in the
    /// section-predicate sense; boolean drivers use [`crate::coerce_bool`].
    pub fn is_non_empty(&self) -> bool {
        match self {
            Value::String(s) => !s.trim().is_empty(),
            Value::List(records) => !records.is_empty(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(records) => write!(f, "[{} records]", records.len()),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::List(vec![record])
    }
}

impl From<Vec<Record>> for Value {
    fn from(records: Vec<Record>) -> Self {
        Value::List(records)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// One record inside a list-valued field: a comparable sale, an invoice line
/// item, an inspection type.
///
/// Records are constructed wholesale from the input map before rendering and
/// never mutated afterwards; the engine only reads and aggregates them. The
/// backing map is ordered so iteration and serialization are deterministic.
///
/// # Example
///
/// ```
/// use formdoc::Record;
///
/// let item = Record::new()
///     .with("description", "Security deposit")
///     .with("amount", 1500);
///
/// assert_eq!(item.text("description"), Some("Security deposit"));
/// assert_eq!(item.float("amount"), Some(1500.0));
/// assert_eq!(item.float("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, consuming and returning the record.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Get the raw value for a field, if present and non-null.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    /// Get a field as a string slice.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Get a field as a float, coercing numeric strings.
    ///
    /// Unparseable input yields `None`, never an error.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(coerce_number)
    }

    /// Get a field as a boolean using the strict coercion rules:
    /// `Bool(true)` or the exact string `"true"`.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(coerce_bool)
    }

    /// Display text for a field: any present value rendered as text, an
    /// absent field as the empty string.
    pub fn display(&self, name: &str) -> String {
        self.get(name).map(ToString::to_string).unwrap_or_default()
    }

    /// Get a field as a nested record list.
    pub fn list(&self, name: &str) -> &[Record] {
        self.get(name).and_then(Value::as_list).unwrap_or(&[])
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The full set of named values supplied to generate one document.
///
/// Supplied once per generation and immutable for the duration of rendering.
/// Insertion order is irrelevant; no two fields share a name.
pub type InputMap = HashMap<String, Value>;

/// Look up a named field, returning the caller's default when the field is
/// absent or explicitly null.
///
/// This is the base resolution contract: absence is the expected steady
/// state (most fields are optional), so lookup never fails and has no side
/// effects. Typed, schema-aware access lives on
/// [`RenderContext`](crate::RenderContext).
///
/// # Example
///
/// ```
/// use formdoc::{fields, resolve, Value};
///
/// let input = fields! { "monthly_rent" => 1500 };
/// assert_eq!(resolve(&input, "monthly_rent", Value::Null), Value::Number(1500));
/// assert_eq!(resolve(&input, "late_fee", Value::from(0)), Value::Number(0));
/// ```
pub fn resolve(input: &InputMap, name: &str, default: Value) -> Value {
    match input.get(name) {
        Some(value) if !value.is_null() => value.clone(),
        _ => default,
    }
}

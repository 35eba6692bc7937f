use serde::{Deserialize, Serialize};

use super::value::Value;

/// A disclosure answer restricted to exactly "yes" / "no" / "unknown".
///
/// Disclosure questions on legal forms must never be guessed toward an
/// affirmative or negative answer: any input that is not one of the
/// recognized shapes resolves to `Unknown`, which renders with the
/// "unknown" option checked and both others unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    /// Interpret an input value as a tri-state answer.
    ///
    /// Recognized: the canonical strings `"yes"`, `"no"`, `"unknown"`
    /// (trimmed, ASCII case-insensitive) and literal booleans. Everything
    /// else (empty strings, numbers, `Null`, stray text) is `Unknown`.
    ///
    /// # Example
    ///
    /// ```
    /// use formdoc::{TriState, Value};
    ///
    /// assert_eq!(TriState::from_value(&Value::from("Yes")), TriState::Yes);
    /// assert_eq!(TriState::from_value(&Value::from(false)), TriState::No);
    /// assert_eq!(TriState::from_value(&Value::from("n/a")), TriState::Unknown);
    /// assert_eq!(TriState::from_value(&Value::Null), TriState::Unknown);
    /// ```
    pub fn from_value(value: &Value) -> TriState {
        match value {
            Value::Bool(true) => TriState::Yes,
            Value::Bool(false) => TriState::No,
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "yes" => TriState::Yes,
                "no" => TriState::No,
                _ => TriState::Unknown,
            },
            _ => TriState::Unknown,
        }
    }

    /// The canonical string form: "yes", "no", or "unknown".
    pub fn as_str(self) -> &'static str {
        match self {
            TriState::Yes => "yes",
            TriState::No => "no",
            TriState::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Form-style boolean coercion.
//!
//! HTML forms submit checkboxes and radio buttons as strings, while the JSON
//! surface may carry real booleans. Every input path funnels through
//! [`parse_flag`] so the two surfaces agree on what counts as `true`.

use serde::Deserialize;

/// Parse a submitted flag. `"1"` and `"true"` (any case, surrounding
/// whitespace ignored) are true; everything else is false.
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// A boolean that may arrive either as a real boolean or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(value) => parse_flag(value),
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Flag {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

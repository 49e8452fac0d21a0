//! Operand model shared by encode and decode.

use std::fmt;

/// A value flowing through the codec.
///
/// Canonical values are either native integers or, when a source base is
/// configured, numeral strings. Display values are numeral strings (or
/// whatever a `convert` transform made of one). [`Value::Symbol`] models an
/// opaque token with no integer-coercion capability; feeding one to the codec
/// is the canonical way to provoke an operand error.
///
/// # Example
///
/// ```
/// use rebase_attr::Value;
///
/// assert_eq!(Value::from(255).to_string(), "255");
/// assert_eq!(Value::from("ff").to_string(), "\"ff\"");
/// assert_eq!(Value::symbol("a").to_string(), ":a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A native integer.
    Int(i128),
    /// A numeral string.
    Text(String),
    /// An opaque non-numeric token.
    Symbol(String),
}

impl Value {
    /// Builds an opaque token value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Builds a numeral-string value.
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, ":{s}"),
        }
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n as i128)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(n as i128)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i128)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

//! User-supplied conversion steps for encoded numeral strings.

use std::fmt;
use std::sync::Arc;

/// Boxed closure form of a transform.
pub type TransformFn = Arc<dyn Fn(String) -> String + Send + Sync>;

/// A forward (`convert`) or reverse (`deconvert`) conversion step.
///
/// The named variants are zero-argument operations invoked on the numeral
/// string itself; [`Transform::Custom`] is the single-argument callable form.
/// `apply` consumes and returns an owned string, so no caller-held value is
/// ever mutated in place.
///
/// # Example
///
/// ```
/// use rebase_attr::Transform;
///
/// assert_eq!(Transform::Uppercase.apply("1ce".to_string()), "1CE");
/// assert_eq!(Transform::Chop.apply("1101".to_string()), "110");
/// assert_eq!(Transform::Append("1".to_string()).apply("110".to_string()), "1101");
///
/// let reversed = Transform::custom(|s| s.chars().rev().collect());
/// assert_eq!(reversed.apply("abc".to_string()), "cba");
/// ```
#[derive(Clone)]
pub enum Transform {
    /// Uppercase the whole string.
    Uppercase,
    /// Lowercase the whole string.
    Lowercase,
    /// Drop the final character.
    Chop,
    /// Append a fixed suffix.
    Append(String),
    /// Arbitrary user closure.
    Custom(TransformFn),
}

impl Transform {
    /// Wraps a closure as a transform.
    pub fn custom(f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        Transform::Custom(Arc::new(f))
    }

    /// Runs the transform on an owned string.
    pub fn apply(&self, input: String) -> String {
        match self {
            Transform::Uppercase => input.to_uppercase(),
            Transform::Lowercase => input.to_lowercase(),
            Transform::Chop => {
                let mut out = input;
                out.pop();
                out
            }
            Transform::Append(suffix) => input + suffix,
            Transform::Custom(f) => f(input),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Uppercase => f.write_str("Uppercase"),
            Transform::Lowercase => f.write_str("Lowercase"),
            Transform::Chop => f.write_str("Chop"),
            Transform::Append(suffix) => f.debug_tuple("Append").field(suffix).finish(),
            Transform::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

//! The composition root: numeral conversion, readable substitution and
//! user transforms wired into one encode and one decode operation.

use std::sync::Arc;

use crate::config::RebaseConfig;
use crate::error::OperandError;
use crate::numeral;
use crate::readable;
use crate::value::Value;

/// Bidirectional codec for one attribute configuration.
///
/// `encode` and `decode` are pure functions of the immutable configuration
/// and a single input; the codec holds no other state. Cloning shares the
/// configuration, so clones attached to different bindings, instances or
/// subtypes behave identically.
///
/// # Example
///
/// ```
/// use rebase_attr::{AttributeCodec, RebaseOptions, Value};
///
/// let codec = AttributeCodec::new(RebaseOptions::new().to(16).build().unwrap());
/// let display = codec.encode(Some(Value::Int(31756185168571))).unwrap();
/// assert_eq!(display, Some(Value::text("1ce1d022eabb")));
/// assert_eq!(codec.decode(display).unwrap(), Some(Value::Int(31756185168571)));
/// assert_eq!(codec.encode(None).unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct AttributeCodec {
    config: Arc<RebaseConfig>,
}

impl AttributeCodec {
    pub fn new(config: RebaseConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    pub fn config(&self) -> &RebaseConfig {
        &self.config
    }

    /// Encodes a canonical value into its display form.
    ///
    /// `None` passes through untouched. The canonical value is coerced to an
    /// integer (native, or a numeral string in the source base, default 10),
    /// rendered in the target base, readable-substituted when configured and
    /// finally run through `convert`.
    pub fn encode(&self, decoded: Option<Value>) -> Result<Option<Value>, OperandError> {
        let Some(decoded) = decoded else {
            return Ok(None);
        };
        let source = self.config.from().unwrap_or(10);
        let n = match &decoded {
            Value::Int(n) => *n,
            Value::Text(s) => numeral::from_base(s, source)
                .ok_or_else(|| OperandError::Unencodable(decoded.to_string()))?,
            Value::Symbol(_) => return Err(OperandError::Unencodable(decoded.to_string())),
        };
        let mut display = numeral::to_base(n, self.config.to());
        if self.config.readable() {
            display = readable::to_readable(&display);
        }
        if let Some(convert) = self.config.convert() {
            display = convert.apply(display);
        }
        Ok(Some(Value::Text(display)))
    }

    /// Decodes a display value back into canonical form.
    ///
    /// `None` passes through untouched. The input is run through `deconvert`
    /// when configured, readable-reversed when configured, parsed in the
    /// target base and, when a source base is configured, re-rendered as a
    /// numeral string in that base (otherwise returned as a native integer).
    ///
    /// An integer input is coerced through its decimal rendering before the
    /// pipeline runs, so integer and string write input behave consistently.
    pub fn decode(&self, encoded: Option<Value>) -> Result<Option<Value>, OperandError> {
        let Some(encoded) = encoded else {
            return Ok(None);
        };
        let text = match encoded {
            Value::Int(n) => n.to_string(),
            Value::Text(s) => s,
            symbol @ Value::Symbol(_) => {
                return Err(OperandError::Undecodable(symbol.to_string()));
            }
        };
        let text = match self.config.deconvert() {
            Some(deconvert) => deconvert.apply(text),
            None => text,
        };
        let digits = if self.config.readable() {
            readable::from_readable(&text)
        } else {
            text.clone()
        };
        let n = numeral::from_base(&digits, self.config.to())
            .ok_or_else(|| OperandError::Undecodable(Value::Text(text).to_string()))?;
        Ok(Some(match self.config.from() {
            Some(from) => Value::Text(numeral::to_base(n, from)),
            None => Value::Int(n),
        }))
    }
}

//! Error types for attribute registration and codec operations.

use thiserror::Error;

/// Errors raised while validating rebase options at registration time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No target base was supplied.
    #[error("rebase requires a `to` base")]
    MissingTarget,
    /// A positional closure was supplied where the `convert` option was
    /// expected.
    #[error("rebase does not accept a bare closure, did you mean `convert`?")]
    BareClosure,
    /// The target base is outside 2..=36.
    #[error("target base must be between 2 and 36, {0} given")]
    TargetOutOfRange(u32),
    /// The source base is outside 2..=36.
    #[error("source base must be between 2 and 36, {0} given")]
    SourceOutOfRange(u32),
    /// `readable` was requested with a target base whose digit set overlaps
    /// the readable glyphs.
    #[error("`readable` is not allowed with bases higher than 32, {0} given")]
    ReadableBaseTooHigh(u32),
}

/// Errors raised when a value fed to the codec exposes no integer coercion.
///
/// The message carries the offending value's display form. `None` inputs
/// never reach these checks; they pass through as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperandError {
    /// The value handed to `encode` is neither an integer nor a numeral
    /// string in the source base.
    #[error("decoded value cannot be coerced to an integer, {0} given")]
    Unencodable(String),
    /// The value handed to `decode` (after any deconvert step) is not a
    /// numeral string in the target base.
    #[error("encoded value cannot be coerced to an integer, {0} given")]
    Undecodable(String),
}

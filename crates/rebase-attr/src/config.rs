//! Per-attribute codec configuration.

use crate::error::ConfigError;
use crate::transform::Transform;

/// Mutable option set for one rebased attribute.
///
/// Mirrors the option-hash registration surface: `to` is required, everything
/// else optional. [`RebaseOptions::bare`] models the positional-closure form
/// of that surface and is always rejected at build time in favour of
/// `convert`.
///
/// # Example
///
/// ```
/// use rebase_attr::RebaseOptions;
///
/// let config = RebaseOptions::new().to(16).readable(true).build().unwrap();
/// assert_eq!(config.to(), 16);
/// assert!(config.readable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RebaseOptions {
    to: Option<u32>,
    from: Option<u32>,
    convert: Option<Transform>,
    deconvert: Option<Transform>,
    readable: bool,
    bare: Option<Transform>,
}

impl RebaseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target base for the display form, 2..=36. Required.
    pub fn to(mut self, base: u32) -> Self {
        self.to = Some(base);
        self
    }

    /// Source base: the canonical form is itself a numeral string in this
    /// base rather than a native integer.
    pub fn from(mut self, base: u32) -> Self {
        self.from = Some(base);
        self
    }

    /// Final forward step applied to the display numeral string.
    pub fn convert(mut self, transform: Transform) -> Self {
        self.convert = Some(transform);
        self
    }

    /// First reverse step applied to raw write input.
    pub fn deconvert(mut self, transform: Transform) -> Self {
        self.deconvert = Some(transform);
        self
    }

    /// Enable readable glyph substitution. Only valid for bases up to 32.
    pub fn readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Positional-closure registration form. Always a [`ConfigError`] at
    /// build time; kept so the ambiguity is rejected explicitly instead of
    /// silently treated as `convert`.
    pub fn bare(mut self, f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.bare = Some(Transform::custom(f));
        self
    }

    /// Validates the options into an immutable [`RebaseConfig`].
    pub fn build(self) -> Result<RebaseConfig, ConfigError> {
        let to = self.to.ok_or(ConfigError::MissingTarget)?;
        if self.bare.is_some() {
            return Err(ConfigError::BareClosure);
        }
        if !(2..=36).contains(&to) {
            return Err(ConfigError::TargetOutOfRange(to));
        }
        if let Some(from) = self.from {
            if !(2..=36).contains(&from) {
                return Err(ConfigError::SourceOutOfRange(from));
            }
        }
        if self.readable && to > 32 {
            return Err(ConfigError::ReadableBaseTooHigh(to));
        }
        Ok(RebaseConfig {
            to,
            from: self.from,
            convert: self.convert,
            deconvert: self.deconvert,
            readable: self.readable,
        })
    }
}

/// Validated, immutable configuration for one rebased attribute.
///
/// Constructed once at registration time and shared read-only by every
/// encode/decode call for that attribute.
#[derive(Debug, Clone)]
pub struct RebaseConfig {
    to: u32,
    from: Option<u32>,
    convert: Option<Transform>,
    deconvert: Option<Transform>,
    readable: bool,
}

impl RebaseConfig {
    pub fn to(&self) -> u32 {
        self.to
    }

    pub fn from(&self) -> Option<u32> {
        self.from
    }

    pub fn convert(&self) -> Option<&Transform> {
        self.convert.as_ref()
    }

    pub fn deconvert(&self) -> Option<&Transform> {
        self.deconvert.as_ref()
    }

    pub fn readable(&self) -> bool {
        self.readable
    }
}

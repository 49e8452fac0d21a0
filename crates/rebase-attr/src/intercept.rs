//! Attribute interception: binding a codec to a named attribute's
//! reader/writer pair.
//!
//! Dynamic accessor override is expressed as an explicit closure interface
//! resolved once at registration time. A host type `H` exposes its raw
//! storage (or pre-existing accessors) as a [`RawAccessors`] pair; the
//! [`AccessorChain`] picks which pair backs the binding; the resulting
//! [`BoundAttribute`] routes every read through `encode` and every write
//! through `decode`, while the `without_rebase` operations bypass the codec.

use std::fmt;
use std::sync::Arc;

use crate::codec::AttributeCodec;
use crate::config::RebaseOptions;
use crate::error::{ConfigError, OperandError};
use crate::value::Value;

/// A raw reader/writer pair over a host type.
pub struct RawAccessors<H> {
    read: Arc<dyn Fn(&H) -> Option<Value> + Send + Sync>,
    write: Arc<dyn Fn(&mut H, Option<Value>) + Send + Sync>,
}

impl<H> RawAccessors<H> {
    pub fn new(
        read: impl Fn(&H) -> Option<Value> + Send + Sync + 'static,
        write: impl Fn(&mut H, Option<Value>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            read: Arc::new(read),
            write: Arc::new(write),
        }
    }

    /// Accessors over nothing: reads yield `None`, writes are dropped. Used
    /// when no accessor exists anywhere up the chain.
    pub fn noop() -> Self {
        Self::new(|_| None, |_, _| {})
    }

    pub fn read(&self, host: &H) -> Option<Value> {
        (self.read)(host)
    }

    pub fn write(&self, host: &mut H, value: Option<Value>) {
        (self.write)(host, value)
    }
}

impl<H> Clone for RawAccessors<H> {
    fn clone(&self) -> Self {
        Self {
            read: Arc::clone(&self.read),
            write: Arc::clone(&self.write),
        }
    }
}

impl<H> fmt::Debug for RawAccessors<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawAccessors(..)")
    }
}

/// Accessor resolution for one attribute, in precedence order: a reader and
/// writer defined before the codec was attached, then inherited behavior,
/// then direct storage access.
///
/// Resolution happens once at binding time. An empty chain is not an error;
/// it resolves to [`RawAccessors::noop`].
pub struct AccessorChain<H> {
    pub prior: Option<RawAccessors<H>>,
    pub inherited: Option<RawAccessors<H>>,
    pub storage: Option<RawAccessors<H>>,
}

impl<H> AccessorChain<H> {
    pub fn new() -> Self {
        Self {
            prior: None,
            inherited: None,
            storage: None,
        }
    }

    /// Chain to an accessor pair that existed before this codec attached.
    pub fn prior(mut self, accessors: RawAccessors<H>) -> Self {
        self.prior = Some(accessors);
        self
    }

    /// Fall back to inherited accessor behavior.
    pub fn inherited(mut self, accessors: RawAccessors<H>) -> Self {
        self.inherited = Some(accessors);
        self
    }

    /// Fall back to direct attribute storage.
    pub fn storage(mut self, accessors: RawAccessors<H>) -> Self {
        self.storage = Some(accessors);
        self
    }

    fn resolve(self) -> RawAccessors<H> {
        self.prior
            .or(self.inherited)
            .or(self.storage)
            .unwrap_or_else(RawAccessors::noop)
    }
}

impl<H> Default for AccessorChain<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for AccessorChain<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorChain")
            .field("prior", &self.prior.is_some())
            .field("inherited", &self.inherited.is_some())
            .field("storage", &self.storage.is_some())
            .finish()
    }
}

/// A codec bound to a named attribute of a host type.
///
/// Binding is a one-time step; afterwards every operation is a stateless
/// function application over the host and the shared configuration.
///
/// # Example
///
/// ```
/// use rebase_attr::{rebase_attr, AccessorChain, RawAccessors, RebaseOptions, Value};
///
/// struct Account {
///     code: Option<Value>,
/// }
///
/// let binding = rebase_attr(
///     "code",
///     RebaseOptions::new().to(16).readable(true),
///     AccessorChain::new().storage(RawAccessors::new(
///         |account: &Account| account.code.clone(),
///         |account, value| account.code = value,
///     )),
/// )
/// .unwrap();
///
/// let mut account = Account { code: Some(Value::Int(31756185168571)) };
/// assert_eq!(binding.get(&account).unwrap(), Some(Value::text("yceydx22eabb")));
///
/// binding.set(&mut account, Some(Value::text("yceydx22eabb"))).unwrap();
/// assert_eq!(binding.get_without_rebase(&account), Some(Value::Int(31756185168571)));
/// ```
#[derive(Debug)]
pub struct BoundAttribute<H> {
    name: String,
    codec: AttributeCodec,
    raw: RawAccessors<H>,
}

impl<H> BoundAttribute<H> {
    /// Binds a codec to an attribute, resolving the accessor chain once.
    pub fn bind(name: impl Into<String>, codec: AttributeCodec, chain: AccessorChain<H>) -> Self {
        Self {
            name: name.into(),
            codec,
            raw: chain.resolve(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codec(&self) -> &AttributeCodec {
        &self.codec
    }

    /// The reader: encodes the raw value.
    pub fn get(&self, host: &H) -> Result<Option<Value>, OperandError> {
        self.codec.encode(self.raw.read(host))
    }

    /// The writer: decodes the input, then forwards the canonical value to
    /// the underlying accessor.
    pub fn set(&self, host: &mut H, value: Option<Value>) -> Result<(), OperandError> {
        let canonical = self.codec.decode(value)?;
        self.raw.write(host, canonical);
        Ok(())
    }

    /// Raw pre-codec read, bypassing `encode`.
    pub fn get_without_rebase(&self, host: &H) -> Option<Value> {
        self.raw.read(host)
    }

    /// Raw pre-codec write, bypassing `decode`.
    pub fn set_without_rebase(&self, host: &mut H, value: Option<Value>) {
        self.raw.write(host, value);
    }

    /// Instance-free forward transform, same as the codec's.
    pub fn encode(&self, decoded: Option<Value>) -> Result<Option<Value>, OperandError> {
        self.codec.encode(decoded)
    }

    /// Instance-free reverse transform, same as the codec's.
    pub fn decode(&self, encoded: Option<Value>) -> Result<Option<Value>, OperandError> {
        self.codec.decode(encoded)
    }
}

/// Registers a rebased attribute: validates the options, builds the codec and
/// binds it over the accessor chain.
///
/// One call per attribute. To share one configuration across several
/// attributes, clone the built codec and call [`BoundAttribute::bind`]
/// directly; clones share the underlying configuration.
pub fn rebase_attr<H>(
    name: impl Into<String>,
    options: RebaseOptions,
    chain: AccessorChain<H>,
) -> Result<BoundAttribute<H>, ConfigError> {
    let codec = AttributeCodec::new(options.build()?);
    Ok(BoundAttribute::bind(name, codec, chain))
}

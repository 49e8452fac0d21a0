//! Bidirectional numeral-base codec for object attributes.
//!
//! A rebased attribute stores its value in one representation (the canonical
//! form: a native integer, or a numeral string in a configured source base)
//! and exposes it in another (the display form: a numeral string in a target
//! base, optionally readable-substituted and post-processed). Reads encode,
//! writes decode, and a `without_rebase` accessor pair keeps the raw value
//! reachable.
//!
//! # Example
//!
//! ```
//! use rebase_attr::{AttributeCodec, RebaseOptions, Transform, Value};
//!
//! let codec = AttributeCodec::new(
//!     RebaseOptions::new()
//!         .to(16)
//!         .convert(Transform::Uppercase)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let display = codec.encode(Some(Value::Int(31756185168571))).unwrap();
//! assert_eq!(display, Some(Value::text("1CE1D022EABB")));
//! assert_eq!(codec.decode(display).unwrap(), Some(Value::Int(31756185168571)));
//! ```
//!
//! Binding a codec to a host type's attribute goes through [`rebase_attr`]
//! with an [`AccessorChain`] describing how to reach the raw storage; see
//! [`BoundAttribute`].

pub mod codec;
pub mod config;
pub mod error;
pub mod intercept;
pub mod numeral;
pub mod readable;
pub mod transform;
pub mod value;

pub use codec::AttributeCodec;
pub use config::{RebaseConfig, RebaseOptions};
pub use error::{ConfigError, OperandError};
pub use intercept::{rebase_attr, AccessorChain, BoundAttribute, RawAccessors};
pub use readable::READABLE_MAPPING;
pub use transform::{Transform, TransformFn};
pub use value::Value;

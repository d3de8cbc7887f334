//! Capability traits for pluggable codecs.
//!
//! A codec is the one thing this crate does not implement itself: the
//! mapping between raw bytes and structured values.  Callers inject a
//! codec into the generic helpers in [`crate::load`], [`crate::save`] and
//! [`crate::resolve`]; the helpers never inspect the bytes themselves.
//!
//! Both traits operate on in-memory byte slices rather than streams.  The
//! generic helpers own the buffering (read the whole input, then decode),
//! which keeps codec implementations trivial — most text formats need the
//! full document in memory anyway — and keeps I/O failures separate from
//! decode failures in the error taxonomy.
//!
//! # Testability
//!
//! Because the traits take `&self`, a test double can carry interior
//! state — the core test suite uses a counting wrapper to assert that a
//! decoder runs exactly once on success and never when resolution fails.

use serde::{de::DeserializeOwned, Serialize};

/// Type-erased error form stored by [`crate::LoadError`] and
/// [`crate::SaveError`].
///
/// The generic helpers cannot name the injected codec's error type in
/// their own error enums, so they box it.  The concrete type is still
/// reachable through `Error::source()` / downcasting.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Capability to decode structured values from raw bytes.
///
/// Implementations define what "structured" means: the TOML codec in
/// `structio-toml` parses TOML text, a JSON codec parses JSON, and so on.
/// The destination shape is chosen by the caller through `T`.
pub trait Decode {
    /// The codec's own error type for malformed or mismatching input.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decodes one value of type `T` from `bytes`.
    ///
    /// # Errors
    ///
    /// Returns the codec's error when the bytes are not a valid document
    /// of the codec's format, or when the document does not match the
    /// shape of `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}

/// Capability to encode structured values into raw bytes.
pub trait Encode {
    /// The codec's own error type for unencodable values.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encodes `value` into a fresh byte vector.
    ///
    /// # Errors
    ///
    /// Returns the codec's error when the value cannot be represented in
    /// the codec's format (e.g. a map with non-string keys in TOML).
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error>;
}

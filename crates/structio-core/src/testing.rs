//! Shared test doubles for the core test suite.
//!
//! The generic layer must not care which format is plugged in, so the
//! tests deliberately use a JSON codec rather than TOML — anything
//! TOML-specific leaking into the core would fail here.

use std::cell::Cell;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::{Decode, Encode};

/// Minimal structured value used across the test suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub port: u16,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// JSON codec standing in for "any format that is not TOML".
pub struct JsonCodec;

impl Decode for JsonCodec {
    type Error = serde_json::Error;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        serde_json::from_slice(bytes)
    }
}

impl Encode for JsonCodec {
    type Error = serde_json::Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(value)
    }
}

/// Wraps another decoder and counts how often it runs, so tests can
/// assert the decode step happens exactly once on success and never when
/// resolution fails.
pub struct CountingCodec<C> {
    inner: C,
    calls: Cell<u32>,
}

impl<C> CountingCodec<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of times `decode` has run.
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl<C: Decode> Decode for CountingCodec<C> {
    type Error = C::Error;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.decode(bytes)
    }
}

/// Encoder that refuses every value, for exercising the encode error path.
pub struct FailingEncode;

impl Encode for FailingEncode {
    type Error = std::io::Error;

    fn encode<T: Serialize>(&self, _value: &T) -> Result<Vec<u8>, Self::Error> {
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "encode refused",
        ))
    }
}

/// Creates a unique, empty temp directory for one test.
///
/// Callers clean up with `remove_dir_all` at the end; a leaked directory
/// on panic is harmless under the OS temp root.
pub fn unique_temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("structio_test_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("temp dir must be creatable");
    dir
}

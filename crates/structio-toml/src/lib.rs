//! # structio-toml
//!
//! TOML adapter for the structio load/save layer.
//!
//! The entire job of this crate is adaptation: [`TomlCodec`] wraps the
//! external [`toml`] crate behind the [`Decode`]/[`Encode`] capability
//! traits from `structio-core`, and the free functions below fix the codec
//! to TOML and forward to the corresponding generic helper.  The TOML
//! grammar itself is never touched here.
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Service {
//!     name: String,
//!     port: u16,
//! }
//!
//! let dir = std::env::temp_dir().join("structio-toml-doc");
//! let value = Service { name: "svc".to_string(), port: 8080 };
//! structio_toml::save(&value, dir.join("config.toml")).unwrap();
//!
//! // Search-path loading: the first directory containing the file wins.
//! let restored: Service = structio_toml::open_from_paths("config.toml", &[&dir]).unwrap();
//! assert_eq!(restored, value);
//! # std::fs::remove_dir_all(&dir).ok();
//! ```

use std::io::{Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use structio_core::{Decode, Encode, LoadError, SaveError};

/// The TOML rendition of the codec capability.
///
/// Decoding parses a UTF-8 TOML document; encoding produces pretty
/// (multi-line, indented) TOML, which is the right default for files a
/// human may open in an editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlCodec;

impl Decode for TomlCodec {
    type Error = toml::de::Error;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        // TOML is defined over UTF-8 text, so non-UTF-8 input is a decode
        // error of this codec, not an I/O error.
        let text = std::str::from_utf8(bytes).map_err(|e| {
            <toml::de::Error as serde::de::Error>::custom(format!("input is not valid UTF-8: {e}"))
        })?;
        toml::from_str(text)
    }
}

impl Encode for TomlCodec {
    type Error = toml::ser::Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        toml::to_string_pretty(value).map(String::into_bytes)
    }
}

// ── Forwarding functions ──────────────────────────────────────────────────────

/// Reads a value of type `T` from the TOML file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] when the file does not exist,
/// [`LoadError::Open`] for other filesystem failures, and
/// [`LoadError::Decode`] when the contents are not valid TOML for `T`.
pub fn open<T, P>(path: P) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    structio_core::load(path, &TomlCodec)
}

/// Reads a value of type `T` from the TOML file named `file_name`,
/// looking on `search_paths` for the file.
///
/// The earliest-listed directory containing the file wins; later
/// directories are never consulted once a match is found.
///
/// # Errors
///
/// See [`structio_core::load_from_paths`] for the error taxonomy.
pub fn open_from_paths<T, P>(file_name: &str, search_paths: &[P]) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    structio_core::load_from_paths(file_name, search_paths, &TomlCodec)
}

/// Reads a value of type `T` from `reader` using TOML encoding.
pub fn read<T, R>(reader: R) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    structio_core::read(reader, &TomlCodec)
}

/// Reads a value of type `T` from `bytes` using TOML encoding.
pub fn read_bytes<T>(bytes: &[u8]) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    structio_core::read_bytes(bytes, &TomlCodec)
}

/// Reads a value of type `T` from a TOML string.
pub fn read_str<T>(text: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    structio_core::read_bytes(text.as_bytes(), &TomlCodec)
}

/// Writes `value` to the file at `path` using TOML encoding, creating
/// missing parent directories first.
///
/// # Errors
///
/// See [`structio_core::save`] for the error taxonomy.
pub fn save<T, P>(value: &T, path: P) -> Result<(), SaveError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    structio_core::save(value, path, &TomlCodec)
}

/// Writes `value` to `writer` using TOML encoding.
pub fn write<T, W>(value: &T, writer: W) -> Result<(), SaveError>
where
    T: Serialize,
    W: Write,
{
    structio_core::write(value, writer, &TomlCodec)
}

/// Encodes `value` as TOML, returning the bytes of the encoding.
pub fn write_bytes<T>(value: &T) -> Result<Vec<u8>, SaveError>
where
    T: Serialize,
{
    structio_core::write_bytes(value, &TomlCodec)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Generic save helpers: a named file, any writer, or a byte vector.
//!
//! Mirrors [`crate::load`] on the encode side.  The injected [`Encode`]
//! codec runs exactly once; filesystem failures and encode failures are
//! kept apart in the [`SaveError`] taxonomy so callers can tell a full
//! disk from an unencodable value.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::codec::{BoxError, Encode};

/// Error type for save operations.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The value could not be represented by the codec.
    #[error("failed to encode structured output: {0}")]
    Encode(#[source] BoxError),

    /// A parent directory for the target file could not be created.
    #[error("failed to create directory {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoded bytes could not be written to the target file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoded bytes could not be written to the output stream.
    #[error("failed to write output stream: {0}")]
    Stream(#[source] std::io::Error),
}

/// Encodes `value` and persists it to the file at `path`.
///
/// Missing parent directories are created first, so saving to a fresh
/// config location works on first run.
///
/// # Errors
///
/// Returns [`SaveError::Encode`] when the codec rejects the value, and
/// [`SaveError::Create`] / [`SaveError::Write`] for filesystem failures.
pub fn save<T, C, P>(value: &T, path: P, codec: &C) -> Result<(), SaveError>
where
    T: Serialize,
    C: Encode,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = write_bytes(value, codec)?;

    // Ensure the directory exists before writing.
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|source| SaveError::Create {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, bytes).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Encodes `value` and writes the bytes to `writer`.
///
/// # Errors
///
/// Returns [`SaveError::Encode`] when the codec rejects the value and
/// [`SaveError::Stream`] when the writer fails.
pub fn write<T, C, W>(value: &T, mut writer: W, codec: &C) -> Result<(), SaveError>
where
    T: Serialize,
    C: Encode,
    W: Write,
{
    let bytes = write_bytes(value, codec)?;
    writer.write_all(&bytes).map_err(SaveError::Stream)
}

/// Encodes `value` and returns the bytes of the encoding.
///
/// # Errors
///
/// Returns [`SaveError::Encode`] when the codec rejects the value.
pub fn write_bytes<T, C>(value: &T, codec: &C) -> Result<Vec<u8>, SaveError>
where
    T: Serialize,
    C: Encode,
{
    codec
        .encode(value)
        .map_err(|source| SaveError::Encode(Box::new(source)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Generic load helpers: one named file, any reader, or a byte slice.
//!
//! Each helper buffers its input and runs the injected [`Decode`] codec
//! exactly once.  On any failure the caller receives a [`LoadError`]
//! naming the stage that failed; the decoded value is only ever produced
//! whole, so a failed call leaves nothing half-populated behind.

use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::codec::{BoxError, Decode};

/// Error type for load operations.
///
/// The variants are deliberately distinguishable by kind: a missing file
/// is often recoverable (fall back to defaults), while a file that exists
/// but cannot be decoded usually is not.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The requested file does not exist — either the named file itself,
    /// or no directory on the search path contains it.
    #[error("no file named {0:?} found")]
    NotFound(String),

    /// The file exists but could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A byte stream could not be read to the end.
    #[error("failed to read input stream: {0}")]
    Read(#[source] std::io::Error),

    /// The input was read but the codec rejected its contents.
    #[error("failed to decode structured input: {0}")]
    Decode(#[source] BoxError),
}

/// Opens the file at `path` and decodes one value of type `T` from it.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] when the file does not exist,
/// [`LoadError::Open`] for any other filesystem failure, and
/// [`LoadError::Decode`] when the codec rejects the contents.
///
/// # Examples
///
/// Loading a missing file reports the distinct not-found kind:
///
/// ```rust
/// use structio_core::LoadError;
///
/// struct NullCodec;
/// impl structio_core::Decode for NullCodec {
///     type Error = std::io::Error;
///     fn decode<T: serde::de::DeserializeOwned>(&self, _: &[u8]) -> Result<T, Self::Error> {
///         unreachable!("nothing to decode")
///     }
/// }
///
/// let result: Result<(), _> = structio_core::load("/no/such/file.toml", &NullCodec);
/// assert!(matches!(result, Err(LoadError::NotFound(_))));
/// ```
pub fn load<T, C, P>(path: P, codec: &C) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    C: Decode,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.display().to_string()));
        }
        Err(source) => {
            return Err(LoadError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    read_bytes(&bytes, codec)
}

/// Reads `reader` to the end and decodes one value of type `T`.
///
/// # Errors
///
/// Returns [`LoadError::Read`] when the stream cannot be read and
/// [`LoadError::Decode`] when the codec rejects the contents.
pub fn read<T, C, R>(mut reader: R, codec: &C) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    C: Decode,
    R: Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(LoadError::Read)?;
    read_bytes(&bytes, codec)
}

/// Decodes one value of type `T` from an in-memory byte slice.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] when the codec rejects the bytes.
pub fn read_bytes<T, C>(bytes: &[u8], codec: &C) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    C: Decode,
{
    codec
        .decode(bytes)
        .map_err(|source| LoadError::Decode(Box::new(source)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Search-path resolution: find a logical file name on an ordered list of
//! candidate directories, then decode the first match.
//!
//! Resolution is *first-match-wins*: the earliest-listed directory
//! containing the file is used, and later directories are never consulted
//! once a match is found — even if they also contain the file.  This is
//! the conventional priority rule for configuration lookup ("user dir
//! before system dir").
//!
//! The search itself is a pure function over the ordered sequence
//! ([`find_on_paths`] / [`find_first_on_paths`]); [`load_from_paths`]
//! layers the open-and-decode pipeline on top and maps each stage to its
//! own [`LoadError`] kind.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::codec::Decode;
use crate::load::LoadError;

/// Returns every directory-joined candidate that exists as a file, in
/// search-path order.
///
/// Directories that do not exist, or where the entry with the requested
/// name is itself a directory, are skipped.
pub fn find_on_paths<P>(search_paths: &[P], file_name: &str) -> Vec<PathBuf>
where
    P: AsRef<Path>,
{
    search_paths
        .iter()
        .map(|dir| dir.as_ref().join(file_name))
        .filter(|candidate| candidate.is_file())
        .collect()
}

/// Returns the first directory-joined path containing `file_name`, or
/// `None` when no candidate directory contains it.
///
/// Equivalent to the head of [`find_on_paths`], but stops probing at the
/// first hit.
pub fn find_first_on_paths<P>(search_paths: &[P], file_name: &str) -> Option<PathBuf>
where
    P: AsRef<Path>,
{
    search_paths
        .iter()
        .map(|dir| dir.as_ref().join(file_name))
        .find(|candidate| candidate.is_file())
}

/// Resolves `file_name` against `search_paths` and decodes the first
/// match into a value of type `T`.
///
/// The pipeline is linear: search, open, decode.  There are no retries
/// and no fallback to later candidates — a directory that wins the search
/// but holds an unreadable or undecodable file fails the whole call, so
/// a broken high-priority file is surfaced instead of silently shadowed.
///
/// # Errors
///
/// - [`LoadError::NotFound`] — no candidate directory contains the file;
///   nothing was opened and the codec was never invoked.
/// - [`LoadError::Open`] — a match was found but could not be read.  This
///   includes the race where the file disappears between the existence
///   check and the open; resolution is not restarted.
/// - [`LoadError::Decode`] — the codec rejected the file's contents.  The
///   underlying codec error stays reachable through `source()`.
pub fn load_from_paths<T, C, P>(
    file_name: &str,
    search_paths: &[P],
    codec: &C,
) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    C: Decode,
    P: AsRef<Path>,
{
    let Some(path) = find_first_on_paths(search_paths, file_name) else {
        debug!(
            "no file named {:?} on {} search path(s)",
            file_name,
            search_paths.len()
        );
        return Err(LoadError::NotFound(file_name.to_string()));
    };
    debug!("resolved {:?} to {}", file_name, path.display());

    // The existence check has already passed, so even a NotFound error
    // here is a read failure (the file vanished), not a resolution miss.
    let bytes = std::fs::read(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;
    crate::load::read_bytes(&bytes, codec)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

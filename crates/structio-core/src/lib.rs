//! # structio-core
//!
//! Codec-agnostic loading and saving of structured values, plus
//! first-match-wins resolution of a logical file name against an ordered
//! list of candidate directories.
//!
//! This crate knows nothing about any concrete data format.  A format is
//! plugged in as a *codec*: any type implementing [`Decode`] and/or
//! [`Encode`].  The sibling `structio-toml` crate provides the TOML codec;
//! the test suite here uses a JSON codec to keep the generic layer honest.
//!
//! The crate defines three layers:
//!
//! - **`codec`** – The capability traits.  [`Decode`] turns bytes into a
//!   caller-typed value, [`Encode`] turns a value into bytes.  Everything
//!   else in the crate is parameterized over these.
//!
//! - **`load` / `save`** – Generic I/O helpers: open one named file and
//!   decode it, decode from any reader or byte slice, encode to a file
//!   (creating parent directories), to any writer, or to a byte vector.
//!
//! - **`resolve`** – The search-path resolver.  [`find_first_on_paths`]
//!   answers "which directory, in priority order, contains this file?";
//!   [`load_from_paths`] combines that answer with a codec to produce a
//!   decoded value, failing with a distinct error kind at each stage
//!   (not found / unreadable / undecodable) so callers can react
//!   differently to each.

pub mod codec;
pub mod load;
pub mod resolve;
pub mod save;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the most-used names at the crate root so callers can write
// `structio_core::load_from_paths` instead of spelling out the module path.
pub use codec::{BoxError, Decode, Encode};
pub use load::{load, read, read_bytes, LoadError};
pub use resolve::{find_first_on_paths, find_on_paths, load_from_paths};
pub use save::{save, write, write_bytes, SaveError};

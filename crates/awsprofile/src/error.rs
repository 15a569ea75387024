//! Error types for profile file resolution, parsing, and lookup.
//!
//! Responsibilities:
//! - Define one error enum shared by the path resolver, both stores, and the facade.
//! - Keep the not-found message format (`<key> is not found`) in one place.
//!
//! Does NOT handle:
//! - Logging. Errors are returned to the caller and never logged here.
//! - Retry policy, which belongs to the caller.
//!
//! Invariants:
//! - `NotFound` is an expected outcome of a single getter call, not a system fault.
//! - `ParseSyntax` covers both malformed INI text and non-integer values in integer fields.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by this crate.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The home directory could not be determined or a `~` path was not expandable.
    #[error("Unable to expand path '{path}': {message}")]
    PathExpansion { path: String, message: String },

    #[error("Failed to read profile file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile file at {path}: {message}")]
    ParseSyntax { path: PathBuf, message: String },

    /// No profile with the requested name exists in the queried store.
    #[error("{key} is not found")]
    NotFound { key: &'static str },
}

impl ProfileError {
    /// Returns true if this is a `NotFound` lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::NotFound { .. })
    }
}

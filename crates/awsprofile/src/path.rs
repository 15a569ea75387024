//! Path resolution for the shared credentials and config files.
//!
//! Responsibilities:
//! - Expand a leading `~` to the user's home directory.
//! - Apply an optional override path on top of a default path.
//! - Read the `AWS_SHARED_CREDENTIALS_FILE` / `AWS_CONFIG_FILE` overrides from the
//!   environment, only when asked to via `PathResolver::from_env`.
//!
//! Does NOT handle:
//! - Checking that the resolved file exists (the stores report that as `FileRead`).
//! - Any other AWS environment variables (`AWS_PROFILE`, `AWS_REGION`, ...).
//!
//! Invariants:
//! - The default path is always expanded first, so a missing home directory fails
//!   even when an override is present.
//! - Empty or whitespace-only overrides are treated as unset; any other value is
//!   used verbatim.
//! - `~user/...` forms are rejected rather than guessed.

use std::path::{Path, PathBuf};

use crate::constants::{
    AWS_CONFIG_FILE, AWS_SHARED_CREDENTIALS_FILE, DEFAULT_CONFIG_PATH, DEFAULT_CREDENTIALS_PATH,
};
use crate::error::ProfileError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// A value that is present is returned as-is, surrounding whitespace included.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| non_blank(&s))
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Returns the current user's home directory, if the platform can determine one.
fn default_home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Resolves the locations of the credentials and config files.
///
/// Overrides are explicit slots on the resolver. `from_env` fills them from the
/// process environment; tests and embedders can set them directly instead.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home_dir: Option<PathBuf>,
    credentials_file: Option<String>,
    config_file: Option<String>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    /// Create a resolver using the platform home directory and no overrides.
    pub fn new() -> Self {
        Self {
            home_dir: default_home_dir(),
            credentials_file: None,
            config_file: None,
        }
    }

    /// Fill the override slots from `AWS_SHARED_CREDENTIALS_FILE` and `AWS_CONFIG_FILE`.
    ///
    /// Slots already set through builder methods are left untouched.
    pub fn from_env(mut self) -> Self {
        if self.credentials_file.is_none() {
            self.credentials_file = env_var_or_none(AWS_SHARED_CREDENTIALS_FILE);
        }
        if self.config_file.is_none() {
            self.config_file = env_var_or_none(AWS_CONFIG_FILE);
        }
        self
    }

    /// Override the home directory used for `~` expansion.
    pub fn with_home_dir(mut self, home: PathBuf) -> Self {
        self.home_dir = Some(home);
        self
    }

    /// Drop the home directory so that any `~` expansion fails.
    pub fn without_home_dir(mut self) -> Self {
        self.home_dir = None;
        self
    }

    /// Override the credentials file path (may start with `~`).
    pub fn with_credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = non_blank(&path.into());
        self
    }

    /// Override the config file path (may start with `~`).
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = non_blank(&path.into());
        self
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Resolved location of the shared credentials file.
    pub fn credentials_path(&self) -> Result<PathBuf, ProfileError> {
        self.resolve(DEFAULT_CREDENTIALS_PATH, self.credentials_file.as_deref())
    }

    /// Resolved location of the config file.
    pub fn config_path(&self) -> Result<PathBuf, ProfileError> {
        self.resolve(DEFAULT_CONFIG_PATH, self.config_file.as_deref())
    }

    /// Resolve `default_path`, replaced by `override_path` when that is non-empty.
    pub fn resolve(
        &self,
        default_path: &str,
        override_path: Option<&str>,
    ) -> Result<PathBuf, ProfileError> {
        let mut resolved = self.expand(default_path)?;

        if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
            resolved = self.expand(path)?;
        }

        tracing::debug!(path = %resolved.display(), "Resolved profile file path");
        Ok(resolved)
    }

    /// Expand a leading `~` to the home directory.
    pub fn expand(&self, path: &str) -> Result<PathBuf, ProfileError> {
        let Some(rest) = path.strip_prefix('~') else {
            return Ok(PathBuf::from(path));
        };

        if !rest.is_empty() && !rest.starts_with(['/', '\\']) {
            return Err(ProfileError::PathExpansion {
                path: path.to_string(),
                message: "cannot expand user-specific home dir".to_string(),
            });
        }

        let home = self
            .home_dir
            .as_ref()
            .ok_or_else(|| ProfileError::PathExpansion {
                path: path.to_string(),
                message: "home directory could not be determined".to_string(),
            })?;

        let rest = rest.trim_start_matches(['/', '\\']);
        if rest.is_empty() {
            Ok(home.clone())
        } else {
            Ok(home.join(rest))
        }
    }
}

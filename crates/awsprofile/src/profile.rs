//! Unified view over the credentials and config stores.
//!
//! Responsibilities:
//! - Own one `Credentials` store, one `Configs` store, and the `PathResolver` that locates them.
//! - Drive both parses in a fixed order (credentials first, then config).
//! - Offer cross-store queries: deduplicated profile names and whole-record lookups.
//!
//! Does NOT handle:
//! - Per-field lookups (use `credentials()` / `configs()` and their getters).
//! - Resolving which profile is active (`AWS_PROFILE` and friends).
//!
//! Invariants:
//! - `profile_names()` is a stable dedup of credential names followed by config names.
//! - `is_credential` / `is_config` return the LAST matching record, unlike the
//!   first-match field getters on the stores.
//! - A credentials failure stops `parse()` before the config path is resolved.

use std::collections::HashSet;

use crate::configs::{Config, Configs};
use crate::credentials::{Credential, Credentials};
use crate::error::ProfileError;
use crate::path::PathResolver;

/// Profiles from the shared credentials file and the config file.
#[derive(Debug, Clone)]
pub struct AwsProfile {
    resolver: PathResolver,
    credentials: Credentials,
    configs: Configs,
}

impl Default for AwsProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsProfile {
    /// Create an empty facade whose file locations honor
    /// `AWS_SHARED_CREDENTIALS_FILE` and `AWS_CONFIG_FILE`.
    pub fn new() -> Self {
        Self::with_resolver(PathResolver::new().from_env())
    }

    /// Create an empty facade with explicit file locations.
    pub fn with_resolver(resolver: PathResolver) -> Self {
        Self {
            resolver,
            credentials: Credentials::new(),
            configs: Configs::new(),
        }
    }

    /// Parse the credentials file, then the config file.
    pub fn parse(&mut self) -> Result<(), ProfileError> {
        let credentials_path = self.resolver.credentials_path()?;
        self.credentials.parse(&credentials_path)?;

        let config_path = self.resolver.config_path()?;
        self.configs.parse(&config_path)?;

        tracing::debug!(
            credentials = self.credentials.len(),
            configs = self.configs.len(),
            "Loaded AWS profiles"
        );
        Ok(())
    }

    /// Every profile name from both files, first occurrence order, no duplicates.
    pub fn profile_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.credentials
            .profile_names()
            .into_iter()
            .chain(self.configs.profile_names())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// The credentials record for `profile_name`, if the credentials file has one.
    ///
    /// With duplicate sections the last one in the file is returned.
    pub fn is_credential(&self, profile_name: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .rfind(|c| c.profile_name == profile_name)
    }

    /// The config record for `profile_name`, if the config file has one.
    ///
    /// With duplicate sections the last one in the file is returned.
    pub fn is_config(&self, profile_name: &str) -> Option<&Config> {
        self.configs
            .iter()
            .rfind(|c| c.profile_name == profile_name)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn configs(&self) -> &Configs {
        &self.configs
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }
}

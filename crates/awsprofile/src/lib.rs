//! Read-only access to AWS shared credentials and config files.
//!
//! This crate parses `~/.aws/credentials` and `~/.aws/config` (or the files
//! named by `AWS_SHARED_CREDENTIALS_FILE` / `AWS_CONFIG_FILE`) into typed
//! per-profile records, and offers lookups across both files.
//!
//! ```rust,no_run
//! use awsprofile::AwsProfile;
//!
//! let mut profiles = AwsProfile::new();
//! profiles.parse()?;
//! for name in profiles.profile_names() {
//!     let region = profiles.is_config(&name).and_then(|c| c.region());
//!     println!("{name}: {}", region.unwrap_or("-"));
//! }
//! # Ok::<(), awsprofile::ProfileError>(())
//! ```

pub mod configs;
pub mod constants;
pub mod credentials;
mod error;
mod path;
mod profile;
mod section;

pub use configs::{Config, Configs, normalize_profile_name};
pub use credentials::{Credential, Credentials};
pub use error::ProfileError;
pub use path::{PathResolver, env_var_or_none};
pub use profile::AwsProfile;
pub use secrecy::{ExposeSecret, SecretString};

//! Centralized constants for AWS shared configuration files.
//!
//! Key names match the spellings used by the AWS CLI in `~/.aws/credentials`
//! and `~/.aws/config`.

// =============================================================================
// File Locations
// =============================================================================

/// Environment variable that overrides the credentials file location.
pub const AWS_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Environment variable that overrides the config file location.
pub const AWS_CONFIG_FILE: &str = "AWS_CONFIG_FILE";

/// Default credentials file location, before home directory expansion.
pub const DEFAULT_CREDENTIALS_PATH: &str = "~/.aws/credentials";

/// Default config file location, before home directory expansion.
pub const DEFAULT_CONFIG_PATH: &str = "~/.aws/config";

// =============================================================================
// Section Naming
// =============================================================================

/// Reserved section name that never becomes a profile.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Prefix carried by non-default profile sections in the config file.
pub const PROFILE_PREFIX: &str = "profile ";

// =============================================================================
// Credentials File Keys
// =============================================================================

pub const AWS_ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const AWS_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";

// =============================================================================
// Config File Keys
// =============================================================================

pub const ROLE_ARN: &str = "role_arn";
pub const SOURCE_PROFILE: &str = "source_profile";
pub const CREDENTIAL_SOURCE: &str = "credential_source";
pub const ROLE_SESSION_NAME: &str = "role_session_name";
pub const MFA_SERIAL: &str = "mfa_serial";
pub const DURATION_SECONDS: &str = "duration_seconds";
pub const AWS_SESSION_TOKEN: &str = "aws_session_token";
pub const EXTERNAL_ID: &str = "external_id";
pub const CA_BUNDLE: &str = "ca_bundle";
pub const CLI_FOLLOW_URLPARAM: &str = "cli_follow_urlparam";
pub const CLI_TIMESTAMP_FORMAT: &str = "cli_timestamp_format";
pub const CREDENTIAL_PROCESS: &str = "credential_process";
pub const WEB_IDENTITY_TOKEN_FILE: &str = "web_identity_token_file";
pub const OUTPUT: &str = "output";
pub const REGION: &str = "region";

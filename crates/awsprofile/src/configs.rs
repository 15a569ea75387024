//! Config file (`~/.aws/config`) store.
//!
//! Responsibilities:
//! - Parse each config section into a `Config` record.
//! - Normalize `[profile name]` headers to a bare profile name.
//! - Coerce `duration_seconds` and `external_id` to integers at parse time.
//! - Answer per-field lookups by profile name.
//!
//! Does NOT handle:
//! - Path resolution (see `path.rs`).
//! - Following `source_profile` chains or assuming roles.
//!
//! Invariants:
//! - Exactly one leading `profile ` prefix is stripped; `[default]` stays `default`.
//! - A parse call commits all of its records or none of them.
//! - Field getters return the first matching record.

use std::path::Path;

use secrecy::SecretString;
use serde::Serialize;

use crate::constants::{
    AWS_SESSION_TOKEN, CA_BUNDLE, CLI_FOLLOW_URLPARAM, CLI_TIMESTAMP_FORMAT, CREDENTIAL_PROCESS,
    CREDENTIAL_SOURCE, DURATION_SECONDS, EXTERNAL_ID, MFA_SERIAL, OUTPUT, PROFILE_PREFIX, REGION,
    ROLE_ARN, ROLE_SESSION_NAME, SOURCE_PROFILE, WEB_IDENTITY_TOKEN_FILE,
};
use crate::error::ProfileError;
use crate::section::{RawSection, load_sections};

/// One profile from the config file.
///
/// Every setting is optional: `None` means the key was absent from the section.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub profile_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_session_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_serial: Option<String>,
    /// Assumed-role session length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    /// Never serialized and redacted from `Debug`.
    #[serde(skip)]
    pub aws_session_token: Option<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_bundle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_follow_urlparam: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli_timestamp_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_identity_token_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Strip one leading `profile ` from a config section name.
pub fn normalize_profile_name(section_name: &str) -> &str {
    section_name
        .strip_prefix(PROFILE_PREFIX)
        .unwrap_or(section_name)
}

/// Integer literal with an optional sign and an optional `0x`, `0o`, `0b` or
/// legacy leading-`0` octal prefix. Single underscores may separate digits.
fn parse_integer(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, unsigned) = match s.as_bytes().first().copied()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..]),
        _ => (10, unsigned),
    };
    let digits = if radix == 10 {
        digits
    } else {
        digits.strip_prefix('_').unwrap_or(digits)
    };

    if digits.is_empty()
        || digits.starts_with(['_', '+', '-'])
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let magnitude = u64::from_str_radix(&cleaned, radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn parse_int(
    section: &RawSection,
    key: &'static str,
    path: &Path,
) -> Result<Option<i64>, ProfileError> {
    section
        .get(key)
        .map(|raw| {
            parse_integer(raw).ok_or_else(|| ProfileError::ParseSyntax {
                path: path.to_path_buf(),
                message: format!(
                    "invalid integer '{raw}' for {key} in section [{}]",
                    section.name
                ),
            })
        })
        .transpose()
}

impl Config {
    fn from_section(section: &RawSection, path: &Path) -> Result<Self, ProfileError> {
        Ok(Self {
            profile_name: normalize_profile_name(&section.name).to_string(),
            role_arn: section.owned(ROLE_ARN),
            source_profile: section.owned(SOURCE_PROFILE),
            credential_source: section.owned(CREDENTIAL_SOURCE),
            role_session_name: section.owned(ROLE_SESSION_NAME),
            mfa_serial: section.owned(MFA_SERIAL),
            duration_seconds: parse_int(section, DURATION_SECONDS, path)?,
            aws_session_token: section
                .owned(AWS_SESSION_TOKEN)
                .map(|s| SecretString::new(s.into())),
            external_id: parse_int(section, EXTERNAL_ID, path)?,
            ca_bundle: section.owned(CA_BUNDLE),
            cli_follow_urlparam: section.owned(CLI_FOLLOW_URLPARAM),
            cli_timestamp_format: section.owned(CLI_TIMESTAMP_FORMAT),
            credential_process: section.owned(CREDENTIAL_PROCESS),
            web_identity_token_file: section.owned(WEB_IDENTITY_TOKEN_FILE),
            output: section.owned(OUTPUT),
            region: section.owned(REGION),
        })
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn source_profile(&self) -> Option<&str> {
        self.source_profile.as_deref()
    }

    pub fn credential_source(&self) -> Option<&str> {
        self.credential_source.as_deref()
    }

    pub fn role_session_name(&self) -> Option<&str> {
        self.role_session_name.as_deref()
    }

    pub fn mfa_serial(&self) -> Option<&str> {
        self.mfa_serial.as_deref()
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        self.duration_seconds
    }

    pub fn aws_session_token(&self) -> Option<&SecretString> {
        self.aws_session_token.as_ref()
    }

    pub fn external_id(&self) -> Option<i64> {
        self.external_id
    }

    pub fn ca_bundle(&self) -> Option<&str> {
        self.ca_bundle.as_deref()
    }

    pub fn cli_follow_urlparam(&self) -> Option<&str> {
        self.cli_follow_urlparam.as_deref()
    }

    pub fn cli_timestamp_format(&self) -> Option<&str> {
        self.cli_timestamp_format.as_deref()
    }

    pub fn credential_process(&self) -> Option<&str> {
        self.credential_process.as_deref()
    }

    pub fn web_identity_token_file(&self) -> Option<&str> {
        self.web_identity_token_file.as_deref()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// All profiles read from one or more config files, in file order.
#[derive(Debug, Clone, Default)]
pub struct Configs {
    entries: Vec<Config>,
}

impl Configs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config file and append one record per profile section.
    ///
    /// `duration_seconds` and `external_id` accept decimal, `0x` hex, `0o` or
    /// leading-`0` octal and `0b` binary literals. Anything else in either key
    /// fails the call and no records from the file are kept.
    pub fn parse(&mut self, path: &Path) -> Result<(), ProfileError> {
        let parsed = load_sections(path)?
            .iter()
            .map(|section| Config::from_section(section, path))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            path = %path.display(),
            profiles = parsed.len(),
            "Parsed config file"
        );

        self.entries.extend(parsed);
        Ok(())
    }

    /// Profile names in section order. Duplicates are not removed.
    pub fn profile_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|c| c.profile_name.clone())
            .collect()
    }

    /// First record whose profile name matches.
    pub fn get(&self, profile_name: &str) -> Option<&Config> {
        self.entries.iter().find(|c| c.profile_name == profile_name)
    }

    fn field<'a, T>(
        &'a self,
        profile_name: &str,
        key: &'static str,
        project: impl FnOnce(&'a Config) -> T,
    ) -> Result<T, ProfileError> {
        self.get(profile_name)
            .map(project)
            .ok_or(ProfileError::NotFound { key })
    }

    pub fn role_arn(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, ROLE_ARN, Config::role_arn)
    }

    pub fn source_profile(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, SOURCE_PROFILE, Config::source_profile)
    }

    pub fn credential_source(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, CREDENTIAL_SOURCE, Config::credential_source)
    }

    pub fn role_session_name(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, ROLE_SESSION_NAME, Config::role_session_name)
    }

    pub fn mfa_serial(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, MFA_SERIAL, Config::mfa_serial)
    }

    pub fn duration_seconds(&self, profile_name: &str) -> Result<Option<i64>, ProfileError> {
        self.field(profile_name, DURATION_SECONDS, Config::duration_seconds)
    }

    pub fn aws_session_token(
        &self,
        profile_name: &str,
    ) -> Result<Option<&SecretString>, ProfileError> {
        self.field(profile_name, AWS_SESSION_TOKEN, Config::aws_session_token)
    }

    pub fn external_id(&self, profile_name: &str) -> Result<Option<i64>, ProfileError> {
        self.field(profile_name, EXTERNAL_ID, Config::external_id)
    }

    pub fn ca_bundle(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, CA_BUNDLE, Config::ca_bundle)
    }

    pub fn cli_follow_urlparam(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, CLI_FOLLOW_URLPARAM, Config::cli_follow_urlparam)
    }

    pub fn cli_timestamp_format(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, CLI_TIMESTAMP_FORMAT, Config::cli_timestamp_format)
    }

    pub fn credential_process(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, CREDENTIAL_PROCESS, Config::credential_process)
    }

    pub fn web_identity_token_file(
        &self,
        profile_name: &str,
    ) -> Result<Option<&str>, ProfileError> {
        self.field(
            profile_name,
            WEB_IDENTITY_TOKEN_FILE,
            Config::web_identity_token_file,
        )
    }

    pub fn output(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, OUTPUT, Config::output)
    }

    pub fn region(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.field(profile_name, REGION, Config::region)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Config> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Configs {
    type Item = &'a Config;
    type IntoIter = std::slice::Iter<'a, Config>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

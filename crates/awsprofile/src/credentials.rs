//! Shared credentials file (`~/.aws/credentials`) store.
//!
//! Responsibilities:
//! - Parse each credentials section into a `Credential` record.
//! - Answer per-field lookups by profile name.
//!
//! Does NOT handle:
//! - Path resolution (see `path.rs`).
//! - Cross-file aggregation (see `profile.rs`).
//! - Validating that keys are well-formed or still active.
//!
//! Invariants:
//! - Section names are used verbatim as profile names.
//! - Parsing appends; duplicate section names are retained.
//! - Field getters return the first matching record.

use std::path::Path;

use secrecy::SecretString;
use serde::Serialize;

use crate::constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY};
use crate::error::ProfileError;
use crate::section::{RawSection, load_sections};

/// One profile from the credentials file.
#[derive(Debug, Clone, Serialize)]
pub struct Credential {
    pub profile_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,
    /// Never serialized and redacted from `Debug`.
    #[serde(skip)]
    pub aws_secret_access_key: Option<SecretString>,
}

impl Credential {
    fn from_section(section: &RawSection) -> Self {
        Self {
            profile_name: section.name.clone(),
            aws_access_key_id: section.owned(AWS_ACCESS_KEY_ID),
            aws_secret_access_key: section
                .owned(AWS_SECRET_ACCESS_KEY)
                .map(|s| SecretString::new(s.into())),
        }
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn aws_access_key_id(&self) -> Option<&str> {
        self.aws_access_key_id.as_deref()
    }

    pub fn aws_secret_access_key(&self) -> Option<&SecretString> {
        self.aws_secret_access_key.as_ref()
    }
}

/// All profiles read from one or more credentials files, in file order.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    entries: Vec<Credential>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a credentials file and append one record per profile section.
    pub fn parse(&mut self, path: &Path) -> Result<(), ProfileError> {
        let parsed: Vec<Credential> = load_sections(path)?
            .iter()
            .map(Credential::from_section)
            .collect();

        tracing::debug!(
            path = %path.display(),
            profiles = parsed.len(),
            "Parsed credentials file"
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
    pub fn get(&self, profile_name: &str) -> Option<&Credential> {
        self.entries
            .iter()
            .find(|c| c.profile_name == profile_name)
    }

    pub fn aws_access_key_id(&self, profile_name: &str) -> Result<Option<&str>, ProfileError> {
        self.get(profile_name)
            .map(Credential::aws_access_key_id)
            .ok_or(ProfileError::NotFound {
                key: AWS_ACCESS_KEY_ID,
            })
    }

    pub fn aws_secret_access_key(
        &self,
        profile_name: &str,
    ) -> Result<Option<&SecretString>, ProfileError> {
        self.get(profile_name)
            .map(Credential::aws_secret_access_key)
            .ok_or(ProfileError::NotFound {
                key: AWS_SECRET_ACCESS_KEY,
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Credential> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Credentials {
    type Item = &'a Credential;
    type IntoIter = std::slice::Iter<'a, Credential>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn credentials_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn parsed(content: &str) -> Credentials {
        let file = credentials_file(content);
        let mut credentials = Credentials::new();
        credentials.parse(file.path()).unwrap();
        credentials
    }

    #[test]
    fn test_access_key_lookup_and_missing_profile() {
        let credentials = parsed("[default]\naws_access_key_id=X\n");

        assert_eq!(credentials.aws_access_key_id("default").unwrap(), Some("X"));

        let err = credentials.aws_access_key_id("missing").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "aws_access_key_id is not found");
    }

    #[test]
    fn test_secret_key_lookup_has_distinct_error() {
        let credentials = parsed(
            "[foo]\naws_access_key_id = ACCESS-2\naws_secret_access_key = SECRET-2\n",
        );

        let secret = credentials.aws_secret_access_key("foo").unwrap().unwrap();
        assert_eq!(secret.expose_secret(), "SECRET-2");

        let err = credentials.aws_secret_access_key("bar").unwrap_err();
        assert_eq!(err.to_string(), "aws_secret_access_key is not found");
    }

    #[test]
    fn test_missing_keys_are_none() {
        let credentials = parsed("[empty]\n");

        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials.aws_access_key_id("empty").unwrap(), None);
        assert!(credentials.aws_secret_access_key("empty").unwrap().is_none());
    }

    #[test]
    fn test_present_but_empty_value_is_distinct_from_absent() {
        let credentials = parsed("[blank]\naws_access_key_id =\n");
        assert_eq!(credentials.aws_access_key_id("blank").unwrap(), Some(""));
    }

    #[test]
    fn test_profile_names_keep_order_and_duplicates() {
        let credentials = parsed(
            "[default]\naws_access_key_id = A\n[foo]\naws_access_key_id = B\n[default]\naws_access_key_id = C\n",
        );

        assert_eq!(
            credentials.profile_names(),
            vec!["default".to_string(), "foo".to_string(), "default".to_string()]
        );
        // Getters are first-match.
        assert_eq!(credentials.aws_access_key_id("default").unwrap(), Some("A"));
    }

    #[test]
    fn test_default_section_is_skipped() {
        let credentials = parsed("[DEFAULT]\naws_access_key_id = NOPE\n[prod]\naws_access_key_id = P\n");
        assert_eq!(credentials.profile_names(), vec!["prod".to_string()]);
    }

    #[test]
    fn test_parse_twice_appends() {
        let file = credentials_file("[default]\naws_access_key_id = X\n");
        let mut credentials = Credentials::new();
        credentials.parse(file.path()).unwrap();
        credentials.parse(file.path()).unwrap();

        assert_eq!(credentials.len(), 2);
        assert_eq!(
            credentials.profile_names(),
            vec!["default".to_string(), "default".to_string()]
        );
    }

    #[test]
    fn test_missing_file_leaves_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut credentials = Credentials::new();
        let err = credentials.parse(&dir.path().join("credentials")).unwrap_err();

        assert!(matches!(err, ProfileError::FileRead { .. }));
        assert!(credentials.is_empty());
    }

    #[test]
    fn test_debug_does_not_expose_secret() {
        let credentials = parsed("[foo]\naws_secret_access_key = very-secret-value\n");
        let debug_output = format!("{:?}", credentials);

        assert!(
            !debug_output.contains("very-secret-value"),
            "Debug output should not contain the secret access key"
        );
        assert!(debug_output.contains("foo"));
    }

    #[test]
    fn test_serialize_skips_secret() {
        let credentials = parsed("[foo]\naws_access_key_id = AKIA\naws_secret_access_key = hidden\n");
        let json = serde_json::to_string(credentials.get("foo").unwrap()).unwrap();

        assert!(json.contains("AKIA"));
        assert!(!json.contains("hidden"));
    }
}

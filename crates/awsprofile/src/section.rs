//! INI section loading shared by the credentials and config stores.
//!
//! Responsibilities:
//! - Load a file through `rust-ini` and flatten it into ordered, owned sections.
//! - Drop the general (header-less) section and the reserved `DEFAULT` section.
//! - Map loader failures onto `ProfileError::FileRead` / `ProfileError::ParseSyntax`.
//!
//! Does NOT handle:
//! - Profile name normalization (the config store strips `profile `).
//! - Typed coercion of values.
//!
//! Invariants:
//! - Section order matches the file; duplicate section headers stay separate.
//! - Backslash escapes are not interpreted, so Windows paths survive intact.
//! - ` #` / ` ;` start an inline comment, on values and after a section header.

use std::io;
use std::path::Path;

use ini::{Ini, ParseOption};

use crate::constants::DEFAULT_SECTION;
use crate::error::ProfileError;

/// One named section of `key = value` pairs, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawSection {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl RawSection {
    /// Value for `key`; when a key repeats inside one section the last value wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

fn parse_option() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Load `path` and return every profile-bearing section.
pub(crate) fn load_sections(path: &Path) -> Result<Vec<RawSection>, ProfileError> {
    let ini = Ini::load_from_file_opt(path, parse_option()).map_err(|e| match e {
        // Non UTF-8 content surfaces as an I/O error from the reader.
        ini::Error::Io(source) if source.kind() == io::ErrorKind::InvalidData => {
            ProfileError::ParseSyntax {
                path: path.to_path_buf(),
                message: source.to_string(),
            }
        }
        ini::Error::Io(source) => ProfileError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => ProfileError::ParseSyntax {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;

    Ok(collect_sections(&ini))
}

fn collect_sections(ini: &Ini) -> Vec<RawSection> {
    ini.iter()
        .filter_map(|(name, properties)| {
            let name = name?;
            if name == DEFAULT_SECTION {
                return None;
            }
            Some(RawSection {
                name: name.to_string(),
                entries: properties
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
        })
        .collect()
}

//! Profile file format.
//!
//! Invariants:
//! - The file is JSON: `{ "profiles": { "<name>": { ... } } }`.
//! - Profile names are unique (map keys).
//! - Parse errors never echo file contents, which may hold tokens.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ProfileConfig;

/// On-disk configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Named connection profiles.
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Errors reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the configuration file at `path`.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_config_file_with_profiles() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"profiles":{{"prod":{{"base_url":"https://admin.example.com","api_token":"abc"}}}}}}"#
        )
        .unwrap();

        let config = read_config_file(file.path()).unwrap();
        let prod = config.profiles.get("prod").unwrap();
        assert_eq!(prod.base_url.as_deref(), Some("https://admin.example.com"));
        assert!(prod.api_token.is_some());
    }

    #[test]
    fn test_read_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
    }

    #[test]
    fn test_read_config_file_parse_error_hides_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json secret-token-123").unwrap();

        let err = read_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
        assert!(!err.to_string().contains("secret-token-123"));
    }
}

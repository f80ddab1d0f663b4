//! JSON configuration for the CLI.
//!
//! ```json
//! {
//!   "flags": { "prefix": true, "suffix": true, "middle": false },
//!   "country": "FI",
//!   "extra_terms": ["Holding"]
//! }
//! ```
//!
//! Every field is optional.

use std::path::Path;

use cleanco_types::MatchFlags;
use serde::{Deserialize, Serialize};

use crate::clean::Cleaner;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub flags: MatchFlags,
    /// ISO code or country name; absent means every country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Terms stripped in addition to the built-in table
    pub extra_terms: Vec<String>,
}

impl Config {
    /// Load config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.country.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(Error::Config("country must not be blank".into()));
        }
        Ok(())
    }

    pub fn cleaner(&self) -> Result<Cleaner> {
        Cleaner::new(self.country.as_deref()).with_extra_terms(&self.extra_terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("cleanco.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{"flags": {"middle": true}, "country": "FI", "extra_terms": ["Holding"]}"#,
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.flags, MatchFlags::all());
        assert_eq!(config.country.as_deref(), Some("FI"));
        assert_eq!(config.extra_terms, ["Holding"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{}");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(Config::load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_blank_country() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"country": "  "}"#);
        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_cleaner_uses_extra_terms() {
        let config = Config {
            country: Some("FI".into()),
            extra_terms: vec!["Holding".into()],
            ..Config::default()
        };
        let cleaner = config.cleaner().unwrap();
        assert_eq!(
            cleaner.basename("Acme Holding Oy", config.flags),
            "Acme"
        );
    }

    #[test]
    fn test_cleaner_rejects_empty_term() {
        let config = Config {
            extra_terms: vec!["--".into()],
            ..Config::default()
        };
        assert!(matches!(config.cleaner(), Err(Error::InvalidTerm(_))));
    }
}

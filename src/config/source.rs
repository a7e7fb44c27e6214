//! Content source configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where section content is read from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// One JSON file per section in `data_dir`.
    #[default]
    File,
    /// One JSON document per section under `base_url`.
    Http,
}

/// Content source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Which adapter serves content
    #[serde(default)]
    pub kind: SourceKind,

    /// Directory holding `<section>.json` files (file sources)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Base URL content documents live under (HTTP sources)
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (HTTP sources)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        match self.kind {
            SourceKind::File => {
                if self.data_dir.as_os_str().is_empty() {
                    return Err(ValidationError::MissingRequired("SOURCE__DATA_DIR"));
                }
            }
            SourceKind::Http => {
                let url = self
                    .base_url
                    .as_deref()
                    .ok_or(ValidationError::MissingRequired("SOURCE__BASE_URL"))?;
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ValidationError::InvalidBaseUrl);
                }
            }
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            data_dir: default_data_dir(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_config_defaults() {
        let config = SourceConfig::default();
        assert_eq!(config.kind, SourceKind::File);
        assert_eq!(config.data_dir, PathBuf::from("content"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_http_requires_base_url() {
        let config = SourceConfig {
            kind: SourceKind::Http,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("SOURCE__BASE_URL"))
        );
    }

    #[test]
    fn test_http_base_url_must_be_http() {
        let config = SourceConfig {
            kind: SourceKind::Http,
            base_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_timeout_bounds() {
        let zero = SourceConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(ValidationError::InvalidTimeout));

        let huge = SourceConfig {
            timeout_secs: 600,
            ..Default::default()
        };
        assert_eq!(huge.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let config: SourceConfig =
            serde_json::from_str(r#"{"kind": "http", "base_url": "https://cdn.example.com"}"#).unwrap();
        assert_eq!(config.kind, SourceKind::Http);
        assert!(config.validate().is_ok());
    }
}

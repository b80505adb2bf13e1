//! Client configuration.
//!
//! Loaded from a TOML file; every key is optional and falls back to the
//! defaults below. `BLOG_API_BASE_URL` overrides the base URL so builds for
//! different backends can share one config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BASE_URL_ENV: &str = "BLOG_API_BASE_URL";

/// Why a blog client config could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("blog client config {} is unreadable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("blog client config {} is not valid TOML: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range.
    #[error("blog client config has a bad `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `https://blog.example.com/api`.
    pub base_url: String,
    /// Number of posts shown on the home feed.
    pub home_posts_limit: usize,
    /// Upper bound for image uploads, in bytes.
    pub max_image_bytes: u64,
    /// Per-request timeout used by the bundled transport.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            home_posts_limit: 10,
            max_image_bytes: 10 * 1024 * 1024,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `ClientConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply `BLOG_API_BASE_URL` if set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Checks:
    /// - the base URL is http(s)
    /// - the home feed limit and the image cap are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "base_url",
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.home_posts_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "home_posts_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_image_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "max_image_bytes",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(&path, "base_url = \"https://blog.example.com/api\"\nhome_posts_limit = 5\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.base_url, "https://blog.example.com/api");
        assert_eq!(config.home_posts_limit, 5);
        assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(&path, "home_posts_limit = \"many\"").unwrap();
        assert!(matches!(
            ClientConfig::load(&path),
            Err(ConfigError::Malformed { .. })
        ));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = ClientConfig {
            base_url: "ftp://nope".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "base_url", .. })
        ));
        config.base_url = "https://ok".to_string();
        config.home_posts_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "home_posts_limit", .. })
        ));
        config.home_posts_limit = 1;
        config.max_image_bytes = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "blog client config has a bad `max_image_bytes`: must be at least 1"
        );
    }

    #[test]
    fn load_errors_name_the_client_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(&path, "base_url = [").unwrap();
        let err = ClientConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("blog client config "));
        assert!(err.to_string().contains("is not valid TOML"));
    }

    #[test]
    fn base_url_override_ignores_blank() {
        let config = ClientConfig::default().with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.base_url, ClientConfig::default().base_url);

        let config = ClientConfig::default()
            .with_base_url_override(Some("https://staging.example/api".to_string()));
        assert_eq!(config.base_url, "https://staging.example/api");
    }
}

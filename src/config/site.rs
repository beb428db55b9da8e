//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HubError, Result};

/// Environment variable that overrides `api_url`
pub const API_URL_ENV: &str = "KNOWLEDGE_HUB_API_URL";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub language: String,
    pub timezone: String,

    // URL
    pub root: String,
    pub stylesheet: String,

    // Backend
    pub api_url: String,
    pub request_timeout_secs: u64,

    // Date format (Moment.js style)
    pub date_format: String,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Knowledge Hub".to_string(),
            subtitle: "Explore our collection of articles".to_string(),
            language: "en".to_string(),
            timezone: String::new(),

            root: "/".to_string(),
            stylesheet: "https://cdn.jsdelivr.net/npm/tailwindcss@2/dist/tailwind.min.css"
                .to_string(),

            api_url: "http://localhost:1337/api".to_string(),
            request_timeout_secs: 10,

            date_format: "MMMM D, YYYY".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `_config.yml` from `base_dir` if present, then apply environment overrides
    pub fn discover<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let mut config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir.as_ref());
            Self::default()
        };

        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(api_url)?;
        }

        Ok(config)
    }

    /// Replace the backend address, e.g. from the environment
    pub fn apply_api_url_override(&mut self, api_url: String) -> Result<()> {
        tracing::debug!("Overriding api_url with {}", api_url);
        self.api_url = api_url;
        self.validate()
    }

    /// Origin (scheme, host and port) of the backend, shown in error guidance
    pub fn api_origin(&self) -> String {
        match reqwest::Url::parse(&self.api_url) {
            Ok(url) => url.origin().ascii_serialization(),
            Err(_) => self.api_url.clone(),
        }
    }

    /// Configured timezone, falling back to UTC when empty or unknown
    pub fn tz(&self) -> chrono_tz::Tz {
        if self.timezone.is_empty() {
            return chrono_tz::UTC;
        }
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown timezone '{}', using UTC", self.timezone);
            chrono_tz::UTC
        })
    }

    fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| HubError::Config(format!("invalid api_url '{}': {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HubError::Config(format!(
                "api_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(HubError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Built-in HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Knowledge Hub");
        assert_eq!(config.api_url, "http://localhost:1337/api");
        assert_eq!(config.server.port, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Docs
api_url: https://cms.example.com/api
timezone: Europe/Berlin
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.api_url, "https://cms.example.com/api");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.tz(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: From File\nrequest_timeout_secs: 3\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "From File");
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn test_load_rejects_bad_api_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "api_url: ftp://example.com\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, HubError::Config(_)), "{err:?}");
    }

    #[test]
    fn test_override_api_url() {
        let mut config = SiteConfig::default();
        config
            .apply_api_url_override("http://cms.internal:9000/api".to_string())
            .unwrap();
        assert_eq!(config.api_origin(), "http://cms.internal:9000");
    }

    #[test]
    fn test_api_origin() {
        let config = SiteConfig::default();
        assert_eq!(config.api_origin(), "http://localhost:1337");
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_utc() {
        let config = SiteConfig {
            timezone: "Mars/Olympus".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.tz(), chrono_tz::UTC);
    }
}

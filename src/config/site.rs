//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub title: String,
    pub contact_mail: String,

    // URL
    /// Public base URL in production
    pub url: String,
    /// Public base URL in development mode
    pub dev_url: String,

    // Directory
    pub content_dir: String,
    /// Collection served at the bare `/api` route
    pub default_collection: String,

    // Server
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "My Site".to_string(),
            title: "My Site".to_string(),
            contact_mail: String::new(),

            url: "http://example.com/".to_string(),
            dev_url: "http://localhost:4000/".to_string(),

            content_dir: "content".to_string(),
            default_collection: "go-web".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The environment-sensitive public base URL
    pub fn base_url(&self, dev: bool) -> &str {
        if dev {
            &self.dev_url
        } else {
            &self.url
        }
    }
}

/// Defaults for the serve command
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
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.default_collection, "go-web");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
name: Epic Of Code
title: Epic of Code
url: https://epicofcode.com/
contact_mail: epicofcode@gmail.com
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "Epic Of Code");
        assert_eq!(config.url, "https://epicofcode.com/");
        assert_eq!(config.server.port, 8080);
        // Unspecified fields fall back to defaults
        assert_eq!(config.default_collection, "go-web");
    }

    #[test]
    fn test_base_url_switches_on_dev() {
        let config = SiteConfig {
            url: "https://epicofcode.com/".to_string(),
            dev_url: "http://localhost:5173/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(false), "https://epicofcode.com/");
        assert_eq!(config.base_url(true), "http://localhost:5173/");
    }
}

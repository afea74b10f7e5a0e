//! mdfeed: a JSON API server for markdown blog collections
//!
//! This crate indexes markdown posts grouped into named collections on disk,
//! extracts their front-matter metadata, and serves each collection as a
//! sorted JSON array over HTTP.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main application handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding the collections
    pub content_dir: std::path::PathBuf,
    /// Development mode switches the public base URL
    pub dev: bool,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P, dev: bool) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            dev,
        })
    }

    /// Public base URL for the current environment
    pub fn base_url(&self) -> &str {
        self.config.base_url(self.dev)
    }
}

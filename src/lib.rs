//! knowledge-hub: a server-rendered article front end for a headless CMS
//!
//! Articles are fetched from the backend's REST API on every navigation,
//! normalized from either of the backend's two response layouts and
//! rendered into HTML pages for an article list and article details.

pub mod client;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod loader;
pub mod render;
pub mod routes;
pub mod server;

pub use error::{HubError, Result};

use std::path::{Path, PathBuf};

/// The main application
#[derive(Debug, Clone)]
pub struct KnowledgeHub {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl KnowledgeHub {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::discover(&base_dir)?;
        Ok(Self { config, base_dir })
    }

    /// Create an instance from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Content client for the configured backend
    pub fn client(&self) -> Result<client::ContentClient> {
        client::ContentClient::from_config(&self.config)
    }

    /// Navigator over the configured backend
    pub fn navigator(&self) -> Result<loader::Navigator> {
        Ok(loader::Navigator::new(loader::RouteLoader::new(
            self.client()?,
        )))
    }

    /// Page renderer for the site
    pub fn renderer(&self) -> render::Renderer {
        render::Renderer::new(self.config.clone())
    }
}

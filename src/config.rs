//! Application configuration
//!
//! Provides centralized configuration for the provider client, the favorites
//! store and the window.

use crate::{RecipeError, Result};
use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;

/// Public TheMealDB endpoint (free developer key `1`)
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Favorites file, relative to the working directory
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.txt";

pub const ENV_API_BASE_URL: &str = "RECIPE_API_BASE_URL";
pub const ENV_FAVORITES_PATH: &str = "RECIPE_FAVORITES_PATH";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "RECIPE_REQUEST_TIMEOUT_SECS";

/// Configuration for the whole application
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the recipe service
    pub api_base_url: String,

    /// Backing file of the favorites list
    pub favorites_path: PathBuf,

    /// Upper bound on every request to the recipe service
    pub request_timeout: Duration,

    /// Edge length of the square thumbnail, in pixels
    pub thumbnail_size: u32,

    /// Inner window size
    pub window_size: [f32; 2],

    /// Window title
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            favorites_path: PathBuf::from(DEFAULT_FAVORITES_PATH),
            request_timeout: Duration::from_secs(5),
            thumbnail_size: 220,
            window_size: [850.0, 650.0],
            window_title: "Clint's Recipe Workspace".to_string(),
        }
    }
}

impl AppConfig {
    /// Load defaults and apply `RECIPE_*` environment overrides
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults and apply overrides from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_BASE_URL) {
            config.api_base_url = url;
        }

        if let Some(path) = lookup(ENV_FAVORITES_PATH) {
            config.favorites_path = PathBuf::from(path);
        }

        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{ENV_REQUEST_TIMEOUT_SECS} must be a whole number of seconds"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the recipe service base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the favorites file
    pub fn with_favorites_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.favorites_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the thumbnail edge length
    pub fn with_thumbnail_size(mut self, size: u32) -> Self {
        self.thumbnail_size = size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(RecipeError::ConfigError(format!(
                "API base URL must be http(s): {}",
                self.api_base_url
            )));
        }

        if self.favorites_path.as_os_str().is_empty() {
            return Err(RecipeError::ConfigError(
                "Favorites path is required".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(RecipeError::ConfigError(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        if self.thumbnail_size == 0 {
            return Err(RecipeError::ConfigError(
                "Thumbnail size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

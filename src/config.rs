use crate::error::AppError;
use drive_gallery::GalleryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file consulted when `CLUBSITE_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "site.toml";

/// Site configuration, read from `site.toml`
///
/// ```toml
/// relay_url = "http://localhost:3001"
///
/// [gallery]
/// folder_id = "1mGYEZ3sPGB8W2yPIXoh3WNEpTThfJ0Xn"
/// api_key = "YOUR_GOOGLE_API_KEY_HERE"
/// cache_ttl_secs = 3600
/// max_images = 50
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the form relay
    pub relay_url: String,
    pub gallery: GallerySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    pub folder_id: String,
    pub api_key: String,
    pub cache_ttl_secs: u64,
    pub max_images: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay_url: "http://localhost:3001".to_string(),
            gallery: GallerySettings::default(),
        }
    }
}

impl Default for GallerySettings {
    fn default() -> Self {
        let defaults = GalleryConfig::default();
        Self {
            folder_id: defaults.folder_id,
            api_key: defaults.api_key,
            cache_ttl_secs: defaults.cache_ttl.as_secs(),
            max_images: defaults.max_images,
        }
    }
}

impl SiteConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        toml::from_str(s).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Load the site configuration.
    ///
    /// Reads `CLUBSITE_CONFIG` or `site.toml`; a missing or unreadable file
    /// yields the defaults. `GOOGLE_API_KEY` overrides the configured key.
    pub fn load() -> Self {
        let path = std::env::var("CLUBSITE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded site configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            log::info!("No {} found, using defaults", path.display());
            Self::default()
        };

        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            config.gallery.api_key = key;
        }
        config
    }

    pub fn gallery_config(&self) -> GalleryConfig {
        GalleryConfig {
            folder_id: self.gallery.folder_id.clone(),
            api_key: self.gallery.api_key.clone(),
            cache_ttl: Duration::from_secs(self.gallery.cache_ttl_secs),
            max_images: self.gallery.max_images,
            ..GalleryConfig::default()
        }
    }
}

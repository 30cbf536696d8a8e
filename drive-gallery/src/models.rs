use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gallery category, inferred from the filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Events,
    Workshops,
    Team,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Events, Category::Workshops, Category::Team];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Events => "events",
            Category::Workshops => "workshops",
            Category::Team => "team",
        }
    }

    /// Label for filter buttons
    pub fn label(&self) -> &'static str {
        match self {
            Category::Events => "Events",
            Category::Workshops => "Workshops",
            Category::Team => "Team",
        }
    }
}

/// A single displayable image derived from a provider file record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    /// Provider file id
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub full_size_url: String,
    pub category: Category,
    pub created_at: Option<DateTime<Utc>>,
}

/// Cached listing, persisted under a single key and replaced wholesale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCache {
    pub images: Vec<GalleryImage>,
    pub fetched_at: DateTime<Utc>,
}

impl GalleryCache {
    pub fn new(images: Vec<GalleryImage>, fetched_at: DateTime<Utc>) -> Self {
        Self { images, fetched_at }
    }

    /// Valid while younger than `ttl` and non-empty.
    ///
    /// A `fetched_at` in the future (clock skew) counts as age zero.
    pub fn is_valid(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        if self.images.is_empty() {
            return false;
        }
        let age = (now - self.fetched_at).to_std().unwrap_or(Duration::ZERO);
        age < ttl
    }
}

/// Configuration for gallery initialization
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Provider folder holding the gallery images
    pub folder_id: String,
    /// Provider read API key; empty means "not configured"
    pub api_key: String,
    pub cache_ttl: Duration,
    pub max_images: usize,
    /// Storage key of the persisted cache
    pub cache_key: String,
}

/// Placeholder shipped in sample configuration files
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GOOGLE_API_KEY_HERE";

/// False for an empty key and for the sample placeholder
pub fn is_usable_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}

impl GalleryConfig {
    /// True when a usable API key is present
    pub fn has_api_key(&self) -> bool {
        is_usable_api_key(&self.api_key)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            folder_id: "1mGYEZ3sPGB8W2yPIXoh3WNEpTThfJ0Xn".to_string(),
            api_key: String::new(),
            cache_ttl: Duration::from_secs(3600),
            max_images: 50,
            cache_key: "aiml_gallery_cache".to_string(),
        }
    }
}

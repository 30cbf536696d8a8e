//! # Drive Gallery
//!
//! A reusable gallery library that lists images from a shared cloud folder
//! (Google Drive), caches the listing with a time-to-live and falls back to a
//! fixed demo set whenever the provider is unavailable.
//!
//! This crate provides:
//! - Gallery records and the cache envelope (`models`)
//! - Filename based category inference (`category`)
//! - Display formatting for titles and dates (`format`)
//! - The provider listing client (`provider`, HTTP client behind `fetch`)
//! - Cache stores (in-memory, SQLite behind `sqlite`)
//! - The injectable gallery state with generation-guarded refreshes (`state`)
//! - Dioxus grid and lightbox components (behind `components`)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use drive_gallery::{DriveClient, GalleryConfig, GalleryState, MemoryCacheStore};
//!
//! let config = GalleryConfig::default();
//! let client = DriveClient::from_config(&config);
//! let state = GalleryState::new(config, client, MemoryCacheStore::new());
//!
//! let init = state.initialize().await;
//! render(&init.view);
//! if init.background_refresh {
//!     if let Some(view) = state.refresh(init.ticket).await {
//!         render(&view);
//!     }
//! }
//! ```

pub mod cache;
pub mod category;
pub mod demo;
pub mod error;
pub mod format;
pub mod models;
pub mod provider;
pub mod state;
pub mod view;

#[cfg(feature = "components")]
pub mod components;

pub use cache::{CacheStore, MemoryCacheStore};
pub use category::{categorize, Categorizer};
pub use demo::{demo_view, DEMO_SUBTITLE};
pub use error::GalleryError;
pub use format::{format_date, format_image_name, strip_extension};
pub use models::{Category, GalleryCache, GalleryConfig, GalleryImage};
pub use provider::{BoxFuture, DriveFile, DriveListing, ImageSource};
pub use state::{GalleryState, Initialized, RefreshTicket};
pub use view::{GalleryItem, GallerySource, GalleryView};

#[cfg(feature = "sqlite")]
pub use cache::{init_cache_schema, SqliteCacheStore};

#[cfg(feature = "fetch")]
pub use provider::DriveClient;

#[cfg(feature = "components")]
pub use components::{CategoryFilter, GalleryGrid, GalleryLightbox};

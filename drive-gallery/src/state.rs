//! Gallery state: cache-first initialization, background refresh and
//! generation-guarded cache writes.
//!
//! Every fetch is issued under a [`RefreshTicket`] carrying the generation
//! current at issue time. [`GalleryState::clear_cache`] advances the
//! generation, so a fetch issued before the clear can neither write the cache
//! nor produce a view once it resolves.

use crate::cache::CacheStore;
use crate::category::{categorize, Categorizer};
use crate::demo::demo_view;
use crate::error::GalleryError;
use crate::models::{GalleryCache, GalleryConfig, GalleryImage};
use crate::provider::{to_gallery_image, ImageSource};
use crate::view::{GallerySource, GalleryView};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Notice shown above the demo gallery when the provider failed
pub const FALLBACK_NOTICE: &str =
    "Unable to load gallery from Google Drive. Showing demo gallery instead.";

/// Generation snapshot taken when a fetch is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

/// Result of [`GalleryState::initialize`]
#[derive(Debug, Clone, PartialEq)]
pub struct Initialized {
    pub view: GalleryView,
    /// Ticket the view was produced under
    pub ticket: RefreshTicket,
    /// True when the view came from cache and a refresh should follow
    pub background_refresh: bool,
}

struct Inner<S, C> {
    config: GalleryConfig,
    source: S,
    store: C,
    categorize: Categorizer,
    generation: AtomicU64,
    // Serializes generation checks with cache writes and clears.
    commit_lock: Mutex<()>,
}

/// Explicitly constructed gallery state, shared by cloning
pub struct GalleryState<S, C> {
    inner: Arc<Inner<S, C>>,
}

impl<S, C> Clone for GalleryState<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ImageSource, C: CacheStore> GalleryState<S, C> {
    pub fn new(config: GalleryConfig, source: S, store: C) -> Self {
        Self::with_categorizer(config, source, store, categorize)
    }

    pub fn with_categorizer(
        config: GalleryConfig,
        source: S,
        store: C,
        categorize: Categorizer,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                source,
                store,
                categorize,
                generation: AtomicU64::new(0),
                commit_lock: Mutex::new(()),
            }),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.inner.config
    }

    /// Ticket for a fetch issued now
    pub fn ticket(&self) -> RefreshTicket {
        RefreshTicket {
            generation: self.inner.generation.load(Ordering::SeqCst),
        }
    }

    /// False once the cache was cleared after `ticket` was issued
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.inner.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Cache entry if present and still within the TTL
    pub fn valid_cache(&self) -> Option<GalleryCache> {
        match self.inner.store.load() {
            Ok(Some(cache)) if cache.is_valid(Utc::now(), self.inner.config.cache_ttl) => {
                Some(cache)
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("Failed to read gallery cache: {}", e);
                None
            }
        }
    }

    /// Produce the first view of the gallery.
    ///
    /// Renders from a valid cache and asks for a background refresh, or
    /// performs a blocking fetch. Fetch failures yield the demo gallery.
    pub async fn initialize(&self) -> Initialized {
        let ticket = self.ticket();

        if let Some(cache) = self.valid_cache() {
            log::info!("Loading gallery from cache...");
            return Initialized {
                view: GalleryView::from_images(
                    &cache.images,
                    GallerySource::Cache,
                    self.inner.config.max_images,
                ),
                ticket,
                background_refresh: true,
            };
        }

        log::info!("Fetching fresh gallery data...");
        let view = match self.fetch_images().await {
            Ok(images) => {
                self.commit(ticket, &images);
                GalleryView::from_images(
                    &images,
                    GallerySource::Fresh,
                    self.inner.config.max_images,
                )
            }
            Err(e) => {
                log::warn!("Error loading gallery, using demo gallery: {}", e);
                demo_view(Some(FALLBACK_NOTICE.to_string()))
            }
        };

        Initialized {
            view,
            ticket,
            background_refresh: false,
        }
    }

    /// Fetch and map the folder listing, capped at `max_images`.
    ///
    /// Fails without touching the network when no API key is configured,
    /// and on an empty listing.
    pub async fn fetch_images(&self) -> Result<Vec<GalleryImage>, GalleryError> {
        if !self.inner.config.has_api_key() {
            log::warn!("Google Drive API key not configured. Using demo gallery.");
            return Err(GalleryError::MissingApiKey);
        }

        let files = self.inner.source.list_files().await?;
        if files.is_empty() {
            return Err(GalleryError::EmptyListing);
        }

        Ok(files
            .iter()
            .take(self.inner.config.max_images)
            .map(|file| to_gallery_image(file, self.inner.categorize))
            .collect())
    }

    /// Background refresh issued under `ticket`.
    ///
    /// Returns the replacement view on success. Returns `None` when the fetch
    /// failed (the current view stays) or the ticket was superseded.
    pub async fn refresh(&self, ticket: RefreshTicket) -> Option<GalleryView> {
        match self.fetch_images().await {
            Ok(images) => {
                if !self.commit(ticket, &images) {
                    log::debug!("Discarding superseded gallery refresh");
                    return None;
                }
                Some(GalleryView::from_images(
                    &images,
                    GallerySource::Fresh,
                    self.inner.config.max_images,
                ))
            }
            Err(e) => {
                log::info!("Background refresh failed, using cached data: {}", e);
                None
            }
        }
    }

    /// Drop the persisted cache and supersede every outstanding ticket
    pub fn clear_cache(&self) {
        let _guard = self.inner.commit_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.inner.store.clear() {
            log::warn!("Failed to clear gallery cache: {}", e);
        }
    }

    /// `clear_cache` followed by `initialize`
    pub async fn reload(&self) -> Initialized {
        self.clear_cache();
        self.initialize().await
    }

    /// Overwrite the cache if `ticket` is still current.
    ///
    /// Returns whether the ticket was current; a failed write is logged only.
    fn commit(&self, ticket: RefreshTicket, images: &[GalleryImage]) -> bool {
        let _guard = self.inner.commit_lock.lock().unwrap_or_else(|e| e.into_inner());
        if !self.is_current(ticket) {
            return false;
        }
        let cache = GalleryCache::new(images.to_vec(), Utc::now());
        if let Err(e) = self.inner.store.save(&cache) {
            log::warn!("Failed to save gallery cache: {}", e);
        }
        true
    }
}

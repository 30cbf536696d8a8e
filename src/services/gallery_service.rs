use crate::config::SiteConfig;
use crate::database;
use drive_gallery::{
    CacheStore, DriveClient, GalleryCache, GalleryError, GalleryState, MemoryCacheStore,
    SqliteCacheStore,
};

/// Gallery state shared with the gallery screen via context
pub type SiteGallery = GalleryState<DriveClient, SiteCache>;

/// Persistent cache when the database opens, volatile otherwise
pub enum SiteCache {
    Sqlite(SqliteCacheStore),
    Memory(MemoryCacheStore),
}

impl CacheStore for SiteCache {
    fn load(&self) -> Result<Option<GalleryCache>, GalleryError> {
        match self {
            SiteCache::Sqlite(store) => store.load(),
            SiteCache::Memory(store) => store.load(),
        }
    }

    fn save(&self, cache: &GalleryCache) -> Result<(), GalleryError> {
        match self {
            SiteCache::Sqlite(store) => store.save(cache),
            SiteCache::Memory(store) => store.save(cache),
        }
    }

    fn clear(&self) -> Result<(), GalleryError> {
        match self {
            SiteCache::Sqlite(store) => store.clear(),
            SiteCache::Memory(store) => store.clear(),
        }
    }
}

/// Assemble the gallery state from site configuration
pub fn build_gallery(config: &SiteConfig) -> SiteGallery {
    let gallery_config = config.gallery_config();
    let path = database::get_database_path();

    let cache = match database::open_gallery_cache(&path, &gallery_config.cache_key) {
        Ok(store) => SiteCache::Sqlite(store),
        Err(e) => {
            log::warn!("Gallery cache unavailable, caching in memory only: {}", e);
            SiteCache::Memory(MemoryCacheStore::new())
        }
    };

    let client = DriveClient::from_config(&gallery_config);
    GalleryState::new(gallery_config, client, cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_memory_fallback_round_trips() {
        let cache = SiteCache::Memory(MemoryCacheStore::new());
        assert!(cache.load().unwrap().is_none());

        cache.save(&GalleryCache::new(Vec::new(), Utc::now())).unwrap();
        assert!(cache.load().unwrap().is_some());

        cache.clear().unwrap();
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_sqlite_variant_delegates() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let cache = SiteCache::Sqlite(SqliteCacheStore::new(conn, "aiml_gallery_cache").unwrap());

        cache.save(&GalleryCache::new(Vec::new(), Utc::now())).unwrap();
        assert!(cache.load().unwrap().is_some());
    }
}

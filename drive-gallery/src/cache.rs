//! Persistence of the gallery cache under a single key
//!
//! The cache is stored as one serialized JSON document and replaced
//! wholesale on every write. Unreadable entries are treated as absent.

use crate::error::GalleryError;
use crate::models::GalleryCache;
use std::sync::Mutex;

/// Storage backend for the single cached listing
pub trait CacheStore: Send + Sync {
    fn load(&self) -> Result<Option<GalleryCache>, GalleryError>;
    fn save(&self, cache: &GalleryCache) -> Result<(), GalleryError>;
    fn clear(&self) -> Result<(), GalleryError>;
}

fn decode(raw: &str) -> Option<GalleryCache> {
    match serde_json::from_str(raw) {
        Ok(cache) => Some(cache),
        Err(e) => {
            log::warn!("Discarding unreadable gallery cache: {}", e);
            None
        }
    }
}

/// Volatile store, used on targets without a database and in tests
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a cache entry
    pub fn with_cache(cache: &GalleryCache) -> Result<Self, GalleryError> {
        let store = Self::new();
        store.save(cache)?;
        Ok(store)
    }
}

impl CacheStore for MemoryCacheStore {
    fn load(&self) -> Result<Option<GalleryCache>, GalleryError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| GalleryError::CacheError("cache lock poisoned".to_string()))?;
        Ok(slot.as_deref().and_then(decode))
    }

    fn save(&self, cache: &GalleryCache) -> Result<(), GalleryError> {
        let raw = serde_json::to_string(cache)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| GalleryError::CacheError("cache lock poisoned".to_string()))?;
        *slot = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), GalleryError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| GalleryError::CacheError("cache lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(feature = "sqlite")]
pub use sqlite::{init_cache_schema, SqliteCacheStore};

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use rusqlite::{params, Connection, OptionalExtension};

    /// Create the key/value table backing the cache
    pub fn init_cache_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;
        Ok(())
    }

    /// SQLite backed store, the desktop stand-in for browser local storage
    pub struct SqliteCacheStore {
        conn: Mutex<Connection>,
        key: String,
    }

    impl SqliteCacheStore {
        pub fn new(conn: Connection, key: impl Into<String>) -> Result<Self, GalleryError> {
            init_cache_schema(&conn)?;
            Ok(Self {
                conn: Mutex::new(conn),
                key: key.into(),
            })
        }

        fn with_conn<T>(
            &self,
            f: impl FnOnce(&Connection) -> Result<T, GalleryError>,
        ) -> Result<T, GalleryError> {
            let conn = self
                .conn
                .lock()
                .map_err(|_| GalleryError::CacheError("cache lock poisoned".to_string()))?;
            f(&conn)
        }
    }

    impl CacheStore for SqliteCacheStore {
        fn load(&self) -> Result<Option<GalleryCache>, GalleryError> {
            let raw: Option<String> = self.with_conn(|conn| {
                Ok(conn
                    .query_row(
                        "SELECT value FROM local_storage WHERE key = ?1",
                        params![&self.key],
                        |row| row.get(0),
                    )
                    .optional()?)
            })?;
            Ok(raw.as_deref().and_then(decode))
        }

        fn save(&self, cache: &GalleryCache) -> Result<(), GalleryError> {
            let raw = serde_json::to_string(cache)?;
            self.with_conn(|conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO local_storage (key, value, updated_at)
                     VALUES (?1, ?2, CURRENT_TIMESTAMP)",
                    params![&self.key, raw],
                )?;
                Ok(())
            })
        }

        fn clear(&self) -> Result<(), GalleryError> {
            self.with_conn(|conn| {
                conn.execute(
                    "DELETE FROM local_storage WHERE key = ?1",
                    params![&self.key],
                )?;
                Ok(())
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::models::{Category, GalleryImage};
        use chrono::Utc;

        fn sample_cache() -> GalleryCache {
            GalleryCache::new(
                vec![GalleryImage {
                    id: "1".to_string(),
                    name: "team.jpg".to_string(),
                    thumbnail_url: "t".to_string(),
                    full_size_url: "f".to_string(),
                    category: Category::Team,
                    created_at: None,
                }],
                Utc::now(),
            )
        }

        #[test]
        fn test_save_load_clear() {
            let conn = Connection::open_in_memory().unwrap();
            let store = SqliteCacheStore::new(conn, "aiml_gallery_cache").unwrap();
            assert!(store.load().unwrap().is_none());

            let cache = sample_cache();
            store.save(&cache).unwrap();
            assert_eq!(store.load().unwrap(), Some(cache));

            store.clear().unwrap();
            assert!(store.load().unwrap().is_none());
        }

        #[test]
        fn test_save_replaces_previous_entry() {
            let conn = Connection::open_in_memory().unwrap();
            let store = SqliteCacheStore::new(conn, "aiml_gallery_cache").unwrap();

            store.save(&sample_cache()).unwrap();
            let replacement = GalleryCache::new(Vec::new(), Utc::now());
            store.save(&replacement).unwrap();

            assert_eq!(store.load().unwrap(), Some(replacement));
        }

        #[test]
        fn test_corrupt_entry_reads_as_absent() {
            let conn = Connection::open_in_memory().unwrap();
            init_cache_schema(&conn).unwrap();
            conn.execute(
                "INSERT INTO local_storage (key, value) VALUES ('aiml_gallery_cache', '{not json')",
                [],
            )
            .unwrap();

            let store = SqliteCacheStore::new(conn, "aiml_gallery_cache").unwrap();
            assert!(store.load().unwrap().is_none());
        }
    }
}

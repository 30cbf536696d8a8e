use crate::error::AppError;
use drive_gallery::SqliteCacheStore;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Path of the local database holding the gallery cache
pub fn get_database_path() -> PathBuf {
    PathBuf::from("./data/clubsite.db")
}

/// Open the gallery cache store backed by the database at `path`
pub fn open_gallery_cache(path: &Path, cache_key: &str) -> Result<SqliteCacheStore, AppError> {
    // Make sure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    Ok(SqliteCacheStore::new(conn, cache_key)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use drive_gallery::{CacheStore, GalleryCache};

    #[test]
    fn test_cache_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("clubsite-db-{}", std::process::id()));
        let path = dir.join("nested").join("clubsite.db");

        let store = open_gallery_cache(&path, "aiml_gallery_cache").unwrap();
        store.save(&GalleryCache::new(Vec::new(), Utc::now())).unwrap();
        drop(store);

        let store = open_gallery_cache(&path, "aiml_gallery_cache").unwrap();
        assert!(store.load().unwrap().is_some());

        let _ = std::fs::remove_dir_all(dir);
    }
}

/// Error type for gallery operations
///
/// Every variant ends in the demo fallback on the client side, so callers
/// rarely need to distinguish them beyond logging.
#[derive(Debug)]
pub enum GalleryError {
    /// API key absent or still the placeholder value
    MissingApiKey,
    NetworkError(String),
    /// Provider answered with a non-success status code
    StatusError(u16),
    JsonError(String),
    /// Provider answered successfully but listed no images
    EmptyListing,
    CacheError(String),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::MissingApiKey => write!(f, "Google Drive API key not configured"),
            GalleryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            GalleryError::StatusError(status) => write!(f, "API error: {}", status),
            GalleryError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            GalleryError::EmptyListing => write!(f, "Gallery folder contains no images"),
            GalleryError::CacheError(msg) => write!(f, "Cache error: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::JsonError(err.to_string())
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for GalleryError {
    fn from(err: rusqlite::Error) -> Self {
        GalleryError::CacheError(err.to_string())
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for GalleryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GalleryError::JsonError(err.to_string())
        } else {
            GalleryError::NetworkError(err.to_string())
        }
    }
}

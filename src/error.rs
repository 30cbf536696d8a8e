use drive_gallery::GalleryError;
use std::fmt;

/// Central error types for the club site
#[derive(Debug)]
pub enum AppError {
    /// Database error (rusqlite)
    Database(rusqlite::Error),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Unparseable configuration file
    Config(String),
    /// Gallery cache or provider error
    Gallery(GalleryError),
    /// Relay unreachable or answered with garbage
    Network(String),
    /// Relay rejected the submission; carries its `error` message
    Rejected(String),
    /// Too many submissions from this form
    RateLimited,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Gallery(e) => write!(f, "Gallery error: {}", e),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            AppError::RateLimited => write!(f, "Rate limit exceeded"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<GalleryError> for AppError {
    fn from(e: GalleryError) -> Self {
        AppError::Gallery(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

/// User-facing error messages for the UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Rejected(msg) => msg.clone(),
            AppError::RateLimited => "Too many attempts. Please try again later.".to_string(),
            AppError::Network(_) => {
                "Could not reach the server. Please try again later.".to_string()
            }
            _ => "An error occurred. Please try again.".to_string(),
        }
    }
}

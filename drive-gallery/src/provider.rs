//! Google Drive listing: wire records, URL construction and the HTTP client
//!
//! The mapping from provider records to [`GalleryImage`] is always available;
//! the HTTP client itself lives behind the `fetch` feature.

use crate::category::Categorizer;
use crate::error::GalleryError;
use crate::models::GalleryImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Files listing endpoint of the Drive v3 API
pub const LISTING_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";

/// Fields requested by the browser gallery
pub const GALLERY_FIELDS: &str = "files(id,name,thumbnailLink,webContentLink,createdTime)";

/// Fields requested by the server mirror (adds image metadata)
pub const MIRROR_FIELDS: &str =
    "files(id,name,thumbnailLink,webContentLink,createdTime,imageMediaMetadata)";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Anything that can list the files of the gallery folder
pub trait ImageSource: Send + Sync {
    fn list_files(&self) -> BoxFuture<'_, Result<Vec<DriveFile>, GalleryError>>;
}

impl<T: ImageSource + ?Sized> ImageSource for Arc<T> {
    fn list_files(&self) -> BoxFuture<'_, Result<Vec<DriveFile>, GalleryError>> {
        (**self).list_files()
    }
}

/// File record as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub thumbnail_link: Option<String>,
    pub web_content_link: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_media_metadata: Option<serde_json::Value>,
}

/// Listing response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriveListing {
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Thumbnail at 800px: upgrades the provider's 220px link, or builds one
pub fn thumbnail_url(file: &DriveFile) -> String {
    match &file.thumbnail_link {
        Some(link) if !link.is_empty() => link.replace("=s220", "=s800"),
        _ => format!("https://drive.google.com/thumbnail?id={}&sz=w800", file.id),
    }
}

pub fn full_size_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={}", file_id)
}

/// Map a provider record to a gallery record
pub fn to_gallery_image(file: &DriveFile, categorize: Categorizer) -> GalleryImage {
    GalleryImage {
        id: file.id.clone(),
        name: file.name.clone(),
        thumbnail_url: thumbnail_url(file),
        full_size_url: full_size_url(&file.id),
        category: categorize(&file.name),
        created_at: file.created_time,
    }
}

/// Folder filter restricting the listing to images
pub fn listing_query(folder_id: &str) -> String {
    format!("'{}' in parents and mimeType contains 'image/'", folder_id)
}

#[cfg(feature = "fetch")]
pub use client::DriveClient;

#[cfg(feature = "fetch")]
mod client {
    use super::*;
    use crate::models::{is_usable_api_key, GalleryConfig};
    use std::time::Duration;

    /// HTTP client for the Drive listing endpoint
    #[derive(Clone)]
    pub struct DriveClient {
        client: reqwest::Client,
        endpoint: String,
        folder_id: String,
        api_key: String,
        page_size: usize,
        fields: String,
    }

    impl DriveClient {
        pub fn new(folder_id: String, api_key: String, page_size: usize) -> Self {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .connect_timeout(Duration::from_secs(10))
                .user_agent("DriveGallery/0.1.0")
                .build()
                .unwrap_or_else(|e| {
                    log::warn!("HTTP client build failed, using defaults: {}", e);
                    reqwest::Client::new()
                });

            Self {
                client,
                endpoint: LISTING_ENDPOINT.to_string(),
                folder_id,
                api_key,
                page_size,
                fields: GALLERY_FIELDS.to_string(),
            }
        }

        pub fn from_config(config: &GalleryConfig) -> Self {
            Self::new(
                config.folder_id.clone(),
                config.api_key.clone(),
                config.max_images,
            )
        }

        /// Point the client at another listing endpoint (e.g. a local mirror)
        pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
            self.endpoint = endpoint.into();
            self
        }

        pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
            self.fields = fields.into();
            self
        }

        /// Query string parameters of the listing request
        pub fn query_params(&self) -> Vec<(&'static str, String)> {
            vec![
                ("q", listing_query(&self.folder_id)),
                ("fields", self.fields.clone()),
                ("orderBy", "createdTime desc".to_string()),
                ("pageSize", self.page_size.to_string()),
                ("key", self.api_key.clone()),
            ]
        }

        async fn fetch_listing(&self) -> Result<Vec<DriveFile>, GalleryError> {
            if !is_usable_api_key(&self.api_key) {
                return Err(GalleryError::MissingApiKey);
            }

            let response = self
                .client
                .get(&self.endpoint)
                .query(&self.query_params())
                .header("Accept", "application/json")
                .send()
                .await?;

            if !response.status().is_success() {
                log::error!("Google Drive API error: {}", response.status());
                return Err(GalleryError::StatusError(response.status().as_u16()));
            }

            let listing = response.json::<DriveListing>().await?;
            log::debug!("Drive listing returned {} files", listing.files.len());
            Ok(listing.files)
        }
    }

    impl ImageSource for DriveClient {
        fn list_files(&self) -> BoxFuture<'_, Result<Vec<DriveFile>, GalleryError>> {
            Box::pin(self.fetch_listing())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::categorize;
    use crate::models::Category;

    fn file(id: &str, name: &str, thumb: Option<&str>) -> DriveFile {
        DriveFile {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail_link: thumb.map(str::to_string),
            web_content_link: None,
            created_time: None,
            image_media_metadata: None,
        }
    }

    #[test]
    fn test_thumbnail_is_upgraded() {
        let f = file("abc", "x.jpg", Some("https://lh3.googleusercontent.com/xyz=s220"));
        assert_eq!(thumbnail_url(&f), "https://lh3.googleusercontent.com/xyz=s800");
    }

    #[test]
    fn test_thumbnail_fallback_pattern() {
        let f = file("abc", "x.jpg", None);
        assert_eq!(
            thumbnail_url(&f),
            "https://drive.google.com/thumbnail?id=abc&sz=w800"
        );
    }

    #[test]
    fn test_to_gallery_image() {
        let f = file("id42", "Seminar_on_NLP.jpg", None);
        let image = to_gallery_image(&f, categorize);
        assert_eq!(image.id, "id42");
        assert_eq!(image.category, Category::Workshops);
        assert_eq!(
            image.full_size_url,
            "https://drive.google.com/uc?export=view&id=id42"
        );
    }

    #[test]
    fn test_listing_parses_provider_json() {
        let json = r#"{
            "files": [
                {
                    "id": "1a",
                    "name": "AI_Hackathon_Event.png",
                    "thumbnailLink": "https://lh3/abc=s220",
                    "createdTime": "2025-02-01T09:15:00.000Z"
                },
                { "id": "2b", "name": "team.jpg" }
            ]
        }"#;
        let listing: DriveListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.files.len(), 2);
        assert!(listing.files[0].created_time.is_some());
        assert!(listing.files[1].thumbnail_link.is_none());
    }

    #[test]
    fn test_listing_without_files_key_is_empty() {
        let listing: DriveListing = serde_json::from_str("{}").unwrap();
        assert!(listing.files.is_empty());
    }
}

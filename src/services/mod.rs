pub mod gallery_service;
pub mod rate_limiter;
pub mod relay_client;

pub use gallery_service::{build_gallery, SiteGallery};
pub use rate_limiter::FormRateLimiter;
pub use relay_client::RelayClient;

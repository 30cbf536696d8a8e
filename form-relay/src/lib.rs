//! HTTP relay behind the club website.
//!
//! # Endpoints
//! - `GET /` health document
//! - `GET /api/gallery` server-side mirror of the Drive folder listing
//! - `POST /api/join` membership application, mailed to the club and the applicant
//! - `POST /api/contact` contact message, mailed to the club
//!
//! Every response body is JSON with a `success` flag. Validation failures are
//! `400`, upstream (mail, provider) failures are `500`, unknown routes `404`.
//!
//! # Configuration
//!
//! Read from the environment, see [`config::Config`]. Without `EMAIL_USER`
//! and `EMAIL_PASS` the relay still accepts submissions but only logs them.
//!
//! ```sh
//! RUST_LOG=info PORT=3001 GOOGLE_API_KEY=... cargo run -p form-relay
//! ```

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use log::{error, info};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod forms;
pub mod mail;
pub mod routes;
pub mod state;

use config::Config;
use routes::{contact_handler, fallback_handler, gallery_handler, health_handler, join_handler};
use state::State;

/// Build the router over shared state
pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(health_handler))
        .route("/api/gallery", get(gallery_handler))
        .route("/api/join", post(join_handler))
        .route("/api/contact", post(contact_handler))
        .fallback(fallback_handler)
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> std::io::Result<()> {
    info!("Loading configuration...");
    let config = Config::load();
    config.warn_missing();

    let address = format!("0.0.0.0:{}", config.port);
    let state = State::new(config);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::{Email, MailError, Mailer, SharedMailer};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use drive_gallery::{BoxFuture, DriveFile, GalleryError, ImageSource};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<Email>>,
        fail: bool,
    }

    impl RecordingMailer {
        fn sent(&self) -> Vec<Email> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Mailer for RecordingMailer {
        fn send(&self, email: Email) -> BoxFuture<'_, Result<(), MailError>> {
            Box::pin(async move {
                if self.fail {
                    return Err(MailError::Transport("connection refused".to_string()));
                }
                self.sent.lock().unwrap().push(email);
                Ok(())
            })
        }
    }

    struct StaticGallery(Result<Vec<DriveFile>, u16>);

    impl ImageSource for StaticGallery {
        fn list_files(&self) -> BoxFuture<'_, Result<Vec<DriveFile>, GalleryError>> {
            let result = self.0.clone().map_err(GalleryError::StatusError);
            Box::pin(async move { result })
        }
    }

    fn state_with(mailer: Option<Arc<RecordingMailer>>, gallery: StaticGallery) -> Arc<State> {
        State::with_parts(
            Config::default(),
            mailer.map(|m| m as SharedMailer),
            Arc::new(gallery),
        )
    }

    fn valid_application() -> Value {
        json!({
            "fullname": "Asha Verma",
            "email": "asha@example.com",
            "branch": "CSE",
            "year": "2",
            "skills": "Python",
            "reason": "Learning ML"
        })
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let router = app(state_with(None, StaticGallery(Ok(Vec::new()))));
        let request = Request::get("/").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn test_join_missing_email_is_rejected_without_mail() {
        let mailer = Arc::new(RecordingMailer::default());
        let router = app(state_with(Some(mailer.clone()), StaticGallery(Ok(Vec::new()))));

        let mut payload = valid_application();
        payload.as_object_mut().unwrap().remove("email");
        let (status, body) = send(router, post_json("/api/join", &payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "All fields are required");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_join_invalid_email() {
        let mailer = Arc::new(RecordingMailer::default());
        let router = app(state_with(Some(mailer.clone()), StaticGallery(Ok(Vec::new()))));

        let mut payload = valid_application();
        payload["email"] = json!("not-an-email");
        let (status, body) = send(router, post_json("/api/join", &payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email address");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_join_undeliverable_email_sends_nothing() {
        let mailer = Arc::new(RecordingMailer::default());
        let router = app(state_with(Some(mailer.clone()), StaticGallery(Ok(Vec::new()))));

        let mut payload = valid_application();
        payload["email"] = json!("a..b@example.com");
        let (status, body) = send(router, post_json("/api/join", &payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email address");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_join_sends_exactly_two_emails() {
        let mailer = Arc::new(RecordingMailer::default());
        let router = app(state_with(Some(mailer.clone()), StaticGallery(Ok(Vec::new()))));

        let (status, body) = send(router, post_json("/api/join", &valid_application())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "aimlcluboct@gmail.com");
        assert_eq!(sent[1].to, "asha@example.com");
    }

    #[tokio::test]
    async fn test_join_without_mailer_still_succeeds() {
        let router = app(state_with(None, StaticGallery(Ok(Vec::new()))));
        let (status, body) = send(router, post_json("/api/join", &valid_application())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_join_mail_failure_is_500() {
        let mailer = Arc::new(RecordingMailer {
            fail: true,
            ..RecordingMailer::default()
        });
        let router = app(state_with(Some(mailer), StaticGallery(Ok(Vec::new()))));

        let (status, body) = send(router, post_json("/api/join", &valid_application())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to submit application");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let router = app(state_with(None, StaticGallery(Ok(Vec::new()))));
        let request = Request::builder()
            .method("POST")
            .uri("/api/join")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_contact_sends_one_email() {
        let mailer = Arc::new(RecordingMailer::default());
        let router = app(state_with(Some(mailer.clone()), StaticGallery(Ok(Vec::new()))));

        let payload = json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "subject": "Guest talk",
            "message": "Would love to speak."
        });
        let (status, body) = send(router, post_json("/api/contact", &payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Message sent successfully!");
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Contact Form: Guest talk");
    }

    #[tokio::test]
    async fn test_contact_missing_message_is_rejected_without_mail() {
        let mailer = Arc::new(RecordingMailer::default());
        let router = app(state_with(Some(mailer.clone()), StaticGallery(Ok(Vec::new()))));

        let payload = json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "subject": "Guest talk"
        });
        let (status, body) = send(router, post_json("/api/contact", &payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "All fields are required");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_gallery_mirror() {
        let files = vec![DriveFile {
            id: "abc".to_string(),
            name: "ML_Bootcamp.jpg".to_string(),
            thumbnail_link: Some("https://lh3/x=s220".to_string()),
            web_content_link: None,
            created_time: None,
            image_media_metadata: None,
        }];
        let router = app(state_with(None, StaticGallery(Ok(files))));

        let request = Request::get("/api/gallery").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 1);
        assert_eq!(body["images"][0]["category"], "workshops");
        assert_eq!(body["images"][0]["thumbnailUrl"], "https://lh3/x=s800");
    }

    #[tokio::test]
    async fn test_gallery_provider_failure_is_500() {
        let router = app(state_with(None, StaticGallery(Err(403))));
        let request = Request::get("/api/gallery").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to fetch gallery images");
        assert_eq!(body["message"], "API error: 403");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let router = app(state_with(None, StaticGallery(Ok(Vec::new()))));
        let request = Request::get("/api/nope").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Endpoint not found");
    }
}

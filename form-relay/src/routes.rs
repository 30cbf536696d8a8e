use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State as AxumState},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use drive_gallery::{categorize, provider::to_gallery_image, GalleryImage};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::json;

use super::{
    error::RelayError,
    forms::{ContactMessage, JoinApplication},
    mail::Email,
    state::State,
};

type SharedState = AxumState<Arc<State>>;

#[derive(Serialize)]
pub struct GalleryResponse {
    pub success: bool,
    pub count: usize,
    pub images: Vec<GalleryImage>,
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "message": "AI & ML Club OCT Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

pub async fn gallery_handler(
    AxumState(state): SharedState,
) -> Result<Json<GalleryResponse>, RelayError> {
    let files = state.gallery.list_files().await.map_err(|e| {
        error!("Gallery API error: {e}");
        RelayError::upstream("Failed to fetch gallery images", e.to_string())
    })?;

    let images: Vec<GalleryImage> = files
        .iter()
        .map(|file| to_gallery_image(file, categorize))
        .collect();

    Ok(Json(GalleryResponse {
        success: true,
        count: images.len(),
        images,
    }))
}

pub async fn join_handler(
    AxumState(state): SharedState,
    payload: Result<Json<JoinApplication>, JsonRejection>,
) -> Result<impl IntoResponse, RelayError> {
    let Json(application) = payload.map_err(|e| {
        warn!("Rejected join payload: {e}");
        RelayError::MalformedPayload
    })?;
    application.validate()?;

    let submitted_at = Utc::now();
    deliver(
        &state,
        [
            application.club_notification(&state.config.club_inbox, submitted_at),
            application.applicant_confirmation(&state.config.club_inbox),
        ],
        "Failed to submit application",
    )
    .await?;

    info!(
        "New membership application: {} <{}> ({}, year {}) at {}",
        application.fullname,
        application.email,
        application.branch,
        application.year,
        submitted_at.to_rfc3339()
    );

    Ok(Json(json!({
        "success": true,
        "message": "Application submitted successfully! Check your email for confirmation.",
    })))
}

pub async fn contact_handler(
    AxumState(state): SharedState,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<impl IntoResponse, RelayError> {
    let Json(message) = payload.map_err(|e| {
        warn!("Rejected contact payload: {e}");
        RelayError::MalformedPayload
    })?;
    message.validate()?;

    deliver(
        &state,
        [message.club_notification(&state.config.club_inbox, Utc::now())],
        "Failed to send message",
    )
    .await?;

    info!("Contact message from <{}>: {}", message.email, message.subject);

    Ok(Json(json!({
        "success": true,
        "message": "Message sent successfully!",
    })))
}

pub async fn fallback_handler() -> RelayError {
    RelayError::NotFound
}

/// Send every email in order, stopping at the first failure.
///
/// Without a configured mailer this is a no-op.
async fn deliver<const N: usize>(
    state: &State,
    emails: [Email; N],
    context: &'static str,
) -> Result<(), RelayError> {
    let Some(mailer) = &state.mailer else {
        return Ok(());
    };

    for email in emails {
        let to = email.to.clone();
        mailer.send(email).await.map_err(|e| {
            error!("Mail delivery to {to} failed: {e}");
            RelayError::Upstream {
                context,
                message: None,
            }
        })?;
    }

    Ok(())
}

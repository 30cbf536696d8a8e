use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Endpoint not found")]
    NotFound,

    /// Upstream failure (mail or provider); `context` is the public message
    #[error("{context}")]
    Upstream {
        context: &'static str,
        message: Option<String>,
    },
}

impl RelayError {
    pub fn upstream(context: &'static str, message: impl Into<String>) -> Self {
        RelayError::Upstream {
            context,
            message: Some(message.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) | RelayError::MalformedPayload => StatusCode::BAD_REQUEST,
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            RelayError::Upstream {
                message: Some(message),
                ..
            } => json!({ "success": false, "error": self.to_string(), "message": message }),
            _ => json!({ "success": false, "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

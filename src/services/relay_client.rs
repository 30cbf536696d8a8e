use crate::config::SiteConfig;
use crate::error::AppError;
use crate::models::{ContactForm, JoinForm};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body returned by every relay endpoint
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelayResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Sends form submissions to the relay
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl PartialEq for RelayClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.relay_url.clone())
    }

    /// Submit a membership application; returns the relay's message
    pub async fn submit_join(&self, form: &JoinForm) -> Result<String, AppError> {
        self.post("api/join", &form.trimmed()).await
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<String, AppError> {
        self.post("api/contact", &form.trimmed()).await
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, path);
        log::info!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        interpret(status.is_success(), &text)
    }
}

/// Map a relay answer to the message to show or the error to report
pub fn interpret(status_ok: bool, body: &str) -> Result<String, AppError> {
    let parsed: RelayResponse = serde_json::from_str(body).map_err(|e| {
        log::warn!("Unreadable relay response: {}", e);
        AppError::Network(format!("unreadable response: {}", e))
    })?;

    if status_ok && parsed.success {
        return Ok(parsed
            .message
            .unwrap_or_else(|| "Submitted successfully!".to_string()));
    }

    let reason = parsed
        .error
        .unwrap_or_else(|| "Submission failed. Please try again.".to_string());
    log::warn!("Relay rejected submission: {}", reason);
    Err(AppError::Rejected(reason))
}

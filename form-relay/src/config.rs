use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

/// Relay configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub google_api_key: String,
    pub drive_folder_id: String,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub smtp_host: String,
    /// Inbox receiving applications and contact messages
    pub club_inbox: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", 3001),
            google_api_key: var("GOOGLE_API_KEY").unwrap_or_default(),
            drive_folder_id: try_load(
                "GOOGLE_DRIVE_FOLDER_ID",
                "1mGYEZ3sPGB8W2yPIXoh3WNEpTThfJ0Xn".to_string(),
            ),
            email_user: var("EMAIL_USER").ok(),
            email_pass: var("EMAIL_PASS").ok(),
            smtp_host: try_load("SMTP_HOST", "smtp.gmail.com".to_string()),
            club_inbox: try_load("CLUB_INBOX", "aimlcluboct@gmail.com".to_string()),
        }
    }

    /// Mail credentials, when both halves are present
    pub fn mail_credentials(&self) -> Option<(&str, &str)> {
        match (&self.email_user, &self.email_pass) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some((user.as_str(), pass.as_str()))
            }
            _ => None,
        }
    }

    /// Log a warning for every missing credential
    pub fn warn_missing(&self) {
        if self.google_api_key.trim().is_empty() {
            warn!("GOOGLE_API_KEY not configured");
        }
        if self.mail_credentials().is_none() {
            warn!("Email credentials not configured, submissions will not be mailed");
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            google_api_key: String::new(),
            drive_folder_id: "1mGYEZ3sPGB8W2yPIXoh3WNEpTThfJ0Xn".to_string(),
            email_user: None,
            email_pass: None,
            smtp_host: "smtp.gmail.com".to_string(),
            club_inbox: "aimlcluboct@gmail.com".to_string(),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found");
    })
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Ok(raw) = var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value ({e}), using default: {default}");
        default
    })
}

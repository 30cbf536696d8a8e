//! Form payloads, validation and email templates

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use lettre::Address;
use regex::Regex;
use serde::Deserialize;

use crate::{error::RelayError, mail::Email};

const REQUIRED_MESSAGE: &str = "All fields are required";
const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Pattern check plus the mail transport's address grammar
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
        .is_match(email)
        && email.parse::<Address>().is_ok()
}

fn all_present(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}

/// Escape text for inclusion in an HTML email body
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Membership application
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct JoinApplication {
    pub fullname: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    pub skills: String,
    pub reason: String,
}

impl JoinApplication {
    pub fn validate(&self) -> Result<(), RelayError> {
        if !all_present(&[
            &self.fullname,
            &self.email,
            &self.branch,
            &self.year,
            &self.skills,
            &self.reason,
        ]) {
            return Err(RelayError::Validation(REQUIRED_MESSAGE.to_string()));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(RelayError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Notification for the club inbox
    pub fn club_notification(&self, club_inbox: &str, submitted_at: DateTime<Utc>) -> Email {
        let row = |label: &str, value: &str| {
            format!(
                "<tr><td style=\"padding: 10px; border: 1px solid #ddd;\"><strong>{}:</strong></td>\
                 <td style=\"padding: 10px; border: 1px solid #ddd;\">{}</td></tr>",
                label,
                escape_html(value)
            )
        };

        let rows = [
            row("Name", &self.fullname),
            row("Email", &self.email),
            row("Branch", &self.branch),
            row("Year", &self.year),
            row("Skills", &self.skills),
            row("Reason", &self.reason),
        ]
        .concat();

        Email {
            to: club_inbox.to_string(),
            subject: "New Membership Application - AI & ML Club".to_string(),
            html: format!(
                "<h2>New Membership Application</h2>\
                 <table style=\"border-collapse: collapse; width: 100%;\">{}</table>\
                 <p style=\"margin-top: 20px; color: #666;\">Submitted on: {}</p>",
                rows,
                submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
        }
    }

    /// Confirmation for the applicant
    pub fn applicant_confirmation(&self, club_inbox: &str) -> Email {
        let name = escape_html(&self.fullname);
        let details = format!(
            "<p><strong>Name:</strong> {}</p><p><strong>Email:</strong> {}</p>\
             <p><strong>Branch:</strong> {}</p><p><strong>Year:</strong> {}</p>\
             <p><strong>Skills:</strong> {}</p>",
            name,
            escape_html(&self.email),
            escape_html(&self.branch),
            escape_html(&self.year),
            escape_html(&self.skills),
        );

        Email {
            to: self.email.trim().to_string(),
            subject: "Application Received - AI & ML Club OCT".to_string(),
            html: format!(
                "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
                 <h2 style=\"color: #00f5ff;\">Thank you for applying!</h2>\
                 <p>Dear {name},</p>\
                 <p>We have received your application to join the AI &amp; ML Club at Oriental College of Technology.</p>\
                 <p>Our team will review your application and get back to you soon.</p>\
                 <div style=\"background: #f5f5f5; padding: 20px; border-radius: 10px; margin: 20px 0;\">\
                 <h3 style=\"margin-top: 0;\">Your Application Details:</h3>{details}</div>\
                 <p>If you have any questions, feel free to reach out to us at {club_inbox}</p>\
                 <p style=\"margin-top: 30px;\">Best regards,<br><strong>AI &amp; ML Club Team</strong><br>Oriental College of Technology</p>\
                 <p style=\"color: #00f5ff; font-style: italic;\">Innovate • Implement • Inspire</p>\
                 </div>"
            ),
        }
    }
}

/// Contact form message
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), RelayError> {
        if !all_present(&[&self.name, &self.email, &self.subject, &self.message]) {
            return Err(RelayError::Validation(REQUIRED_MESSAGE.to_string()));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(RelayError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn club_notification(&self, club_inbox: &str, submitted_at: DateTime<Utc>) -> Email {
        Email {
            to: club_inbox.to_string(),
            subject: format!("Contact Form: {}", self.subject.trim()),
            html: format!(
                "<h2>New Contact Form Submission</h2>\
                 <p><strong>Name:</strong> {}</p>\
                 <p><strong>Email:</strong> {}</p>\
                 <p><strong>Subject:</strong> {}</p>\
                 <p><strong>Message:</strong></p>\
                 <p>{}</p>\
                 <p style=\"color: #666;\">Submitted on: {}</p>",
                escape_html(&self.name),
                escape_html(&self.email),
                escape_html(&self.subject),
                escape_html(&self.message),
                submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
        }
    }
}

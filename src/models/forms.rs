use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Stricter than the relay's check so typos are caught before sending
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
        })
        .is_match(email)
}

/// Validation failure of a single form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "This field is required".to_string(),
        }
    }

    fn invalid_email() -> Self {
        Self {
            field: "email",
            message: "Please enter a valid email address".to_string(),
        }
    }
}

/// Message for `field`, if it failed validation
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

fn check(fields: &[(&'static str, &str)]) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for &(field, value) in fields {
        let value = value.trim();
        if value.is_empty() {
            errors.push(FieldError::required(field));
        } else if field == "email" && !is_valid_email(value) {
            errors.push(FieldError::invalid_email());
        }
    }
    errors
}

/// Membership application as entered on the join screen
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JoinForm {
    pub fullname: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    pub skills: String,
    pub reason: String,
}

impl JoinForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors = check(&[
            ("fullname", self.fullname.as_str()),
            ("email", self.email.as_str()),
            ("branch", self.branch.as_str()),
            ("year", self.year.as_str()),
            ("skills", self.skills.as_str()),
            ("reason", self.reason.as_str()),
        ]);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy with surrounding whitespace removed, as sent to the relay
    pub fn trimmed(&self) -> Self {
        Self {
            fullname: self.fullname.trim().to_string(),
            email: self.email.trim().to_string(),
            branch: self.branch.trim().to_string(),
            year: self.year.trim().to_string(),
            skills: self.skills.trim().to_string(),
            reason: self.reason.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors = check(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ]);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_form() -> JoinForm {
        JoinForm {
            fullname: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            branch: "CSE".to_string(),
            year: "2".to_string(),
            skills: "Python".to_string(),
            reason: "Curious about ML".to_string(),
        }
    }

    #[test]
    fn test_valid_join_form() {
        assert!(join_form().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let form = JoinForm {
            branch: "  ".to_string(),
            ..join_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "branch");
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let form = JoinForm {
            email: "asha@example".to_string(),
            ..join_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            error_for(&errors, "email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(error_for(&errors, "fullname"), None);
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("first.last-1@college.ac.in"));
        assert!(!is_valid_email("first+tag@college.in"));
        assert!(!is_valid_email("name@domain.c"));
    }

    #[test]
    fn test_contact_form_trims_before_sending() {
        let form = ContactForm {
            name: " Ravi ".to_string(),
            email: "ravi@example.com ".to_string(),
            subject: "Hi".to_string(),
            message: "Hello\n".to_string(),
        };
        assert!(form.validate().is_ok());
        let trimmed = form.trimmed();
        assert_eq!(trimmed.name, "Ravi");
        assert_eq!(trimmed.email, "ravi@example.com");
        assert_eq!(trimmed.message, "Hello");
    }

    #[test]
    fn test_empty_contact_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
    }
}

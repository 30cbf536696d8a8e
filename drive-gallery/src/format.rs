use chrono::{DateTime, Utc};

/// Shown instead of a date when the provider gave no creation time
pub const UNKNOWN_DATE_LABEL: &str = "Recently added";

/// Remove a trailing `.ext` (the last dot segment, if it is non-empty)
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos + 1 < filename.len() && !filename[pos + 1..].contains('/') => {
            &filename[..pos]
        }
        _ => filename,
    }
}

/// Turn a filename into a display title.
///
/// Strips the extension, maps `-` and `_` to spaces and title-cases every
/// word (first letter upper, rest lower).
pub fn format_image_name(filename: &str) -> String {
    let base = strip_extension(filename);
    let mut title = String::with_capacity(base.len());
    let mut word_start = true;

    for c in base.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if word_start {
                title.extend(c.to_uppercase());
            } else {
                title.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            title.push(c);
            word_start = true;
        }
    }

    title
}

/// Format a creation time as e.g. `Oct 18, 2026`
pub fn format_date(created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => UNKNOWN_DATE_LABEL.to_string(),
    }
}

//! Client-side throttle for form submissions.
//!
//! Sliding window per form: attempts older than the window are pruned
//! before each check.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const MAX_ATTEMPTS: usize = 3;
pub const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Shared between screens through the Dioxus context
#[derive(Debug, Clone)]
pub struct FormRateLimiter {
    max_attempts: usize,
    window: Duration,
    attempts: Arc<Mutex<HashMap<String, Vec<Instant>>>>,
}

impl Default for FormRateLimiter {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS, WINDOW)
    }
}

impl FormRateLimiter {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            attempts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// True if `key` may submit at `now`
    pub fn can_attempt(&self, key: &str, now: Instant) -> bool {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let Some(times) = attempts.get_mut(key) else {
            return true;
        };
        times.retain(|t| now.saturating_duration_since(*t) < self.window);
        times.len() < self.max_attempts
    }

    pub fn record_attempt(&self, key: &str, now: Instant) {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts.entry(key.to_string()).or_default().push(now);
    }

    /// Check and record in one step; false when the attempt is refused
    pub fn try_attempt(&self, key: &str) -> bool {
        let now = Instant::now();
        if !self.can_attempt(key, now) {
            log::warn!("Rate limit reached for {}", key);
            return false;
        }
        self.record_attempt(key, now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_attempt_is_refused() {
        let limiter = FormRateLimiter::default();
        let start = Instant::now();

        for i in 0..3 {
            let now = start + Duration::from_secs(i);
            assert!(limiter.can_attempt("join", now));
            limiter.record_attempt("join", now);
        }
        assert!(!limiter.can_attempt("join", start + Duration::from_secs(10)));
    }

    #[test]
    fn test_window_slides() {
        let limiter = FormRateLimiter::new(3, Duration::from_secs(60));
        let start = Instant::now();

        for i in 0..3 {
            limiter.record_attempt("join", start + Duration::from_secs(i * 10));
        }
        assert!(!limiter.can_attempt("join", start + Duration::from_secs(59)));
        // First attempt expired
        assert!(limiter.can_attempt("join", start + Duration::from_secs(61)));
    }

    #[test]
    fn test_forms_are_limited_separately() {
        let limiter = FormRateLimiter::new(1, WINDOW);
        assert!(limiter.try_attempt("join"));
        assert!(!limiter.try_attempt("join"));
        assert!(limiter.try_attempt("contact"));
    }

    #[test]
    fn test_clones_share_state() {
        let limiter = FormRateLimiter::new(1, WINDOW);
        let other = limiter.clone();
        assert!(limiter.try_attempt("contact"));
        assert!(!other.try_attempt("contact"));
    }
}

use std::time::{Duration, Instant};

/// Transient acknowledgment message, dropped after a fixed TTL.
///
/// The message has no effect beyond being shown; expiry is checked against a
/// caller-supplied clock so tests never race the wall clock.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    raised_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub const DEFAULT_TTL: Duration = Duration::from_millis(3500);

    pub fn new(message: impl Into<String>) -> Self {
        Self::with_ttl(message, Self::DEFAULT_TTL)
    }

    pub fn with_ttl(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
            ttl,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= self.ttl
    }
}

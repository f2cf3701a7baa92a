use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Token expiry and session lifetimes are always measured against an
/// injected clock so tests can move time forward deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

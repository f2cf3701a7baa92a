use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::account::AccountId;

/// Opaque handle identifying one authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(Uuid);

impl SessionHandle {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Ephemeral binding of a request context to an account.
///
/// `remember` selects the extended lifetime class; the session store owns
/// expiry and never persists sessions beyond its own lifecycle.
#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: AccountId,
    pub remember: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

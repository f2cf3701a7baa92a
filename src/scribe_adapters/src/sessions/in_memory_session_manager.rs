use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::Duration;

use scribe_core::{AccountId, Clock, Session, SessionHandle, SessionManager};

use crate::config::constants::{
    DEFAULT_REMEMBER_SESSION_TTL_DAYS, DEFAULT_SESSION_TTL_HOURS,
};

/// In-memory session store with two lifetime classes: standard and
/// extended ("remember me"). Expired sessions are pruned lazily on lookup.
#[derive(Clone)]
pub struct InMemorySessionManager<K> {
    sessions: Arc<RwLock<HashMap<SessionHandle, Session>>>,
    clock: K,
    standard_ttl: Duration,
    extended_ttl: Duration,
}

impl<K: Clock> InMemorySessionManager<K> {
    pub fn new(clock: K) -> Self {
        Self::with_lifetimes(
            clock,
            Duration::hours(DEFAULT_SESSION_TTL_HOURS),
            Duration::days(DEFAULT_REMEMBER_SESSION_TTL_DAYS),
        )
    }

    pub fn with_lifetimes(clock: K, standard_ttl: Duration, extended_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            clock,
            standard_ttl,
            extended_ttl,
        }
    }
}

#[async_trait::async_trait]
impl<K: Clock> SessionManager for InMemorySessionManager<K> {
    async fn start(&self, account_id: AccountId, remember: bool) -> SessionHandle {
        let handle = SessionHandle::new();
        let now = self.clock.now();
        let ttl = if remember {
            self.extended_ttl
        } else {
            self.standard_ttl
        };

        let session = Session {
            account_id,
            remember,
            created_at: now,
            expires_at: now + ttl,
        };
        self.sessions.write().await.insert(handle, session);
        handle
    }

    async fn current_account(&self, handle: &SessionHandle) -> Option<AccountId> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(handle) {
                Some(session) if session.expires_at > self.clock.now() => {
                    return Some(session.account_id);
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: prune under the write lock.
        self.sessions.write().await.remove(handle);
        None
    }

    async fn end(&self, handle: &SessionHandle) {
        self.sessions.write().await.remove(handle);
    }
}

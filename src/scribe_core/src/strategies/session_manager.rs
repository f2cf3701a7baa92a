use async_trait::async_trait;

use crate::domain::{account::AccountId, session::SessionHandle};

/// Maps authenticated principals to request-scoped sessions.
///
/// Two lifetime classes exist: standard, and extended ("remember me").
/// Multiple simultaneous sessions per account are permitted.
#[async_trait]
pub trait SessionManager: Send + Sync {
    async fn start(&self, account_id: AccountId, remember: bool) -> SessionHandle;

    /// `None` for unknown, ended or expired handles.
    async fn current_account(&self, handle: &SessionHandle) -> Option<AccountId>;

    async fn end(&self, handle: &SessionHandle);
}

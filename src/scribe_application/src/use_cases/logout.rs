use scribe_core::{SessionHandle, SessionManager};

/// Logout use case - ends a session. Ending an unknown or already-expired
/// handle is a no-op.
pub struct LogoutUseCase<'a, M>
where
    M: SessionManager,
{
    session_manager: &'a M,
}

impl<'a, M> LogoutUseCase<'a, M>
where
    M: SessionManager,
{
    pub fn new(session_manager: &'a M) -> Self {
        Self { session_manager }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, handle: &SessionHandle) {
        self.session_manager.end(handle).await;
    }
}

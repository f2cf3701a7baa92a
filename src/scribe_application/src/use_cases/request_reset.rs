use chrono::Duration;
use secrecy::ExposeSecret;

use scribe_core::{
    AccountStore, AccountStoreError, Email, NotificationSink, ResetTokenCodec,
};

/// Error types for reset request use case
#[derive(Debug, thiserror::Error)]
pub enum RequestResetError {
    #[error("There is no account with that email")]
    UnknownAccount,
    #[error("Failed to send reset email: {0}")]
    DeliveryError(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Reset request use case - issues a signed reset token and dispatches it.
///
/// No server-side record of outstanding tokens is kept; the token itself
/// carries the account id and expiry.
pub struct RequestResetUseCase<'a, S, C, N>
where
    S: AccountStore,
    C: ResetTokenCodec,
    N: NotificationSink,
{
    account_store: &'a S,
    token_codec: &'a C,
    notification_sink: &'a N,
}

impl<'a, S, C, N> RequestResetUseCase<'a, S, C, N>
where
    S: AccountStore,
    C: ResetTokenCodec,
    N: NotificationSink,
{
    pub fn new(account_store: &'a S, token_codec: &'a C, notification_sink: &'a N) -> Self {
        Self {
            account_store,
            token_codec,
            notification_sink,
        }
    }

    /// Unlike login, this reports when no account matches the address.
    #[tracing::instrument(name = "RequestResetUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        email: Email,
        reset_link_base: &str,
        ttl: Duration,
    ) -> Result<(), RequestResetError> {
        let account = match self.account_store.find_by_email(&email).await {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound) => {
                return Err(RequestResetError::UnknownAccount);
            }
            Err(other) => return Err(RequestResetError::UnexpectedError(other.to_string())),
        };

        let token = self
            .token_codec
            .issue(account.id(), ttl)
            .map_err(|e| RequestResetError::UnexpectedError(e.to_string()))?;

        let link = format!("{reset_link_base}/reset-password/{token}");
        let content = format!(
            "To reset your password, visit the following link:\n{link}\n\n\
             If you did not make this request, ignore this message and no \
             changes will be made."
        );

        tracing::debug!(
            recipient = account.email().as_ref().expose_secret(),
            "dispatching password reset link"
        );

        self.notification_sink
            .deliver(account.email(), "Password Reset Request", &content)
            .await
            .map_err(RequestResetError::DeliveryError)?;

        Ok(())
    }
}

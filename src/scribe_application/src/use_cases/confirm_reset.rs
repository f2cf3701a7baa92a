use secrecy::{ExposeSecret, Secret};

use scribe_core::{
    AccountStore, AccountStoreError, Password, PasswordError, PasswordHasher, ResetTokenCodec,
};

/// Error types for confirm reset use case
#[derive(Debug, thiserror::Error)]
pub enum ConfirmResetError {
    #[error("That is an invalid or expired token")]
    InvalidToken,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error(transparent)]
    InvalidPassword(#[from] PasswordError),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Confirm reset use case - verifies the token and sets a new password.
///
/// The token is judged before anything is read from the passwords, so a bad
/// token wins over any password problem. Changing the password does not
/// invalidate other tokens issued before it; there is no revocation list.
pub struct ConfirmResetUseCase<'a, S, C, H>
where
    S: AccountStore,
    C: ResetTokenCodec,
    H: PasswordHasher,
{
    account_store: &'a S,
    token_codec: &'a C,
    password_hasher: &'a H,
}

impl<'a, S, C, H> ConfirmResetUseCase<'a, S, C, H>
where
    S: AccountStore,
    C: ResetTokenCodec,
    H: PasswordHasher,
{
    pub fn new(account_store: &'a S, token_codec: &'a C, password_hasher: &'a H) -> Self {
        Self {
            account_store,
            token_codec,
            password_hasher,
        }
    }

    #[tracing::instrument(
        name = "ConfirmResetUseCase::execute",
        skip(self, token, new_password, confirm_password)
    )]
    pub async fn execute(
        &self,
        token: &str,
        new_password: Secret<String>,
        confirm_password: Secret<String>,
    ) -> Result<(), ConfirmResetError> {
        let account_id = match self.token_codec.verify(token) {
            Ok(account_id) => account_id,
            Err(cause) => {
                // The cause stays in the logs; the caller sees one message
                // for malformed, forged and expired tokens alike.
                tracing::info!(%cause, "password reset token rejected");
                return Err(ConfirmResetError::InvalidToken);
            }
        };

        if new_password.expose_secret() != confirm_password.expose_secret() {
            return Err(ConfirmResetError::PasswordMismatch);
        }

        let new_password = Password::try_from(new_password)?;

        let password_hash = self
            .password_hasher
            .hash_password(&new_password)
            .await
            .map_err(|e| ConfirmResetError::UnexpectedError(e.to_string()))?;

        match self
            .account_store
            .set_password_hash(account_id, password_hash)
            .await
        {
            Ok(()) => Ok(()),
            // A token naming a vanished account verifies but matches
            // nothing; fail closed.
            Err(AccountStoreError::AccountNotFound) => Err(ConfirmResetError::InvalidToken),
            Err(other) => Err(ConfirmResetError::UnexpectedError(other.to_string())),
        }
    }
}

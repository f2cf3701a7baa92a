use scribe_core::{AccountId, AccountStore, AccountStoreError, Email};

/// Error types for update email use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateEmailError {
    #[error("That email is taken")]
    EmailTaken,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<AccountStoreError> for UpdateEmailError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::EmailTaken => Self::EmailTaken,
            AccountStoreError::AccountNotFound => Self::AccountNotFound,
            other => Self::UnexpectedError(other.to_string()),
        }
    }
}

/// Update email use case - changes the address of the authenticated account
pub struct UpdateEmailUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> UpdateEmailUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// When the new address equals the current one the uniqueness lookup is
    /// skipped; otherwise the same pre-check as registration runs, and the
    /// store's own guard still decides races.
    #[tracing::instrument(name = "UpdateEmailUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        new_email: Email,
    ) -> Result<(), UpdateEmailError> {
        let account = self.account_store.find_by_id(account_id).await?;

        if account.email() == &new_email {
            return Ok(());
        }

        match self.account_store.find_by_email(&new_email).await {
            Ok(_) => return Err(UpdateEmailError::EmailTaken),
            Err(AccountStoreError::AccountNotFound) => {}
            Err(other) => return Err(other.into()),
        }

        self.account_store.update_email(account_id, new_email).await?;

        Ok(())
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountId},
    email::Email,
    password::HashedPassword,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("That email is taken")]
    EmailTaken,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailTaken, Self::EmailTaken) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Storage collaborator for accounts.
///
/// Implementations are the authoritative guard for email uniqueness:
/// `insert_account` and `update_email` must reject an address already held
/// by a different account, regardless of any pre-check the caller ran.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert_account(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError>;
    async fn update_email(&self, id: AccountId, new_email: Email)
    -> Result<(), AccountStoreError>;
    async fn set_password_hash(
        &self,
        id: AccountId,
        password_hash: HashedPassword,
    ) -> Result<(), AccountStoreError>;
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use scribe_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, HashedPassword,
};

/// In-memory account store.
///
/// All operations take one lock over both maps, so check-then-insert is
/// atomic here: this store is the authoritative uniqueness guard the ports
/// contract requires.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    accounts: HashMap<AccountId, Account>,
    email_index: HashMap<Email, AccountId>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn insert_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut inner = self.inner.write().await;
        if inner.email_index.contains_key(account.email()) {
            return Err(AccountStoreError::EmailTaken);
        }
        inner
            .email_index
            .insert(account.email().clone(), account.id());
        inner.accounts.insert(account.id(), account);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let inner = self.inner.read().await;
        inner
            .email_index
            .get(email)
            .and_then(|id| inner.accounts.get(id))
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountStoreError> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .get(&id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update_email(
        &self,
        id: AccountId,
        new_email: Email,
    ) -> Result<(), AccountStoreError> {
        let mut inner = self.inner.write().await;
        if let Some(holder) = inner.email_index.get(&new_email) {
            if *holder != id {
                return Err(AccountStoreError::EmailTaken);
            }
        }
        let old_email = inner
            .accounts
            .get(&id)
            .map(|account| account.email().clone())
            .ok_or(AccountStoreError::AccountNotFound)?;

        inner.email_index.remove(&old_email);
        inner.email_index.insert(new_email.clone(), id);
        if let Some(account) = inner.accounts.get_mut(&id) {
            account.set_email(new_email);
        }
        Ok(())
    }

    async fn set_password_hash(
        &self,
        id: AccountId,
        password_hash: HashedPassword,
    ) -> Result<(), AccountStoreError> {
        let mut inner = self.inner.write().await;
        let account = inner
            .accounts
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.set_password_hash(password_hash);
        Ok(())
    }
}

use scribe_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, Password, PasswordHasher,
    PasswordHasherError, Role,
};

/// Error types for register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("That email is taken")]
    EmailTaken,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<AccountStoreError> for RegisterError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::EmailTaken => Self::EmailTaken,
            other => Self::UnexpectedError(other.to_string()),
        }
    }
}

impl From<PasswordHasherError> for RegisterError {
    fn from(error: PasswordHasherError) -> Self {
        Self::UnexpectedError(error.to_string())
    }
}

/// Register use case - creates a new account
pub struct RegisterUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> RegisterUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    pub fn new(account_store: &'a S, password_hasher: &'a H) -> Self {
        Self {
            account_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// The lookup below is a pre-check for a friendlier error; the store's
    /// own uniqueness guard is authoritative, and a duplicate surfaced by
    /// the insert maps to the same `EmailTaken`.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        role: Role,
    ) -> Result<AccountId, RegisterError> {
        match self.account_store.find_by_email(&email).await {
            Ok(_) => return Err(RegisterError::EmailTaken),
            Err(AccountStoreError::AccountNotFound) => {}
            Err(other) => return Err(other.into()),
        }

        let password_hash = self.password_hasher.hash_password(&password).await?;
        let account = Account::new(email, password_hash, role);
        let account_id = account.id();

        self.account_store.insert_account(account).await?;

        Ok(account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use scribe_core::HashedPassword;

    // Mock account store for testing
    #[derive(Clone, Default)]
    struct MockAccountStore {
        accounts: Arc<RwLock<HashMap<String, Account>>>,
    }

    #[async_trait::async_trait]
    impl AccountStore for MockAccountStore {
        async fn insert_account(&self, account: Account) -> Result<(), AccountStoreError> {
            let email = account.email().as_ref().expose_secret().clone();
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&email) {
                return Err(AccountStoreError::EmailTaken);
            }
            accounts.insert(email, account);
            Ok(())
        }

        async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
            let accounts = self.accounts.read().await;
            accounts
                .get(email.as_ref().expose_secret())
                .cloned()
                .ok_or(AccountStoreError::AccountNotFound)
        }

        async fn find_by_id(&self, _id: AccountId) -> Result<Account, AccountStoreError> {
            unimplemented!()
        }

        async fn update_email(
            &self,
            _id: AccountId,
            _new_email: Email,
        ) -> Result<(), AccountStoreError> {
            unimplemented!()
        }

        async fn set_password_hash(
            &self,
            _id: AccountId,
            _password_hash: HashedPassword,
        ) -> Result<(), AccountStoreError> {
            unimplemented!()
        }
    }

    #[derive(Clone)]
    struct MockPasswordHasher;

    #[async_trait::async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(
            &self,
            password: &Password,
        ) -> Result<HashedPassword, PasswordHasherError> {
            let digest = format!("hashed:{}", password.as_ref().expose_secret());
            Ok(HashedPassword::from(Secret::from(digest)))
        }

        async fn verify_password(
            &self,
            candidate: &Password,
            stored: &HashedPassword,
        ) -> Result<bool, PasswordHasherError> {
            let expected = format!("hashed:{}", candidate.as_ref().expose_secret());
            Ok(stored.as_ref().expose_secret() == &expected)
        }
    }

    fn parts() -> (Email, Password, Role) {
        let email = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let password = Password::try_from(Secret::from("password123".to_string())).unwrap();
        let role = Role::try_from("client".to_string()).unwrap();
        (email, password, role)
    }

    #[tokio::test]
    async fn test_register_success_stores_hash_not_plaintext() {
        let account_store = MockAccountStore::default();
        let hasher = MockPasswordHasher;
        let use_case = RegisterUseCase::new(&account_store, &hasher);

        let (email, password, role) = parts();
        let account_id = use_case
            .execute(email.clone(), password, role)
            .await
            .unwrap();

        let stored = account_store.find_by_email(&email).await.unwrap();
        assert_eq!(stored.id(), account_id);
        assert_eq!(
            stored.password_hash().as_ref().expose_secret(),
            "hashed:password123"
        );
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let account_store = MockAccountStore::default();
        let hasher = MockPasswordHasher;
        let use_case = RegisterUseCase::new(&account_store, &hasher);

        let (email, password, role) = parts();
        use_case
            .execute(email.clone(), password.clone(), role.clone())
            .await
            .unwrap();

        let result = use_case.execute(email, password, role).await;
        assert!(matches!(result, Err(RegisterError::EmailTaken)));
    }
}

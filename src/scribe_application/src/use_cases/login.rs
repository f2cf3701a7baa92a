use scribe_core::{
    AccountStore, AccountStoreError, Email, Password, PasswordHasher, PasswordHasherError,
    SessionHandle, SessionManager,
};

/// Error types for login use case.
///
/// `InvalidCredentials` deliberately covers both "no such account" and
/// "wrong password"; callers must not distinguish them.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Login use case - authenticates credentials and starts a session
pub struct LoginUseCase<'a, S, H, M>
where
    S: AccountStore,
    H: PasswordHasher,
    M: SessionManager,
{
    account_store: &'a S,
    password_hasher: &'a H,
    session_manager: &'a M,
}

impl<'a, S, H, M> LoginUseCase<'a, S, H, M>
where
    S: AccountStore,
    H: PasswordHasher,
    M: SessionManager,
{
    pub fn new(account_store: &'a S, password_hasher: &'a H, session_manager: &'a M) -> Self {
        Self {
            account_store,
            password_hasher,
            session_manager,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        remember: bool,
    ) -> Result<SessionHandle, LoginError> {
        let account = match self.account_store.find_by_email(&email).await {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound) => return Err(LoginError::InvalidCredentials),
            Err(other) => return Err(LoginError::UnexpectedError(other.to_string())),
        };

        let verified = match self
            .password_hasher
            .verify_password(&password, account.password_hash())
            .await
        {
            Ok(verified) => verified,
            Err(PasswordHasherError::MalformedHash) => {
                // Data-integrity condition: surface to the operator, show
                // the user the same generic failure as a wrong password.
                tracing::error!(
                    account_id = %account.id(),
                    "stored password hash failed to parse"
                );
                false
            }
            Err(other) => return Err(LoginError::UnexpectedError(other.to_string())),
        };

        if !verified {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(self.session_manager.start(account.id(), remember).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use scribe_core::{Account, AccountId, HashedPassword, Role};

    #[derive(Clone)]
    struct MockAccountStore {
        account: Account,
    }

    #[async_trait::async_trait]
    impl AccountStore for MockAccountStore {
        async fn insert_account(&self, _account: Account) -> Result<(), AccountStoreError> {
            unimplemented!()
        }

        async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
            if email == self.account.email() {
                Ok(self.account.clone())
            } else {
                Err(AccountStoreError::AccountNotFound)
            }
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
            let stored = stored.as_ref().expose_secret();
            if !stored.starts_with("hashed:") {
                return Err(PasswordHasherError::MalformedHash);
            }
            let expected = format!("hashed:{}", candidate.as_ref().expose_secret());
            Ok(stored == &expected)
        }
    }

    #[derive(Clone, Default)]
    struct MockSessionManager {
        sessions: Arc<RwLock<HashMap<SessionHandle, AccountId>>>,
    }

    #[async_trait::async_trait]
    impl SessionManager for MockSessionManager {
        async fn start(&self, account_id: AccountId, _remember: bool) -> SessionHandle {
            let handle = SessionHandle::new();
            self.sessions.write().await.insert(handle, account_id);
            handle
        }

        async fn current_account(&self, handle: &SessionHandle) -> Option<AccountId> {
            self.sessions.read().await.get(handle).copied()
        }

        async fn end(&self, handle: &SessionHandle) {
            self.sessions.write().await.remove(handle);
        }
    }

    fn account_with_hash(hash: &str) -> Account {
        let email = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let role = Role::try_from("writer".to_string()).unwrap();
        Account::new(
            email,
            HashedPassword::from(Secret::from(hash.to_string())),
            role,
        )
    }

    #[tokio::test]
    async fn test_login_success_starts_session() {
        let account_store = MockAccountStore {
            account: account_with_hash("hashed:password123"),
        };
        let sessions = MockSessionManager::default();
        let use_case = LoginUseCase::new(&account_store, &MockPasswordHasher, &sessions);

        let email = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let password = Password::try_from(Secret::from("password123".to_string())).unwrap();

        let handle = use_case.execute(email, password, false).await.unwrap();
        assert_eq!(
            sessions.current_account(&handle).await,
            Some(account_store.account.id())
        );
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let account_store = MockAccountStore {
            account: account_with_hash("hashed:password123"),
        };
        let sessions = MockSessionManager::default();
        let use_case = LoginUseCase::new(&account_store, &MockPasswordHasher, &sessions);

        let known = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let unknown = Email::try_from(Secret::from("nobody@example.com".to_string())).unwrap();
        let wrong = Password::try_from(Secret::from("wrong".to_string())).unwrap();

        let r1 = use_case.execute(known, wrong.clone(), false).await;
        let r2 = use_case.execute(unknown, wrong, false).await;

        assert!(matches!(r1, Err(LoginError::InvalidCredentials)));
        assert!(matches!(r2, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_malformed_stored_hash_reads_as_invalid_credentials() {
        let account_store = MockAccountStore {
            account: account_with_hash("garbage"),
        };
        let sessions = MockSessionManager::default();
        let use_case = LoginUseCase::new(&account_store, &MockPasswordHasher, &sessions);

        let email = Email::try_from(Secret::from("test@example.com".to_string())).unwrap();
        let password = Password::try_from(Secret::from("password123".to_string())).unwrap();

        let result = use_case.execute(email, password, false).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }
}

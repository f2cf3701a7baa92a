use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use scribe_core::{HashedPassword, Password, PasswordHasher, PasswordHasherError};

/// Argon2id password hasher. Hashing is CPU-bound by design, so both
/// operations run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    fn argon2() -> Result<Argon2<'static>, PasswordHasherError> {
        let params = Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(
        &self,
        password: &Password,
    ) -> Result<HashedPassword, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                Self::argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::from(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(
        &self,
        candidate: &Password,
        stored: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let candidate = candidate.clone();
        let stored = stored.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed: PasswordHash<'_> = PasswordHash::new(stored.as_ref().expose_secret())
                    .map_err(|_| PasswordHasherError::MalformedHash)?;

                match Self::argon2()?
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &parsed)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(value: &str) -> Password {
        Password::try_from(Secret::from(value.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_hash_round_trip() {
        let hasher = Argon2PasswordHasher::new();
        let pw = password("correct horse battery staple");

        let hash = hasher.hash_password(&pw).await.unwrap();
        assert!(hasher.verify_password(&pw, &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash_password(&password("pw1")).await.unwrap();

        assert!(!hasher.verify_password(&password("pw2"), &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashing_is_salted() {
        let hasher = Argon2PasswordHasher::new();
        let pw = password("pw1");

        let first = hasher.hash_password(&pw).await.unwrap();
        let second = hasher.hash_password(&pw).await.unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password(&pw, &first).await.unwrap());
        assert!(hasher.verify_password(&pw, &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_stored_hash_is_reported() {
        let hasher = Argon2PasswordHasher::new();
        let garbage = HashedPassword::from(Secret::from("not-a-phc-string".to_string()));

        let result = hasher.verify_password(&password("pw1"), &garbage).await;
        assert!(matches!(result, Err(PasswordHasherError::MalformedHash)));
    }
}

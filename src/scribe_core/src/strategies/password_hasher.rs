use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{HashedPassword, Password};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Stored password hash is malformed")]
    MalformedHash,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for PasswordHasherError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedHash, Self::MalformedHash) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// One-way salted password digest and verification.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a randomized digest; two calls on the same password yield
    /// different outputs.
    async fn hash_password(&self, password: &Password)
    -> Result<HashedPassword, PasswordHasherError>;

    /// `Ok(false)` on mismatch. `Err(MalformedHash)` when the stored hash
    /// fails to parse; the caller must report that as a data-integrity
    /// condition rather than show it to the user.
    async fn verify_password(
        &self,
        candidate: &Password,
        stored: &HashedPassword,
    ) -> Result<bool, PasswordHasherError>;
}

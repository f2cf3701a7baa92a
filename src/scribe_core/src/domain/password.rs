use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// A plaintext password, kept wrapped until it reaches the hasher.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        if raw.expose_secret().is_empty() {
            return Err(PasswordError::Missing);
        }
        Ok(Self(raw))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

/// The stored one-way digest of a password, opaque to everything but the
/// hasher that produced it.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl From<Secret<String>> for HashedPassword {
    fn from(raw: Secret<String>) -> Self {
        Self(raw)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for HashedPassword {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

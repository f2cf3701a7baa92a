use thiserror::Error;
use uuid::Uuid;

use crate::domain::{email::Email, password::HashedPassword, role::Role};

/// Opaque account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

#[derive(Debug, Error, PartialEq)]
#[error("Account id is not valid")]
pub struct AccountIdError;

impl AccountId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(raw).map(Self).map_err(|_| AccountIdError)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered identity: email, hashed password and marketplace role.
/// Exactly one account exists per email address.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    email: Email,
    password_hash: HashedPassword,
    role: Role,
}

impl Account {
    pub fn new(email: Email, password_hash: HashedPassword, role: Role) -> Self {
        Self {
            id: AccountId::new(),
            email,
            password_hash,
            role,
        }
    }

    /// Reconstruct an account from stored parts.
    pub fn parse(id: AccountId, email: Email, password_hash: HashedPassword, role: Role) -> Self {
        Self {
            id,
            email,
            password_hash,
            role,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn set_password_hash(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
    }
}

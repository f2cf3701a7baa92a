use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// A validated email address.
///
/// Addresses are trimmed and lowercased at parse time, so uniqueness checks
/// downstream are case-insensitive.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("Email address is required")]
    Missing,
    #[error("Email address is not valid")]
    Invalid,
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = raw.expose_secret().trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(EmailError::Missing);
        }
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(Secret::from(normalized)))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

use chrono::Duration;
use thiserror::Error;

use crate::domain::account::AccountId;

/// Default lifetime of a password-reset token.
pub const DEFAULT_RESET_TOKEN_TTL_SECONDS: i64 = 1800;

/// Why a token failed verification. Distinguishable internally for
/// diagnostics; callers collapse all three to one user-visible outcome.
#[derive(Debug, Error, PartialEq)]
pub enum ResetTokenError {
    #[error("Token is malformed")]
    Malformed,
    #[error("Token signature is invalid")]
    BadSignature,
    #[error("Token has expired")]
    Expired,
}

#[derive(Debug, Error)]
#[error("Failed to issue reset token: {0}")]
pub struct ResetTokenIssueError(pub String);

/// Signs and verifies the self-contained password-reset claim
/// `{account id, expiry}`. No server-side record of outstanding tokens is
/// kept; the signature and expiry are the whole story.
pub trait ResetTokenCodec: Send + Sync {
    fn issue(&self, account_id: AccountId, ttl: Duration)
    -> Result<String, ResetTokenIssueError>;

    /// Fails closed: any decode error, signature mismatch or expiry is an
    /// error, never a partial decode.
    fn verify(&self, token: &str) -> Result<AccountId, ResetTokenError>;
}

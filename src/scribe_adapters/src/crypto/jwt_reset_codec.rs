use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use scribe_core::{
    AccountId, Clock, ResetTokenCodec, ResetTokenError, ResetTokenIssueError,
};

/// Signed, self-contained reset token: a JWT carrying the account id and an
/// absolute expiry. Rotating the secret invalidates all outstanding tokens.
#[derive(Clone)]
pub struct JwtResetCodec<K> {
    secret: Secret<String>,
    clock: K,
}

#[derive(Debug, Serialize, Deserialize)]
struct ResetClaims {
    sub: String,
    exp: i64,
}

impl<K> JwtResetCodec<K> {
    pub fn new(secret: Secret<String>, clock: K) -> Self {
        Self { secret, clock }
    }
}

impl<K: Clock> ResetTokenCodec for JwtResetCodec<K> {
    fn issue(
        &self,
        account_id: AccountId,
        ttl: chrono::Duration,
    ) -> Result<String, ResetTokenIssueError> {
        let exp = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or_else(|| ResetTokenIssueError("expiry out of range".to_string()))?
            .timestamp();

        let claims = ResetClaims {
            sub: account_id.to_string(),
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| ResetTokenIssueError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<AccountId, ResetTokenError> {
        // Expiry is enforced against the injected clock below, not by the
        // JWT library's wall clock.
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let data = decode::<ResetClaims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => ResetTokenError::BadSignature,
            _ => ResetTokenError::Malformed,
        })?;

        if data.claims.exp <= self.clock.now().timestamp() {
            return Err(ResetTokenError::Expired);
        }

        AccountId::parse(&data.claims.sub).map_err(|_| ResetTokenError::Malformed)
    }
}

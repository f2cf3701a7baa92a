use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use super::constants;

/// Process-wide configuration, loaded once at startup.
///
/// Values come from the environment with the `SCRIBE` prefix and `__` as
/// section separator, e.g. `SCRIBE__AUTH__RESET_TOKEN_SECRET`. A `.env`
/// file is honored when present.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub auth: AuthSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Signing secret for reset tokens. Rotating it invalidates all
    /// outstanding tokens.
    pub reset_token_secret: Secret<String>,
    pub reset_token_ttl_seconds: i64,
    pub session_ttl_hours: i64,
    pub remember_session_ttl_days: i64,
    /// Base URL the reset link is built from.
    pub reset_link_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_millis)
    }
}

impl Settings {
    /// Read configuration from the process environment, falling back to
    /// the defaults in `constants` for everything optional.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default(
                "auth.reset_token_ttl_seconds",
                constants::DEFAULT_RESET_TOKEN_TTL_SECONDS,
            )?
            .set_default("auth.session_ttl_hours", constants::DEFAULT_SESSION_TTL_HOURS)?
            .set_default(
                "auth.remember_session_ttl_days",
                constants::DEFAULT_REMEMBER_SESSION_TTL_DAYS,
            )?
            .set_default("email_client.base_url", constants::prod::email_client::BASE_URL)?
            .set_default(
                "email_client.timeout_millis",
                constants::prod::email_client::TIMEOUT.as_millis() as u64,
            )?
            .add_source(Environment::with_prefix("SCRIBE").separator("__"))
            .build()?
            .try_deserialize()
    }
}

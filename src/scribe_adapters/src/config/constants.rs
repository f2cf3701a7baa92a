pub mod env {
    pub const RESET_TOKEN_SECRET_ENV_VAR: &str = "SCRIBE__AUTH__RESET_TOKEN_SECRET";
    pub const POSTMARK_AUTH_TOKEN_ENV_VAR: &str = "SCRIBE__EMAIL_CLIENT__AUTH_TOKEN";
}

pub use scribe_core::DEFAULT_RESET_TOKEN_TTL_SECONDS;

/// Standard session lifetime.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 12;

/// Extended "remember me" session lifetime.
pub const DEFAULT_REMEMBER_SESSION_TTL_DAYS: i64 = 30;

pub mod prod {
    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}

pub mod config;
pub mod crypto;
pub mod notification;
pub mod persistence;
pub mod sessions;

pub use config::settings::Settings;
pub use crypto::{argon2_password_hasher::Argon2PasswordHasher, jwt_reset_codec::JwtResetCodec};
pub use notification::{
    mock_notification_sink::MockNotificationSink,
    postmark_notification_sink::PostmarkNotificationSink,
};
pub use persistence::hashmap_account_store::HashMapAccountStore;
pub use sessions::in_memory_session_manager::InMemorySessionManager;

pub mod clock;
pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, AccountIdError},
    email::{Email, EmailError},
    password::{HashedPassword, Password, PasswordError},
    role::{Role, RoleError},
    session::{Session, SessionHandle},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::NotificationSink,
};

pub use strategies::{
    password_hasher::{PasswordHasher, PasswordHasherError},
    reset_token_codec::{
        DEFAULT_RESET_TOKEN_TTL_SECONDS, ResetTokenCodec, ResetTokenError, ResetTokenIssueError,
    },
    session_manager::SessionManager,
};

pub use clock::{Clock, SystemClock};

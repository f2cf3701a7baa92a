//! # Scribe - Credential and Session Management Library
//!
//! This is a facade crate that re-exports all public APIs from the scribe auth components.
//! Use this crate to get access to all credential and session functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! scribe = { path = "../scribe" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `Role`, etc.
//! - **Port traits**: `AccountStore`, `PasswordHasher`, `ResetTokenCodec`, `SessionManager`, `NotificationSink`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `HashMapAccountStore`, `Argon2PasswordHasher`, `JwtResetCodec`, `PostmarkNotificationSink`, etc.
//! - **Service**: `AuthService` - The main entry point for credential operations

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use scribe_core::*;
}

// Re-export most commonly used core types at the root level
pub use scribe_core::{
    Account, AccountId, Email, EmailError, HashedPassword, Password, PasswordError, Role,
    SessionHandle,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use scribe_core::{
        AccountStore, AccountStoreError, Clock, NotificationSink, PasswordHasher,
        PasswordHasherError, ResetTokenCodec, ResetTokenError, SessionManager,
    };
}

// Re-export port traits at root level
pub use scribe_core::{
    AccountStore, AccountStoreError, Clock, NotificationSink, PasswordHasher, PasswordHasherError,
    ResetTokenCodec, ResetTokenError, SessionManager, SystemClock,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use scribe_application::*;
}

// Re-export use cases at root level
pub use scribe_application::{
    ConfirmResetUseCase, FieldViolation, LoginUseCase, LogoutUseCase, RegisterUseCase,
    RequestResetUseCase, UpdateEmailUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use scribe_adapters::persistence::*;
    }

    /// Password hashing and token implementations
    pub mod crypto {
        pub use scribe_adapters::crypto::*;
    }

    /// Session management implementations
    pub mod sessions {
        pub use scribe_adapters::sessions::*;
    }

    /// Notification sink implementations
    pub mod notification {
        pub use scribe_adapters::notification::*;
    }

    /// Configuration
    pub mod config {
        pub use scribe_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use scribe_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, InMemorySessionManager, JwtResetCodec,
    MockNotificationSink, PostmarkNotificationSink, Settings,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use scribe_auth_service::{
    AuthError, AuthService, ConfirmResetRequest, LoginRequest, RegisterRequest,
    RequestResetRequest, UpdateEmailRequest, init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export chrono for durations and timestamps used in the public API
pub use chrono::{DateTime, Duration, Utc};

pub mod auth_service;
pub mod error;
pub mod telemetry;

pub use auth_service::{
    AuthService, ConfirmResetRequest, LoginRequest, RegisterRequest, RequestResetRequest,
    UpdateEmailRequest,
};
pub use error::AuthError;
pub use telemetry::init_tracing;

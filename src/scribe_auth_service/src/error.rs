use thiserror::Error;

use scribe_application::{
    ConfirmResetError, FieldViolation, LoginError, RegisterError, RequestResetError,
    UpdateEmailError,
};

/// The fixed set of failure kinds crossing the service boundary.
///
/// Everything below the boundary is converted here; no raw storage or
/// crypto error leaves unwrapped, and credential/token sub-causes are never
/// user-distinguishable.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid input")]
    InvalidInput(Vec<FieldViolation>),
    #[error("That email is taken")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("There is no account with that email")]
    UnknownAccount,
    #[error("That is an invalid or expired token")]
    InvalidOrExpiredToken,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::EmailTaken, Self::EmailTaken) => true,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::UnknownAccount, Self::UnknownAccount) => true,
            (Self::InvalidOrExpiredToken, Self::InvalidOrExpiredToken) => true,
            (Self::PasswordMismatch, Self::PasswordMismatch) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

impl From<RegisterError> for AuthError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailTaken => Self::EmailTaken,
            RegisterError::UnexpectedError(e) => Self::UnexpectedError(e),
        }
    }
}

impl From<LoginError> for AuthError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => Self::InvalidCredentials,
            LoginError::UnexpectedError(e) => Self::UnexpectedError(e),
        }
    }
}

impl From<UpdateEmailError> for AuthError {
    fn from(error: UpdateEmailError) -> Self {
        match error {
            UpdateEmailError::EmailTaken => Self::EmailTaken,
            // The principal was authenticated, so a missing row is a store
            // inconsistency rather than a user-facing not-found.
            UpdateEmailError::AccountNotFound => {
                Self::UnexpectedError("authenticated account missing from store".to_string())
            }
            UpdateEmailError::UnexpectedError(e) => Self::UnexpectedError(e),
        }
    }
}

impl From<RequestResetError> for AuthError {
    fn from(error: RequestResetError) -> Self {
        match error {
            RequestResetError::UnknownAccount => Self::UnknownAccount,
            RequestResetError::DeliveryError(e) => Self::UnexpectedError(e),
            RequestResetError::UnexpectedError(e) => Self::UnexpectedError(e),
        }
    }
}

impl From<ConfirmResetError> for AuthError {
    fn from(error: ConfirmResetError) -> Self {
        match error {
            ConfirmResetError::InvalidToken => Self::InvalidOrExpiredToken,
            ConfirmResetError::PasswordMismatch => Self::PasswordMismatch,
            ConfirmResetError::InvalidPassword(e) => {
                Self::InvalidInput(vec![FieldViolation::new("password", e.to_string())])
            }
            ConfirmResetError::UnexpectedError(e) => Self::UnexpectedError(e),
        }
    }
}

pub mod use_cases;
pub mod validation;

pub use use_cases::{
    confirm_reset::{ConfirmResetError, ConfirmResetUseCase},
    login::{LoginError, LoginUseCase},
    logout::LogoutUseCase,
    register::{RegisterError, RegisterUseCase},
    request_reset::{RequestResetError, RequestResetUseCase},
    update_email::{UpdateEmailError, UpdateEmailUseCase},
};

pub use validation::{FieldViolation, validate_email_update, validate_registration};

use chrono::Duration;
use secrecy::Secret;
use serde::Deserialize;

use scribe_application::{
    ConfirmResetUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase, RequestResetUseCase,
    UpdateEmailUseCase, validate_email_update, validate_registration,
};
use scribe_core::{
    AccountId, AccountStore, DEFAULT_RESET_TOKEN_TTL_SECONDS, Email, NotificationSink, Password,
    PasswordHasher, ResetTokenCodec, Role, SessionHandle, SessionManager,
};

use crate::error::AuthError;

/// Credential and session management facade.
///
/// All collaborators are passed at construction; nothing is resolved from
/// ambient global state.
pub struct AuthService<S, H, C, M, N>
where
    S: AccountStore,
    H: PasswordHasher,
    C: ResetTokenCodec,
    M: SessionManager,
    N: NotificationSink,
{
    account_store: S,
    password_hasher: H,
    token_codec: C,
    session_manager: M,
    notification_sink: N,
    reset_link_base: String,
    reset_token_ttl: Duration,
}

impl<S, H, C, M, N> AuthService<S, H, C, M, N>
where
    S: AccountStore,
    H: PasswordHasher,
    C: ResetTokenCodec,
    M: SessionManager,
    N: NotificationSink,
{
    pub fn new(
        account_store: S,
        password_hasher: H,
        token_codec: C,
        session_manager: M,
        notification_sink: N,
        reset_link_base: String,
    ) -> Self {
        Self {
            account_store,
            password_hasher,
            token_codec,
            session_manager,
            notification_sink,
            reset_link_base,
            reset_token_ttl: Duration::seconds(DEFAULT_RESET_TOKEN_TTL_SECONDS),
        }
    }

    pub fn with_reset_token_ttl(mut self, ttl: Duration) -> Self {
        self.reset_token_ttl = ttl;
        self
    }

    #[tracing::instrument(name = "AuthService::register", skip_all)]
    pub async fn register(&self, request: RegisterRequest) -> Result<AccountId, AuthError> {
        let violations = validate_registration(
            &request.email,
            &request.password,
            &request.confirm_password,
            &request.role,
        );
        if !violations.is_empty() {
            return Err(AuthError::InvalidInput(violations));
        }

        let email = Email::try_from(request.email).map_err(unexpected_after_validation)?;
        let password = Password::try_from(request.password).map_err(unexpected_after_validation)?;
        let role = Role::try_from(request.role).map_err(unexpected_after_validation)?;

        let use_case = RegisterUseCase::new(&self.account_store, &self.password_hasher);
        Ok(use_case.execute(email, password, role).await?)
    }

    /// Malformed credentials short-circuit to the same answer as wrong
    /// ones; login exposes no invalid-input kind.
    #[tracing::instrument(name = "AuthService::login", skip_all)]
    pub async fn login(&self, request: LoginRequest) -> Result<SessionHandle, AuthError> {
        let Ok(email) = Email::try_from(request.email) else {
            return Err(AuthError::InvalidCredentials);
        };
        let Ok(password) = Password::try_from(request.password) else {
            return Err(AuthError::InvalidCredentials);
        };

        let use_case = LoginUseCase::new(
            &self.account_store,
            &self.password_hasher,
            &self.session_manager,
        );
        Ok(use_case.execute(email, password, request.remember).await?)
    }

    #[tracing::instrument(name = "AuthService::logout", skip_all)]
    pub async fn logout(&self, handle: &SessionHandle) {
        LogoutUseCase::new(&self.session_manager).execute(handle).await;
    }

    pub async fn current_account(&self, handle: &SessionHandle) -> Option<AccountId> {
        self.session_manager.current_account(handle).await
    }

    #[tracing::instrument(name = "AuthService::update_email", skip_all)]
    pub async fn update_email(
        &self,
        account_id: AccountId,
        request: UpdateEmailRequest,
    ) -> Result<(), AuthError> {
        let violations = validate_email_update(&request.new_email);
        if !violations.is_empty() {
            return Err(AuthError::InvalidInput(violations));
        }
        let new_email = Email::try_from(request.new_email).map_err(unexpected_after_validation)?;

        let use_case = UpdateEmailUseCase::new(&self.account_store);
        Ok(use_case.execute(account_id, new_email).await?)
    }

    /// Reports `UnknownAccount` for unregistered addresses. That reveals
    /// account existence; see DESIGN.md for why this stays.
    #[tracing::instrument(name = "AuthService::request_reset", skip_all)]
    pub async fn request_reset(&self, request: RequestResetRequest) -> Result<(), AuthError> {
        let Ok(email) = Email::try_from(request.email) else {
            return Err(AuthError::UnknownAccount);
        };

        let use_case = RequestResetUseCase::new(
            &self.account_store,
            &self.token_codec,
            &self.notification_sink,
        );
        Ok(use_case
            .execute(email, &self.reset_link_base, self.reset_token_ttl)
            .await?)
    }

    /// The token is verified before the passwords are even looked at, so a
    /// bad token is reported ahead of a missing or mismatched password.
    #[tracing::instrument(name = "AuthService::confirm_reset", skip_all)]
    pub async fn confirm_reset(&self, request: ConfirmResetRequest) -> Result<(), AuthError> {
        let use_case = ConfirmResetUseCase::new(
            &self.account_store,
            &self.token_codec,
            &self.password_hasher,
        );
        Ok(use_case
            .execute(
                &request.token,
                request.new_password,
                request.confirm_password,
            )
            .await?)
    }
}

/// Inputs re-parsed right after passing validation; failure here means the
/// validation functions and domain parsers disagree.
fn unexpected_after_validation(error: impl std::fmt::Display) -> AuthError {
    AuthError::UnexpectedError(format!("input rejected after validation: {error}"))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Secret<String>,
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Deserialize)]
pub struct UpdateEmailRequest {
    #[serde(rename = "newEmail")]
    pub new_email: Secret<String>,
}

#[derive(Deserialize)]
pub struct RequestResetRequest {
    pub email: Secret<String>,
}

#[derive(Deserialize)]
pub struct ConfirmResetRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: Secret<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Secret<String>,
}

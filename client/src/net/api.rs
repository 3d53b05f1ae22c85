//! Typed surface of the account API, plus the request interceptor.
//!
//! DESIGN
//! ======
//! Every call funnels through [`Api::send`]. Unless a request opts out with
//! `skip_auth_refresh`, `send` first runs the controller's silent refresh
//! and attaches the resulting bearer token — so no call site ever reasons
//! about token expiry. The refresh call itself and the public endpoints
//! (login, register, the password-reset and email-validation flows) opt
//! out, which is also what breaks the recursion between the interceptor and
//! the refresh.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{self, Method, api_base_url, endpoint_url};
use super::types::{
    EmailChangeRequest, EmailValidationRequest, LoginRequest, PasswordChangeRequest, PasswordResetConfirm,
    PasswordResetRequest, RegisterRequest, TokenResponse, User,
};
use crate::i18n::current_language;
use crate::state::session::{AuthController, AuthGateway};

/// The controller type the app composes at its root.
pub type Auth = AuthController<HttpGateway>;

/// Real [`AuthGateway`] over the account API.
///
/// These three calls bypass the interceptor by construction: refresh and
/// revoke authenticate with the refresh cookie (plus, for revoke, whatever
/// bearer the caller still holds), and the profile fetch receives its bearer
/// from the controller.
pub struct HttpGateway;

impl AuthGateway for HttpGateway {
    async fn refresh(&self) -> Result<String, ApiError> {
        let url = endpoint_url(&api_base_url(), "/auth/refresh", current_language().as_str());
        let body = http::send(Method::Post, &url, None, Some(&serde_json::json!({}))).await?;
        Ok(http::parse_json::<TokenResponse>(&body)?.access_token)
    }

    async fn revoke(&self, bearer: Option<String>) -> Result<(), ApiError> {
        let url = endpoint_url(&api_base_url(), "/auth/revoke", current_language().as_str());
        http::send(Method::Post, &url, bearer.as_deref(), Some(&serde_json::json!({}))).await?;
        Ok(())
    }

    async fn fetch_profile(&self, bearer: Option<String>) -> Result<User, ApiError> {
        let url = endpoint_url(&api_base_url(), "/users/me/profile", current_language().as_str());
        let body = http::send(Method::Get, &url, bearer.as_deref(), None).await?;
        http::parse_json(&body)
    }
}

/// Per-request interceptor controls.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestOpts {
    /// Skip the silent-refresh step and send without credentials. Used by
    /// public endpoints and anything the refresh itself depends on.
    pub skip_auth_refresh: bool,
}

impl RequestOpts {
    #[must_use]
    pub fn skip() -> Self {
        Self { skip_auth_refresh: true }
    }
}

fn password_reset_validate_path(token: &str) -> String {
    format!("/account/password-reset/validate?token={token}")
}

/// Form-facing client for the account API.
#[derive(Clone)]
pub struct Api {
    auth: Auth,
}

impl Api {
    #[must_use]
    pub fn new(auth: Auth) -> Self {
        Self { auth }
    }

    #[must_use]
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// The interceptor. See module docs.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        opts: RequestOpts,
    ) -> Result<String, ApiError> {
        let url = endpoint_url(&api_base_url(), path, current_language().as_str());
        if opts.skip_auth_refresh {
            return http::send(method, &url, None, body.as_ref()).await;
        }
        let bearer = self.auth.refresh_auth().await;
        if bearer.is_none() {
            log::warn!("access token not found, sending {path} without credentials");
        }
        http::send(method, &url, bearer.as_deref(), body.as_ref()).await
    }

    fn json(dto: &impl serde::Serialize) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(dto).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Exchange credentials for an access token. The caller hands the token
    /// to [`AuthController::login`]; this method does not mutate state.
    ///
    /// # Errors
    ///
    /// 401 carries an account-state message code; see [`ApiError`].
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<String, ApiError> {
        let dto = LoginRequest {
            username_or_email: username_or_email.to_owned(),
            password: password.to_owned(),
        };
        let body = self
            .send(Method::Post, "/auth/login", Some(Self::json(&dto)?), RequestOpts::skip())
            .await?;
        Ok(http::parse_json::<TokenResponse>(&body)?.access_token)
    }

    /// Create an account. 412 carries per-field errors.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn register(&self, dto: &RegisterRequest) -> Result<(), ApiError> {
        self.send(Method::Post, "/auth/register", Some(Self::json(dto)?), RequestOpts::skip())
            .await?;
        Ok(())
    }

    /// Ask for a password-reset email.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let dto = PasswordResetRequest { email: email.to_owned() };
        self.send(
            Method::Post,
            "/account/password-reset/request",
            Some(Self::json(&dto)?),
            RequestOpts::skip(),
        )
        .await?;
        Ok(())
    }

    /// Check a one-time password-reset token before showing the form.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn validate_password_reset_token(&self, token: &str) -> Result<(), ApiError> {
        self.send(Method::Get, &password_reset_validate_path(token), None, RequestOpts::skip())
            .await?;
        Ok(())
    }

    /// Set a new password using a one-time token.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn confirm_password_reset(&self, dto: &PasswordResetConfirm) -> Result<(), ApiError> {
        self.send(
            Method::Post,
            "/account/password-reset/confirm",
            Some(Self::json(dto)?),
            RequestOpts::skip(),
        )
        .await?;
        Ok(())
    }

    /// Confirm an email address using the token from the validation mail.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn validate_email(&self, token: &str) -> Result<(), ApiError> {
        let dto = EmailValidationRequest { token: token.to_owned() };
        self.send(Method::Post, "/account/validate-email", Some(Self::json(&dto)?), RequestOpts::skip())
            .await?;
        Ok(())
    }

    /// Start an email change for the signed-in account.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn change_email(&self, email: &str) -> Result<(), ApiError> {
        let dto = EmailChangeRequest { email: email.to_owned() };
        self.send(Method::Post, "/account/email-change", Some(Self::json(&dto)?), RequestOpts::default())
            .await?;
        Ok(())
    }

    /// Change the signed-in account's password.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn change_password(&self, dto: &PasswordChangeRequest) -> Result<(), ApiError> {
        self.send(Method::Post, "/account/password-change", Some(Self::json(dto)?), RequestOpts::default())
            .await?;
        Ok(())
    }

    /// Permanently delete the signed-in account.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.send(Method::Delete, "/account", None, RequestOpts::default()).await?;
        Ok(())
    }
}

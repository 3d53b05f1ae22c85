//! Request/response DTOs for the account API.
//!
//! DESIGN
//! ======
//! The wire shapes are owned by the remote API (camelCase JSON); these types
//! mirror them field-for-field so serde round-trips stay lossless. Optional
//! fields default rather than fail: the server may add fields at any time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The authenticated account profile returned by `/users/me/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account identifier.
    pub id: i64,
    /// Display name shown in the header and in game.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Whether the address has been confirmed through the validation mail.
    #[serde(default)]
    pub email_validated: bool,
    /// ISO 8601 creation timestamp, if the server exposes it.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of a successful login or refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetConfirm {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidationRequest {
    pub token: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailChangeRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub previous_password: String,
    pub password: String,
    pub confirm_password: String,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable message code (e.g. `"Banned account"`).
    #[serde(default)]
    pub message: Option<String>,
    /// Per-field validation errors on 412 responses.
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

//! Error taxonomy for calls to the account API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::HashMap;

/// Failure of a single REST call.
///
/// Forms translate these into localized messages; the session layer reacts
/// to the variant, never to message text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No HTTP response at all (offline, DNS, CORS, aborted).
    #[error("server unreachable: {0}")]
    Network(String),
    /// Non-2xx response, with the server's message code when it sent one.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// 412 validation rejection carrying a per-field error map.
    #[error("validation rejected")]
    Validation { errors: HashMap<String, String> },
    /// The response arrived but its body could not be interpreted.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Validation { .. } => Some(412),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Server-provided message code, e.g. `"Banned account"` on a 401 login.
    #[must_use]
    pub fn message_code(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            Self::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

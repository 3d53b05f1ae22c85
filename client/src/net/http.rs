//! Low-level HTTP plumbing for the account API.
//!
//! Client-side (hydrate): real requests via `gloo-net`, sent with
//! credentials included so the refresh cookie travels with every call.
//! Server-side (SSR): stubs returning [`ApiError::Network`], since the
//! account API is only reachable from the browser.
//!
//! URL assembly and response classification are pure so they stay testable
//! without a browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ErrorBody;

/// HTTP verbs the account API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Base URL of the account API, compile-time configured.
#[must_use]
pub fn api_base_url() -> String {
    option_env!("PUBLIC_API_URL").unwrap_or("/api").trim_end_matches('/').to_owned()
}

/// Full URL for `path`, carrying the UI language so server-rendered
/// messages (validation emails, error strings) match the visitor's locale.
#[must_use]
pub fn endpoint_url(base: &str, path: &str, lang: &str) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{base}{path}{sep}lang={lang}")
}

/// Classify a response: 2xx passes the body through, 412 becomes a
/// validation rejection with its field map, anything else a status error
/// with the server's message code when one was sent.
///
/// # Errors
///
/// [`ApiError::Validation`] on 412, [`ApiError::Status`] otherwise.
pub fn response_outcome(status: u16, body: &str) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body.to_owned());
    }
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if status == 412 {
        return Err(ApiError::Validation { errors: parsed.errors });
    }
    Err(ApiError::Status { status, message: parsed.message })
}

/// Parse a JSON body into `T`.
///
/// # Errors
///
/// [`ApiError::Decode`] when the body does not match the expected shape.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Perform one request and return the raw success body.
///
/// # Errors
///
/// [`ApiError::Network`] when no response arrives, otherwise per
/// [`response_outcome`].
#[allow(clippy::unused_async)]
pub async fn send(
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: Option<&serde_json::Value>,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Delete => Request::delete(url),
        }
        .credentials(web_sys::RequestCredentials::Include);

        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder.json(json).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        response_outcome(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, bearer, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

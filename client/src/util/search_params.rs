//! URL query contract for the auth flows.
//!
//! DESIGN
//! ======
//! Which auth form is visible is carried in the URL rather than component
//! state, so links, reloads, and emailed deep links all land on the right
//! form: `?action=` selects the form and `?k=` carries the one-time token
//! for the password-reset and email-validation flows. Helpers here rewrite
//! the query string while preserving unrelated parameters; values are passed
//! through verbatim.

#[cfg(test)]
#[path = "search_params_test.rs"]
mod search_params_test;

pub const ACTION_PARAM: &str = "action";
pub const TOKEN_PARAM: &str = "k";

/// Auth flows addressable from the URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
    PasswordReset,
    PasswordResetToken,
    EmailValidation,
}

impl AuthAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::PasswordReset => "password-reset",
            Self::PasswordResetToken => "password-reset-token",
            Self::EmailValidation => "email-validation",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "login" => Some(Self::Login),
            "register" => Some(Self::Register),
            "password-reset" => Some(Self::PasswordReset),
            "password-reset-token" => Some(Self::PasswordResetToken),
            "email-validation" => Some(Self::EmailValidation),
            _ => None,
        }
    }

    /// Whether this action opens the in-page auth modal. Token flows render
    /// on their own routes instead.
    #[must_use]
    pub fn opens_modal(self) -> bool {
        matches!(self, Self::Login | Self::Register | Self::PasswordReset)
    }
}

fn pairs(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| p.split_once('=').unwrap_or((p, "")))
}

/// Value of `key` in a raw query string (`?a=b&c=d` or `a=b&c=d`).
#[must_use]
pub fn query_param(search: &str, key: &str) -> Option<String> {
    pairs(search).find(|(k, _)| *k == key).map(|(_, v)| v.to_owned())
}

/// The auth action currently requested by the URL, if any.
#[must_use]
pub fn requested_action(search: &str) -> Option<AuthAction> {
    query_param(search, ACTION_PARAM).and_then(|v| AuthAction::parse(&v))
}

fn serialize(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .map(|(k, v)| if v.is_empty() { k } else { format!("{k}={v}") })
        .collect::<Vec<_>>()
        .join("&")
}

/// Rewrite `search` to request `action`, preserving unrelated parameters.
/// Any pending one-time token is dropped: switching flows invalidates it.
#[must_use]
pub fn open_action_query(search: &str, action: AuthAction) -> String {
    let mut params: Vec<(String, String)> = pairs(search)
        .filter(|(k, _)| *k != ACTION_PARAM && *k != TOKEN_PARAM)
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    params.push((ACTION_PARAM.to_owned(), action.as_str().to_owned()));
    serialize(params)
}

/// Remove the auth parameters from `search`, preserving everything else.
#[must_use]
pub fn close_auth_query(search: &str) -> String {
    serialize(
        pairs(search)
            .filter(|(k, _)| *k != ACTION_PARAM && *k != TOKEN_PARAM)
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
    )
}

/// Query string for a dedicated token-flow route (`/reset-password`,
/// `/validate-email`): just the one-time token, when present.
#[must_use]
pub fn token_flow_query(token: Option<&str>) -> String {
    token.map_or_else(String::new, |t| format!("{TOKEN_PARAM}={t}"))
}

/// Compose a navigable href from its parts; omits empty query and hash.
#[must_use]
pub fn href(pathname: &str, query: &str, hash: &str) -> String {
    let mut out = pathname.to_owned();
    if !query.is_empty() {
        out.push('?');
        out.push_str(query);
    }
    out.push_str(hash);
    out
}

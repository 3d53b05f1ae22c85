//! Client-side credential validation.
//!
//! These checks mirror the server's registration rules so forms can reject
//! obviously invalid input before a round-trip; the server remains the
//! authority and may still return per-field errors.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Of uppercase, lowercase, digit, special: how many classes are required.
pub const PASSWORD_MIN_TYPES: usize = 3;
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?";

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;

/// Disposable-mail domains the account API rejects at registration.
pub const EMAIL_FORBIDDEN_DOMAINS: &[&str] = &["mailinator.com", "tempmail.com"];

/// Why a candidate password was rejected. Keys map 1:1 onto translation
/// entries so forms can render localized hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordIssue {
    MinLength,
    CharTypes,
}

/// Validate a password against length and character-class rules.
#[must_use]
pub fn validate_password(password: &str) -> Vec<PasswordIssue> {
    let mut types = 0;
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        types += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        types += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        types += 1;
    }
    if password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        types += 1;
    }

    let mut issues = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        issues.push(PasswordIssue::MinLength);
    }
    if types < PASSWORD_MIN_TYPES {
        issues.push(PasswordIssue::CharTypes);
    }
    issues
}

#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_empty()
}

/// Usernames: 3–30 alphanumeric characters, Latin-1 letters included,
/// excluding the multiplication/division signs and a few ligature-like
/// codepoints the registration endpoint refuses.
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&len)
        && username.chars().all(is_valid_username_char)
}

fn is_valid_username_char(c: char) -> bool {
    if matches!(c, '×' | 'Þ' | 'ß' | '÷' | 'þ' | 'ø') {
        return false;
    }
    c.is_ascii_alphanumeric() || ('À'..='ÿ').contains(&c)
}

/// Structural email check: one `@`, non-empty local part, dotted domain
/// with a 2+ letter TLD, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !domain.starts_with('.')
        && !domain.ends_with('.')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Whether the email's domain is on the forbidden list.
#[must_use]
pub fn has_forbidden_domain(email: &str) -> bool {
    email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| EMAIL_FORBIDDEN_DOMAINS.contains(&domain.to_ascii_lowercase().as_str()))
}

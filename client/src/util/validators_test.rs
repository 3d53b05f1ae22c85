use super::*;

// =============================================================
// Passwords
// =============================================================

#[test]
fn accepts_password_with_three_classes() {
    assert!(validate_password("Starhold1").is_empty());
    assert!(validate_password("abcDEF123").is_empty());
    assert!(validate_password("abc123!?xyz").is_empty());
}

#[test]
fn rejects_short_password() {
    assert_eq!(validate_password("Ab1!"), vec![PasswordIssue::MinLength]);
}

#[test]
fn rejects_too_few_character_classes() {
    assert_eq!(validate_password("lowercaseonly"), vec![PasswordIssue::CharTypes]);
    assert_eq!(validate_password("12345678"), vec![PasswordIssue::CharTypes]);
}

#[test]
fn reports_both_issues_for_weak_short_password() {
    let issues = validate_password("abc");
    assert!(issues.contains(&PasswordIssue::MinLength));
    assert!(issues.contains(&PasswordIssue::CharTypes));
}

#[test]
fn counts_special_characters_as_a_class() {
    assert!(is_valid_password("abcdef1!"));
}

// =============================================================
// Usernames
// =============================================================

#[test]
fn accepts_plain_and_accented_usernames() {
    assert!(is_valid_username("cmdr42"));
    assert!(is_valid_username("Général"));
}

#[test]
fn rejects_username_length_bounds() {
    assert!(!is_valid_username("ab"));
    assert!(!is_valid_username(&"a".repeat(31)));
    assert!(is_valid_username(&"a".repeat(30)));
}

#[test]
fn rejects_username_symbols_and_spaces() {
    assert!(!is_valid_username("space man"));
    assert!(!is_valid_username("semi;colon"));
    assert!(!is_valid_username("a×b"));
}

// =============================================================
// Emails
// =============================================================

#[test]
fn accepts_ordinary_emails() {
    assert!(is_valid_email("pilot@example.com"));
    assert!(is_valid_email("a.b+tag@sub.example.org"));
}

#[test]
fn rejects_malformed_emails() {
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("a@example.c0m"));
}

#[test]
fn flags_forbidden_domains_case_insensitively() {
    assert!(has_forbidden_domain("x@mailinator.com"));
    assert!(has_forbidden_domain("x@Tempmail.COM"));
    assert!(!has_forbidden_domain("x@example.com"));
}

//! Typed translation schema.
//!
//! DESIGN
//! ======
//! Every UI string lives in one of these nested structs, so a missing key is
//! a compile error rather than a runtime fallback, and adding a language
//! means filling in one more complete table.

pub struct TranslationKeys {
    pub common: CommonKeys,
    pub nav: NavKeys,
    pub auth: AuthKeys,
    pub validation: ValidationKeys,
    pub home: HomeKeys,
    pub play: PlayKeys,
    pub legal: LegalKeys,
    pub footer: FooterKeys,
    pub not_found: NotFoundKeys,
}

pub struct CommonKeys {
    pub loading: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub close: &'static str,
    pub back: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub server_unreachable: &'static str,
}

pub struct NavKeys {
    pub home: &'static str,
    pub play: &'static str,
    pub login: &'static str,
    pub signup: &'static str,
    pub logout: &'static str,
}

pub struct AuthKeys {
    pub login: LoginKeys,
    pub register: RegisterKeys,
    pub password_reset: PasswordResetKeys,
    pub email_validation: EmailValidationKeys,
    pub account: AccountKeys,
    pub account_state: AccountStateKeys,
    pub password_rules: PasswordRuleKeys,
}

pub struct LoginKeys {
    pub title: &'static str,
    pub username_or_email: &'static str,
    pub password: &'static str,
    pub submit: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_account: &'static str,
    pub create_account: &'static str,
    pub forgot_password: &'static str,
}

pub struct RegisterKeys {
    pub title: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub submit: &'static str,
    pub loading: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub have_account: &'static str,
    pub sign_in: &'static str,
}

pub struct PasswordResetKeys {
    pub title: &'static str,
    pub email: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
    pub redirect: &'static str,
    pub invalid_token: &'static str,
    pub new_password: &'static str,
    pub confirm_password: &'static str,
    pub confirm_submit: &'static str,
    pub changed: &'static str,
    pub error: &'static str,
}

pub struct EmailValidationKeys {
    pub title: &'static str,
    pub validating: &'static str,
    pub success: &'static str,
    pub redirect: &'static str,
    pub invalid_token: &'static str,
    pub error: &'static str,
}

pub struct AccountKeys {
    pub profile: &'static str,
    pub logout: &'static str,
    pub logout_loading: &'static str,
    pub details_title: &'static str,
    pub username_label: &'static str,
    pub email_label: &'static str,
    pub member_since: &'static str,
    pub email_not_validated: &'static str,
    pub email_change_title: &'static str,
    pub new_email: &'static str,
    pub email_change_submit: &'static str,
    pub email_change_success: &'static str,
    pub email_change_same_error: &'static str,
    pub forbidden_domain: &'static str,
    pub password_change_title: &'static str,
    pub current_password: &'static str,
    pub new_password: &'static str,
    pub confirm_password: &'static str,
    pub password_change_submit: &'static str,
    pub password_change_success: &'static str,
    pub danger_zone_title: &'static str,
    pub delete_account: &'static str,
    pub delete_warning: &'static str,
    pub delete_success: &'static str,
}

/// Account-state message codes the login endpoint returns on 401.
pub struct AccountStateKeys {
    pub created_account: &'static str,
    pub banned_account: &'static str,
    pub disabled_account: &'static str,
}

pub struct PasswordRuleKeys {
    pub min_length: &'static str,
    pub char_types: &'static str,
}

pub struct ValidationKeys {
    pub required: &'static str,
    pub invalid_email: &'static str,
    pub invalid_username: &'static str,
    pub forbidden_email_domain: &'static str,
    pub password_mismatch: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct HomeKeys {
    pub meta_title: &'static str,
    pub meta_description: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub hero_cta_play: &'static str,
    pub features_title: &'static str,
    pub features: [Feature; 3],
    pub community_title: &'static str,
    pub community_body: &'static str,
    pub community_cta: &'static str,
}

pub struct PlayKeys {
    pub meta_title: &'static str,
    pub loading_version: &'static str,
    pub loading_game: &'static str,
    pub fullscreen: &'static str,
    pub failed: &'static str,
}

pub struct LegalSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct LegalDoc {
    pub title: &'static str,
    pub updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub struct LegalKeys {
    pub terms: LegalDoc,
    pub privacy: LegalDoc,
    pub cookies: LegalDoc,
}

pub struct FooterKeys {
    pub rights: &'static str,
    pub terms: &'static str,
    pub privacy: &'static str,
    pub cookies: &'static str,
}

pub struct NotFoundKeys {
    pub title: &'static str,
    pub body: &'static str,
    pub back_home: &'static str,
}

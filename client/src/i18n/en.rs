//! English translation table.

use super::keys::*;

pub static EN: TranslationKeys = TranslationKeys {
    common: CommonKeys {
        loading: "Loading...",
        error: "Something went wrong. Please try again.",
        success: "Done.",
        close: "Close",
        back: "Back",
        cancel: "Cancel",
        confirm: "Confirm",
        server_unreachable: "Unable to reach the server. Check your connection and try again.",
    },
    nav: NavKeys {
        home: "Home",
        play: "Play",
        login: "Sign in",
        signup: "Create account",
        logout: "Sign out",
    },
    auth: AuthKeys {
        login: LoginKeys {
            title: "Sign in",
            username_or_email: "Username or email",
            password: "Password",
            submit: "Sign in",
            loading: "Signing in...",
            error: "Incorrect credentials.",
            no_account: "No account yet?",
            create_account: "Create one",
            forgot_password: "Forgot your password?",
        },
        register: RegisterKeys {
            title: "Create your account",
            username: "Username",
            email: "Email",
            password: "Password",
            confirm_password: "Confirm password",
            submit: "Create account",
            loading: "Creating account...",
            success: "Account created. Check your inbox to validate your email address.",
            error: "Could not create the account.",
            have_account: "Already have an account?",
            sign_in: "Sign in",
        },
        password_reset: PasswordResetKeys {
            title: "Reset your password",
            email: "Email",
            submit: "Send reset email",
            success: "Password reset email sent.",
            redirect: "Redirecting to sign in...",
            invalid_token: "This reset link is invalid or has expired.",
            new_password: "New password",
            confirm_password: "Confirm new password",
            confirm_submit: "Set new password",
            changed: "Password updated. You can sign in with it now.",
            error: "Could not reset the password.",
        },
        email_validation: EmailValidationKeys {
            title: "Email validation",
            validating: "Validating your email address...",
            success: "Email validated.",
            redirect: "Redirecting to sign in...",
            invalid_token: "This validation link is invalid or has expired.",
            error: "Could not validate the email address.",
        },
        account: AccountKeys {
            profile: "Profile",
            logout: "Sign out",
            logout_loading: "Signing out...",
            details_title: "Account",
            username_label: "Username",
            email_label: "Email",
            member_since: "Member since",
            email_not_validated: "Email not validated yet.",
            email_change_title: "Change email",
            new_email: "New email",
            email_change_submit: "Update email",
            email_change_success: "Check your new inbox to confirm the change.",
            email_change_same_error: "This is already your email address.",
            forbidden_domain: "This email domain is not allowed.",
            password_change_title: "Change password",
            current_password: "Current password",
            new_password: "New password",
            confirm_password: "Confirm new password",
            password_change_submit: "Update password",
            password_change_success: "Password updated. You will be signed out shortly.",
            danger_zone_title: "Danger zone",
            delete_account: "Delete account",
            delete_warning: "This permanently deletes your account and progress. There is no undo.",
            delete_success: "Account deleted. Sorry to see you go, commander.",
        },
        account_state: AccountStateKeys {
            created_account: "This account is not validated yet. Check your inbox.",
            banned_account: "This account has been banned.",
            disabled_account: "This account has been disabled.",
        },
        password_rules: PasswordRuleKeys {
            min_length: "At least 8 characters.",
            char_types: "Mix at least three of: uppercase, lowercase, digits, symbols.",
        },
    },
    validation: ValidationKeys {
        required: "This field is required.",
        invalid_email: "Enter a valid email address.",
        invalid_username: "3-30 letters and digits only.",
        forbidden_email_domain: "This email domain is not allowed.",
        password_mismatch: "Passwords do not match.",
    },
    home: HomeKeys {
        meta_title: "Starhold — command the frontier",
        meta_description: "Starhold is a persistent space strategy game. Build your station, raise a fleet and hold the line — right in your browser.",
        hero_title: "Command the frontier",
        hero_subtitle: "Build your station, raise a fleet and hold the line in a persistent player-driven galaxy.",
        hero_cta: "Play free",
        hero_cta_play: "Resume command",
        features_title: "Forged for long campaigns",
        features: [
            Feature {
                title: "Persistent galaxy",
                body: "The war goes on while you sleep. Set standing orders and wake up to the consequences.",
            },
            Feature {
                title: "No install",
                body: "The full game runs in your browser. One account, any machine, same fleet.",
            },
            Feature {
                title: "Player-run economy",
                body: "Every hull, shell and ration in the galaxy was hauled there by someone.",
            },
        ],
        community_title: "Join the armada",
        community_body: "Coordinate with thousands of commanders shaping the same map.",
        community_cta: "Create your account",
    },
    play: PlayKeys {
        meta_title: "Starhold — play",
        loading_version: "Looking up the active version...",
        loading_game: "Loading game",
        fullscreen: "Fullscreen",
        failed: "Failed to start the game",
    },
    legal: LegalKeys {
        terms: LegalDoc {
            title: "Terms of Service",
            updated: "Last updated: June 2025",
            sections: &[
                LegalSection {
                    heading: "1. The service",
                    body: "Starhold is an online game operated by Starhold Interactive. By creating an account you accept these terms in full.",
                },
                LegalSection {
                    heading: "2. Your account",
                    body: "You are responsible for your credentials and for everything done with them. One account per person; selling or sharing accounts is prohibited.",
                },
                LegalSection {
                    heading: "3. Fair play",
                    body: "Automation, exploits and harassment lead to sanctions up to permanent account closure.",
                },
                LegalSection {
                    heading: "4. Termination",
                    body: "You may delete your account at any time from the account panel. We may suspend accounts that break these terms.",
                },
            ],
        },
        privacy: LegalDoc {
            title: "Privacy Policy",
            updated: "Last updated: June 2025",
            sections: &[
                LegalSection {
                    heading: "1. What we store",
                    body: "Your email address, username and gameplay data. Passwords are stored only as salted hashes on our servers.",
                },
                LegalSection {
                    heading: "2. What we never do",
                    body: "We do not sell personal data and we do not run third-party advertising trackers.",
                },
                LegalSection {
                    heading: "3. Your rights",
                    body: "You can export or permanently delete your data from the account panel, or by contacting support.",
                },
            ],
        },
        cookies: LegalDoc {
            title: "Cookie Policy",
            updated: "Last updated: June 2025",
            sections: &[
                LegalSection {
                    heading: "1. Strictly necessary",
                    body: "A session cookie keeps you signed in between visits. Local storage caches your access token on this device.",
                },
                LegalSection {
                    heading: "2. Nothing else",
                    body: "No analytics or advertising cookies are set by this site.",
                },
            ],
        },
    },
    footer: FooterKeys {
        rights: "All rights reserved.",
        terms: "Terms",
        privacy: "Privacy",
        cookies: "Cookies",
    },
    not_found: NotFoundKeys {
        title: "Lost in space",
        body: "This page does not exist, or has drifted out of sensor range.",
        back_home: "Back to the bridge",
    },
};

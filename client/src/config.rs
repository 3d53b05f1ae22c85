//! Site-wide constants: identity, canonical origin, outbound links.

pub const SITE_NAME: &str = "Starhold";
pub const COMPANY_NAME: &str = "Starhold Interactive";

/// Canonical origin used for SEO links when no override is configured.
#[must_use]
pub fn site_base_url() -> &'static str {
    option_env!("PUBLIC_SITE_URL").unwrap_or("https://playstarhold.com")
}

pub const DISCORD_URL: &str = "https://discord.gg/starhold";
pub const SUPPORT_EMAIL: &str = "support@playstarhold.com";

/// Delay before leaving a form after a success message, long enough to read.
pub const REDIRECT_DELAY_MS: u32 = 5_000;

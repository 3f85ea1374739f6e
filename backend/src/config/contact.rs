use std::env;

pub const DEFAULT_CONTACT_TO: &str = "info@dcperformancecoaching.com";
pub const DEFAULT_CONTACT_FROM: &str = "noreply@dcperformancecoaching.com";
pub const SENDER_NAME: &str = "DC Performance Coaching";
pub const CONTACT_SUBJECT: &str = "New contact form message";

/// Settings for relaying contact form messages, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactConfig {
    /// `None` keeps the server up but every submission fails with a 500.
    pub api_key: Option<String>,
    pub to: String,
    pub from: String,
}

impl ContactConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("RESEND_API_KEY");
        if api_key.is_none() {
            tracing::warn!("RESEND_API_KEY is not set, contact submissions will be rejected");
        }

        Self {
            api_key,
            to: non_empty("CONTACT_TO").unwrap_or_else(|| DEFAULT_CONTACT_TO.to_string()),
            from: non_empty("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
        }
    }

    pub fn sender(&self) -> String {
        format!("{} <{}>", SENDER_NAME, self.from)
    }
}

use chrono::{DateTime, Months, Utc};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

use crate::dom::{self, Listener};

pub const CONSENT_COOKIE: &str = "cookieConsent";
pub const BANNER_ID: &str = "cookie-banner";
pub const ACCEPT_BUTTON_ID: &str = "cookie-accept-btn";

/// Reads a cookie value from a `document.cookie` style string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

pub fn has_consent(cookies: &str) -> bool {
    cookie_value(cookies, CONSENT_COOKIE).as_deref() == Some("true")
}

/// Builds the consent cookie, valid for one year from `accepted_at`.
pub fn consent_cookie(accepted_at: DateTime<Utc>) -> String {
    let expires = accepted_at
        .checked_add_months(Months::new(12))
        .unwrap_or(accepted_at);
    format!(
        "{}=true; expires={}; path=/; SameSite=Lax",
        CONSENT_COOKIE,
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

/// Shows the cookie banner until the visitor accepts. Returns the click
/// listener when the banner is waiting for an answer.
pub fn attach(document: &Document) -> Option<Listener> {
    let banner = document.get_element_by_id(BANNER_ID)?;
    let accept = document.get_element_by_id(ACCEPT_BUTTON_ID)?;
    let html_document = document.clone().dyn_into::<HtmlDocument>().ok()?;

    if has_consent(&html_document.cookie().unwrap_or_default()) {
        dom::set_display(&banner, "none");
        return None;
    }

    Some(Listener::new(&accept, "click", move |_| {
        if let Err(e) = html_document.set_cookie(&consent_cookie(Utc::now())) {
            log::warn!("Could not store cookie consent: {:?}", e);
        }
        dom::set_display(&banner, "none");
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn finds_consent_among_other_cookies() {
        assert!(has_consent("theme=dark; cookieConsent=true; _ga=GA1.2"));
        assert!(has_consent("cookieConsent=true"));
    }

    #[test]
    fn anything_but_true_is_no_consent() {
        assert!(!has_consent(""));
        assert!(!has_consent("cookieConsent=false"));
        assert!(!has_consent("cookieConsent="));
    }

    #[test]
    fn ignores_cookies_with_a_longer_name() {
        assert!(!has_consent("oldcookieConsent=true"));
        assert!(!has_consent("cookieConsentV2=true"));
    }

    #[test]
    fn decodes_percent_encoded_values() {
        assert_eq!(
            cookie_value("name=Dana%20C; cookieConsent=true", "name").as_deref(),
            Some("Dana C")
        );
    }

    #[test]
    fn consent_cookie_expires_a_year_later() {
        let accepted = Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(
            consent_cookie(accepted),
            "cookieConsent=true; expires=Fri, 14 Mar 2025 09:30:00 GMT; path=/; SameSite=Lax"
        );
    }
}

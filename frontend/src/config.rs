use crate::header::{HeaderConfig, StartupHidePolicy};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running the relay locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn contact_endpoint() -> String {
    format!("{}/api/send-email", get_backend_url())
}

/// Tunables shared by the page behaviours. Past versions of the site disagreed
/// on these, so they live here rather than in each module.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub header: HeaderConfig,
    pub reveal_threshold: f64,
    pub stats_threshold: f64,
    pub counter_duration_ms: f64,
    pub hero_video_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header: HeaderConfig {
                hide_threshold_px: 100.0,
                startup_hide_ms: 2000,
                startup_policy: StartupHidePolicy::Always,
            },
            reveal_threshold: 0.15,
            stats_threshold: 0.3,
            counter_duration_ms: 2000.0,
            hero_video_threshold: 0.4,
        }
    }
}

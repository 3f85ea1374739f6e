use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlMediaElement};

use crate::dom;
use crate::observe::RatioObserver;

pub const HERO_VIDEO_SELECTOR: &str = ".page-home .hero video";

/// The hero video plays with sound only while enough of it is on screen.
pub fn should_mute(visible_ratio: f64, threshold: f64) -> bool {
    visible_ratio < threshold
}

pub fn attach(document: &Document, threshold: f64) -> Option<RatioObserver> {
    let video = dom::query(document, HERO_VIDEO_SELECTOR)?;
    let media = video.clone().dyn_into::<HtmlMediaElement>().ok()?;

    // Browsers may still block unmuted autoplay; that is their call.
    media.set_muted(false);

    RatioObserver::new(&video, threshold, move |ratio| {
        media.set_muted(should_mute(ratio, threshold));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmuted_at_or_above_threshold() {
        assert!(!should_mute(0.4, 0.4));
        assert!(!should_mute(1.0, 0.4));
    }

    #[test]
    fn muted_below_threshold() {
        assert!(should_mute(0.39, 0.4));
        assert!(should_mute(0.0, 0.4));
    }
}

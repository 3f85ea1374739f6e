use web_sys::Document;

use crate::dom;
use crate::observe::OneShotObserver;

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "visible";

/// Adds `visible` to every `.reveal` element the first time it scrolls into view.
pub fn attach(document: &Document, threshold: f64) -> Option<OneShotObserver> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    log::debug!("Observing {} reveal targets", targets.len());
    OneShotObserver::new(&targets, threshold, |element| {
        dom::set_class(element, REVEALED_CLASS, true);
    })
}

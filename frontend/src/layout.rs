use web_sys::Document;

use crate::dom::{self, Listener};

/// The burger button opens and closes the menu on small screens.
pub fn attach_nav_toggle(document: &Document) -> Option<Listener> {
    let toggle = dom::query(document, ".nav-toggle")?;
    let menu = dom::query(document, "nav ul")?;
    Some(Listener::new(&toggle, "click", move |_| {
        let _ = menu.class_list().toggle("open");
    }))
}

/// Moves a `.section-title` that directly precedes a `.floating-box` inside it,
/// so the heading sits in the box next to its numbers.
pub fn nest_section_titles(document: &Document) {
    for floating_box in dom::query_all(document, ".floating-box") {
        let Some(title) = floating_box.previous_element_sibling() else {
            continue;
        };
        if !title.class_list().contains("section-title") {
            continue;
        }
        let first = floating_box.first_child();
        let _ = floating_box.insert_before(&title, first.as_ref());
    }
}

use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement, Node};

use crate::dom::{self, Listener};
use crate::lightbox::LightboxState;

pub const GALLERY_IMAGE_SELECTOR: &str = ".gallery-grid img";

/// Full screen view for the performance gallery on the testimonials page.
#[function_component(GalleryLightbox)]
pub fn gallery_lightbox() -> Html {
    let lightbox = use_state(LightboxState::default);
    let overlay_ref = use_node_ref();

    // Thumbnails are part of the static page, so hook them up once on mount.
    {
        let setter = lightbox.setter();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                if let Some(document) = dom::document() {
                    for thumbnail in dom::query_all(&document, GALLERY_IMAGE_SELECTOR) {
                        if let Some(html) = thumbnail.dyn_ref::<HtmlElement>() {
                            let _ = html.style().set_property("cursor", "pointer");
                        }
                        let image = thumbnail.clone();
                        let setter = setter.clone();
                        listeners.push(Listener::new(&thumbnail, "click", move |_| {
                            let src = image
                                .dyn_ref::<HtmlImageElement>()
                                .map(|img| img.src())
                                .unwrap_or_default();
                            setter.set(LightboxState::default().open(src));
                        }));
                    }
                }
                move || drop(listeners)
            },
            (),
        );
    }

    use_effect_with_deps(
        |state| {
            dom::set_body_overflow(state.body_overflow());
            || ()
        },
        (*lightbox).clone(),
    );

    let on_overlay_click = {
        let lightbox = lightbox.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (overlay_ref.get(), e.target()) {
                (Some(overlay), Some(target)) => overlay.is_same_node(target.dyn_ref::<Node>()),
                _ => false,
            };
            let next = lightbox.click(on_backdrop);
            if next != *lightbox {
                lightbox.set(next);
            }
        })
    };

    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.set(lightbox.close());
        })
    };

    html! {
        <div
            id="gallery-lightbox"
            ref={overlay_ref}
            class={classes!(lightbox.is_active().then(|| "active"))}
            onclick={on_overlay_click}
        >
            <div class="gallery-lightbox-content">
                <img src={lightbox.src().to_string()} alt="" />
                <button class="gallery-lightbox-close" onclick={on_close}>{"Close"}</button>
            </div>
        </div>
    }
}

use yew::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod observe;
mod header;
mod consent;
mod counter;
mod hero_video;
mod layout;
mod lightbox;
mod reveal;
mod contact_form;
mod components {
    pub mod header_indicator;
    pub mod gallery_lightbox;
}

use components::{
    header_indicator::HeaderControl,
    gallery_lightbox::{GalleryLightbox, GALLERY_IMAGE_SELECTOR},
};
use config::SiteConfig;
use dom::Listener;
use observe::{OneShotObserver, RatioObserver};

/// Behaviours that work directly on the page markup. Dropping this detaches them.
#[derive(Default)]
struct PageBindings {
    listeners: Vec<Listener>,
    one_shot: Vec<OneShotObserver>,
    hero_video: Option<RatioObserver>,
}

impl PageBindings {
    fn attach(config: &SiteConfig) -> Self {
        let mut bindings = PageBindings::default();
        let Some(document) = dom::document() else {
            return bindings;
        };

        bindings.listeners.extend(consent::attach(&document));
        bindings.listeners.extend(layout::attach_nav_toggle(&document));
        bindings.listeners.extend(contact_form::attach(&document));
        layout::nest_section_titles(&document);

        bindings.one_shot.extend(reveal::attach(&document, config.reveal_threshold));
        bindings.one_shot.extend(counter::attach(
            &document,
            config.stats_threshold,
            config.counter_duration_ms,
        ));
        bindings.hero_video = hero_video::attach(&document, config.hero_video_threshold);

        info!(
            "Attached {} listeners and {} observers",
            bindings.listeners.len(),
            bindings.one_shot.len() + usize::from(bindings.hero_video.is_some())
        );
        bindings
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub config: SiteConfig,
    pub has_header: bool,
    pub has_gallery: bool,
}

#[function_component(Site)]
fn site(props: &SiteProps) -> Html {
    {
        let config = props.config.clone();
        use_effect_with_deps(
            move |_| {
                let bindings = PageBindings::attach(&config);
                move || drop(bindings)
            },
            (),
        );
    }

    html! {
        <>
            {
                if props.has_header {
                    html! { <HeaderControl config={props.config.header} /> }
                } else {
                    html! {}
                }
            }
            {
                if props.has_gallery {
                    html! { <GalleryLightbox /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let has_header = dom::query(&document, "header").is_some();
    let has_gallery = body.class_list().contains("page-testimonials")
        && !dom::query_all(&document, GALLERY_IMAGE_SELECTOR).is_empty();

    let Ok(host) = document.create_element("div") else {
        return;
    };
    host.set_id("site-enhancements");
    let _ = body.append_child(&host);

    info!("Starting site enhancements");
    yew::Renderer::<Site>::with_root_and_props(
        host,
        SiteProps {
            config: SiteConfig::default(),
            has_header,
            has_gallery,
        },
    )
    .render();
}

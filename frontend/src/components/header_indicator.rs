use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::dom::{self, Listener};
use crate::header::{HeaderConfig, HeaderController, HeaderEvent};

#[derive(Properties, PartialEq)]
pub struct HeaderControlProps {
    pub config: HeaderConfig,
}

/// Owns the header show/hide state. Renders the "Menu" indicator bar and is the
/// only thing that touches the header's `hidden` and the indicator's `active` class.
#[function_component(HeaderControl)]
pub fn header_control(props: &HeaderControlProps) -> Html {
    let config = props.config;
    let header = use_reducer(move || HeaderController::new(config));

    {
        let dispatcher = header.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                if let (Some(window), Some(element)) = (
                    web_sys::window(),
                    dom::document().and_then(|d| dom::query(&d, "header")),
                ) {
                    let on_scroll = dispatcher.clone();
                    listeners.push(Listener::new(&window, "scroll", move |_| {
                        on_scroll.dispatch(HeaderEvent::Scrolled { offset: dom::scroll_offset() });
                    }));

                    let on_enter = dispatcher.clone();
                    listeners.push(Listener::new(&element, "mouseenter", move |_| {
                        on_enter.dispatch(HeaderEvent::PointerEntered);
                    }));

                    let on_leave = dispatcher.clone();
                    listeners.push(Listener::new(&element, "mouseleave", move |_| {
                        on_leave.dispatch(HeaderEvent::PointerLeft { offset: dom::scroll_offset() });
                    }));
                }

                let startup = Timeout::new(config.startup_hide_ms, move || {
                    dispatcher.dispatch(HeaderEvent::StartupTimerFired);
                });

                move || {
                    drop(startup);
                    drop(listeners);
                }
            },
            (),
        );
    }

    let hidden = header.is_hidden();

    use_effect_with_deps(
        move |hidden| {
            if let Some(element) = dom::document().and_then(|d| dom::query(&d, "header")) {
                dom::set_class(&element, "hidden", *hidden);
            }
            || ()
        },
        hidden,
    );

    let on_indicator_enter = {
        let header = header.clone();
        Callback::from(move |_: MouseEvent| {
            header.dispatch(HeaderEvent::PointerEntered);
        })
    };

    html! {
        <div
            id="header-indicator"
            class={classes!(hidden.then(|| "active"))}
            onmouseenter={on_indicator_enter}
        >
            {"Menu"}
        </div>
    }
}

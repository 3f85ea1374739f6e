//! Show/hide state machine for the site header.
//!
//! The header starts visible, slides away after a startup delay, hides when the
//! visitor scrolls down past a threshold and comes back on any upward scroll or
//! when the pointer enters the header or the "Menu" indicator.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Visible,
    Hidden,
}

/// What the startup timer does when the visitor has already scrolled or hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupHidePolicy {
    /// Hide once regardless of earlier interaction.
    Always,
    /// Skip the startup hide if any scroll or hover event came first.
    UnlessInteracted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderConfig {
    pub hide_threshold_px: f64,
    pub startup_hide_ms: u32,
    pub startup_policy: StartupHidePolicy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderEvent {
    StartupTimerFired,
    Scrolled { offset: f64 },
    PointerEntered,
    PointerLeft { offset: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderController {
    visibility: HeaderVisibility,
    last_offset: f64,
    interacted: bool,
    config: HeaderConfig,
}

impl HeaderController {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            visibility: HeaderVisibility::Visible,
            last_offset: 0.0,
            interacted: false,
            config,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == HeaderVisibility::Hidden
    }

    pub fn apply(&self, event: HeaderEvent) -> Self {
        let mut next = self.clone();
        match event {
            HeaderEvent::StartupTimerFired => {
                if !(self.interacted && self.config.startup_policy == StartupHidePolicy::UnlessInteracted) {
                    next.visibility = HeaderVisibility::Hidden;
                }
            }
            HeaderEvent::Scrolled { offset } => {
                let offset = offset.max(0.0);
                let scrolling_down = offset - self.last_offset > 0.0;
                next.visibility = if scrolling_down && offset > self.config.hide_threshold_px {
                    HeaderVisibility::Hidden
                } else {
                    HeaderVisibility::Visible
                };
                next.last_offset = offset;
                next.interacted = true;
            }
            HeaderEvent::PointerEntered => {
                next.visibility = HeaderVisibility::Visible;
                next.interacted = true;
            }
            HeaderEvent::PointerLeft { offset } => {
                // Near the top of the page the header stays put to avoid flicker.
                if offset > self.config.hide_threshold_px {
                    next.visibility = HeaderVisibility::Hidden;
                }
                next.interacted = true;
            }
        }
        next
    }
}

impl Reducible for HeaderController {
    type Action = HeaderEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(policy: StartupHidePolicy) -> HeaderConfig {
        HeaderConfig {
            hide_threshold_px: 100.0,
            startup_hide_ms: 2000,
            startup_policy: policy,
        }
    }

    fn run(policy: StartupHidePolicy, events: &[HeaderEvent]) -> HeaderController {
        events
            .iter()
            .fold(HeaderController::new(config(policy)), |state, event| state.apply(*event))
    }

    fn scroll(offset: f64) -> HeaderEvent {
        HeaderEvent::Scrolled { offset }
    }

    #[test]
    fn starts_visible() {
        let header = HeaderController::new(config(StartupHidePolicy::Always));
        assert_eq!(header.visibility, HeaderVisibility::Visible);
        assert_eq!(header.last_offset, 0.0);
    }

    #[test]
    fn startup_timer_hides_and_is_idempotent() {
        let once = run(StartupHidePolicy::Always, &[HeaderEvent::StartupTimerFired]);
        let twice = once.apply(HeaderEvent::StartupTimerFired);
        assert!(once.is_hidden());
        assert_eq!(once, twice);
    }

    #[test]
    fn startup_timer_fires_after_interaction_by_default() {
        let header = run(
            StartupHidePolicy::Always,
            &[HeaderEvent::PointerEntered, HeaderEvent::StartupTimerFired],
        );
        assert!(header.is_hidden());
    }

    #[test]
    fn startup_timer_respects_prior_interaction_when_configured() {
        let hovered = run(
            StartupHidePolicy::UnlessInteracted,
            &[HeaderEvent::PointerEntered, HeaderEvent::StartupTimerFired],
        );
        let scrolled = run(
            StartupHidePolicy::UnlessInteracted,
            &[scroll(20.0), HeaderEvent::StartupTimerFired],
        );
        let untouched = run(StartupHidePolicy::UnlessInteracted, &[HeaderEvent::StartupTimerFired]);

        assert!(!hovered.is_hidden());
        assert!(!scrolled.is_hidden());
        assert!(untouched.is_hidden());
    }

    #[test]
    fn scrolling_down_past_threshold_hides() {
        let header = run(StartupHidePolicy::Always, &[scroll(50.0), scroll(150.0)]);
        assert!(header.is_hidden());
        assert_eq!(header.last_offset, 150.0);
    }

    #[test]
    fn scrolling_down_within_threshold_stays_visible() {
        let header = run(StartupHidePolicy::Always, &[scroll(40.0), scroll(100.0)]);
        assert!(!header.is_hidden());
    }

    #[test]
    fn scrolling_up_shows_and_still_records_offset() {
        let header = run(StartupHidePolicy::Always, &[scroll(500.0), scroll(450.0)]);
        assert!(!header.is_hidden());
        assert_eq!(header.last_offset, 450.0);
    }

    #[test]
    fn scroll_without_movement_shows() {
        let header = run(
            StartupHidePolicy::Always,
            &[HeaderEvent::StartupTimerFired, scroll(0.0)],
        );
        assert!(!header.is_hidden());
    }

    #[test]
    fn any_scroll_after_startup_hide_is_judged_on_its_own() {
        let header = run(
            StartupHidePolicy::Always,
            &[HeaderEvent::StartupTimerFired, scroll(300.0)],
        );
        assert!(header.is_hidden());
    }

    #[test]
    fn hover_enter_always_shows() {
        let sequences: [&[HeaderEvent]; 3] = [
            &[HeaderEvent::StartupTimerFired],
            &[scroll(120.0), scroll(900.0)],
            &[],
        ];
        for events in sequences {
            let header = run(StartupHidePolicy::Always, events).apply(HeaderEvent::PointerEntered);
            assert_eq!(header.visibility, HeaderVisibility::Visible);
        }
    }

    #[test]
    fn hover_leave_hides_only_below_threshold() {
        let deep = run(
            StartupHidePolicy::Always,
            &[HeaderEvent::PointerEntered, HeaderEvent::PointerLeft { offset: 250.0 }],
        );
        let near_top = run(
            StartupHidePolicy::Always,
            &[HeaderEvent::PointerEntered, HeaderEvent::PointerLeft { offset: 100.0 }],
        );
        assert!(deep.is_hidden());
        assert!(!near_top.is_hidden());
    }

    #[test]
    fn hover_leave_near_top_leaves_hidden_state_alone() {
        let header = run(
            StartupHidePolicy::Always,
            &[HeaderEvent::StartupTimerFired, HeaderEvent::PointerLeft { offset: 10.0 }],
        );
        assert!(header.is_hidden());
    }

    #[test]
    fn latest_event_wins() {
        let header = run(
            StartupHidePolicy::Always,
            &[
                scroll(200.0),
                scroll(400.0),
                HeaderEvent::PointerEntered,
                scroll(380.0),
                scroll(600.0),
            ],
        );
        assert!(header.is_hidden());
    }

    #[test]
    fn reducer_keeps_the_same_state_when_nothing_changes() {
        let state = Rc::new(run(StartupHidePolicy::Always, &[HeaderEvent::StartupTimerFired]));
        let next = state.clone().reduce(HeaderEvent::StartupTimerFired);
        assert!(Rc::ptr_eq(&state, &next));
    }
}

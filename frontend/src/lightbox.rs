/// State of the gallery overlay: which image, if any, is being shown full size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    active_src: Option<String>,
}

impl LightboxState {
    pub fn is_active(&self) -> bool {
        self.active_src.is_some()
    }

    pub fn src(&self) -> &str {
        self.active_src.as_deref().unwrap_or("")
    }

    /// Opening while already open just swaps the image.
    pub fn open(&self, src: impl Into<String>) -> Self {
        Self {
            active_src: Some(src.into()),
        }
    }

    pub fn close(&self) -> Self {
        Self::default()
    }

    /// Clicks inside the content (the image itself) keep the overlay open; only a
    /// click landing on the backdrop dismisses it.
    pub fn click(&self, on_backdrop: bool) -> Self {
        if on_backdrop {
            self.close()
        } else {
            self.clone()
        }
    }

    /// Value for `body.style.overflow` while in this state.
    pub fn body_overflow(&self) -> &'static str {
        if self.is_active() {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_page_scrolling() {
        let state = LightboxState::default();
        assert!(!state.is_active());
        assert_eq!(state.body_overflow(), "");
    }

    #[test]
    fn open_locks_scrolling_and_shows_source() {
        let state = LightboxState::default().open("/assets/images/gallery/1.jpg");
        assert!(state.is_active());
        assert_eq!(state.src(), "/assets/images/gallery/1.jpg");
        assert_eq!(state.body_overflow(), "hidden");
    }

    #[test]
    fn second_open_replaces_the_image() {
        let state = LightboxState::default().open("a.jpg").open("b.jpg");
        assert_eq!(state.src(), "b.jpg");
    }

    #[test]
    fn only_backdrop_clicks_dismiss() {
        let open = LightboxState::default().open("a.jpg");
        assert_eq!(open.click(false), open);
        assert!(!open.click(true).is_active());
        assert_eq!(open.close().body_overflow(), "");
    }
}

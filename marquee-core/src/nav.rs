//! Navigation bar: hamburger menu, in-page links, sticky state, login button

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::scroll as defaults;
use crate::scroll::ScrollRequest;
use crate::timers::{Scheduler, TimerEvent, TimerHandle};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavConfig {
    pub login_redirect_ms: u64,
    pub login_url: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            login_redirect_ms: defaults::LOGIN_REDIRECT_MS,
            login_url: defaults::LOGIN_URL.to_string(),
        }
    }
}

/// A clicked element inside the navigation links container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A regular nav link pointing at an in-page anchor.
    Link(String),
    /// The login button.
    LoginButton,
    /// Any other element inside the container.
    Other,
}

pub struct NavBar<T: Scheduler> {
    scheduler: T,
    cfg: NavConfig,
    menu_open: bool,
    sticky: bool,
    redirect: Option<TimerHandle>,
}

impl<T: Scheduler> NavBar<T> {
    pub fn new(scheduler: T, cfg: NavConfig) -> Self {
        Self {
            scheduler,
            cfg,
            menu_open: false,
            sticky: false,
            redirect: None,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect.is_some()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A click landed inside the links container. Regular links scroll to
    /// their anchor and close the mobile menu.
    pub fn link_clicked(&mut self, target: &NavTarget) -> Option<ScrollRequest> {
        match target {
            NavTarget::Link(href) => {
                self.menu_open = false;
                Some(ScrollRequest::Anchor(href.clone()))
            }
            NavTarget::LoginButton | NavTarget::Other => None,
        }
    }

    pub fn scroll_to_features(&self) -> ScrollRequest {
        ScrollRequest::Anchor(defaults::FEATURES_ANCHOR.to_string())
    }

    /// The header's visibility changed. The bar sticks once the header has
    /// scrolled out of view.
    pub fn header_visibility(&mut self, intersecting: bool) {
        self.sticky = !intersecting;
    }

    /// Arm the delayed redirect to the login page.
    pub fn login_clicked(&mut self) {
        if let Some(previous) = self.redirect.take() {
            self.scheduler.cancel(previous);
        }
        let delay = Duration::from_millis(self.cfg.login_redirect_ms);
        self.redirect = Some(self.scheduler.once(delay, TimerEvent::LoginRedirect));
    }

    /// The redirect timer fired; returns the destination.
    pub fn redirect_due(&mut self) -> Option<&str> {
        self.redirect.take().map(|_| self.cfg.login_url.as_str())
    }
}

impl<T: Scheduler> fmt::Debug for NavBar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavBar")
            .field("menu_open", &self.menu_open)
            .field("sticky", &self.sticky)
            .field("redirect", &self.redirect)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::SharedScheduler;

    #[test]
    fn link_click_scrolls_and_closes_menu() {
        let mut nav = NavBar::new(SharedScheduler::new(), NavConfig::default());
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        let request = nav.link_clicked(&NavTarget::Link("#pricing".into()));
        assert_eq!(request, Some(ScrollRequest::Anchor("#pricing".into())));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn login_button_is_not_a_scroll_link() {
        let mut nav = NavBar::new(SharedScheduler::new(), NavConfig::default());
        nav.toggle_menu();
        assert_eq!(nav.link_clicked(&NavTarget::LoginButton), None);
        assert!(nav.is_menu_open());
    }

    #[test]
    fn redirect_fires_once_after_delay() {
        let clock = SharedScheduler::new();
        let mut nav = NavBar::new(clock.clone(), NavConfig::default());
        nav.login_clicked();

        let mut fired = Vec::new();
        clock.advance(Duration::from_millis(1_000), |e| fired.push(e));
        assert_eq!(fired, vec![TimerEvent::LoginRedirect]);
        assert_eq!(nav.redirect_due(), Some("login.html"));
        assert_eq!(nav.redirect_due(), None);
    }

    #[test]
    fn sticky_tracks_header_visibility() {
        let mut nav = NavBar::new(SharedScheduler::new(), NavConfig::default());
        nav.header_visibility(false);
        assert!(nav.is_sticky());
        nav.header_visibility(true);
        assert!(!nav.is_sticky());
    }
}

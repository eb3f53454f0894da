//! The landing page as one aggregate
//!
//! [`LandingPage`] owns every interactive component, routes host messages to
//! them and turns their side effects (notices, redirects, scroll requests)
//! into state the host can read back.

use std::fmt;

use rand::Rng;

use crate::card_stack::{CardBoard, CardStack};
use crate::config::PageConfig;
use crate::counters::CounterAnimation;
use crate::host::Viewport;
use crate::loading::LoadingScreen;
use crate::nav::NavBar;
use crate::newsletter::NewsletterForm;
use crate::particles::{self, Particle};
use crate::prefs::PreferenceStore;
use crate::reveal::VisibilityObserver;
use crate::scroll::{ScrollIndicators, ScrollRequest};
use crate::slider::Slider;
use crate::tabs::TabPanel;
use crate::theme::ThemeController;
use crate::timers::Scheduler;
use crate::toast::ToastCenter;

pub mod layout;
pub mod messages;
mod update;

pub use layout::PageLayout;
pub use messages::PageMessage;

/// Id the stats block is observed under.
pub const STATS_ID: &str = "stats";

pub struct LandingPage<T: Scheduler + Clone, P: PreferenceStore> {
    card_stack: Option<CardStack<CardBoard, T>>,
    slider: Option<Slider<T>>,
    toasts: ToastCenter<T>,
    theme: ThemeController<P, T>,
    tabs: Option<TabPanel>,
    nav: NavBar<T>,
    scroll: ScrollIndicators,
    newsletter: NewsletterForm<T>,
    loading: LoadingScreen<T>,

    sections: VisibilityObserver,
    entries: VisibilityObserver,
    images: VisibilityObserver,
    stats: VisibilityObserver,
    counters: Vec<CounterAnimation>,
    counters_started: bool,
    particles: Vec<Particle>,

    scroll_requests: Vec<ScrollRequest>,
    navigation: Option<String>,
    disposed: bool,
}

impl<T: Scheduler + Clone, P: PreferenceStore> LandingPage<T, P> {
    /// Build every component described by `cfg.layout`. Components share
    /// `scheduler`; the theme reads its initial mode from `store`.
    pub fn new<R: Rng>(
        cfg: &PageConfig,
        scheduler: T,
        store: P,
        viewport: &dyn Viewport,
        rng: &mut R,
    ) -> Self {
        let layout = &cfg.layout;

        let card_stack = (layout.cards > 0).then(|| {
            CardStack::new(
                CardBoard::new(layout.cards),
                scheduler.clone(),
                viewport,
                cfg.card_stack,
            )
        });
        let slider = (layout.slides > 0)
            .then(|| Slider::new(layout.slides, scheduler.clone(), cfg.slider));

        let stats = if layout.stats.is_empty() {
            VisibilityObserver::new(cfg.reveal.stats_threshold)
        } else {
            VisibilityObserver::watching(cfg.reveal.stats_threshold, [STATS_ID])
        };

        let page = Self {
            card_stack,
            slider,
            toasts: ToastCenter::new(scheduler.clone(), cfg.toast),
            theme: ThemeController::new(store, scheduler.clone(), cfg.theme),
            tabs: TabPanel::new(layout.tabs.iter().cloned()),
            nav: NavBar::new(scheduler.clone(), cfg.nav.clone()),
            scroll: ScrollIndicators::new(cfg.scroll),
            newsletter: NewsletterForm::new(scheduler.clone(), cfg.newsletter),
            loading: LoadingScreen::new(scheduler, cfg.loading),
            sections: VisibilityObserver::watching(
                cfg.reveal.section_threshold,
                layout.sections.iter().cloned(),
            ),
            entries: VisibilityObserver::watching(
                cfg.reveal.entry_animation_threshold,
                layout.sections.iter().cloned(),
            ),
            images: VisibilityObserver::watching(
                cfg.reveal.image_threshold,
                layout.images.iter().cloned(),
            ),
            stats,
            counters: layout.stats.iter().copied().map(CounterAnimation::new).collect(),
            counters_started: false,
            particles: particles::generate(rng, cfg.particles),
            scroll_requests: Vec::new(),
            navigation: None,
            disposed: false,
        };

        log::debug!(
            "Landing page ready: {} cards, {} slides, {} tabs, {} sections",
            layout.cards,
            layout.slides,
            layout.tabs.len(),
            layout.sections.len()
        );
        page
    }

    pub fn card_stack(&self) -> Option<&CardStack<CardBoard, T>> {
        self.card_stack.as_ref()
    }

    pub fn slider(&self) -> Option<&Slider<T>> {
        self.slider.as_ref()
    }

    pub fn toasts(&self) -> &ToastCenter<T> {
        &self.toasts
    }

    pub fn theme(&self) -> &ThemeController<P, T> {
        &self.theme
    }

    pub fn tabs(&self) -> Option<&TabPanel> {
        self.tabs.as_ref()
    }

    pub fn nav(&self) -> &NavBar<T> {
        &self.nav
    }

    pub fn scroll(&self) -> &ScrollIndicators {
        &self.scroll
    }

    pub fn newsletter(&self) -> &NewsletterForm<T> {
        &self.newsletter
    }

    pub fn loading(&self) -> &LoadingScreen<T> {
        &self.loading
    }

    /// Sections revealed so far.
    pub fn sections(&self) -> &VisibilityObserver {
        &self.sections
    }

    /// Sections whose entry animation has played.
    pub fn entries(&self) -> &VisibilityObserver {
        &self.entries
    }

    /// Images whose real source has been swapped in.
    pub fn images(&self) -> &VisibilityObserver {
        &self.images
    }

    pub fn counters(&self) -> &[CounterAnimation] {
        &self.counters
    }

    /// Whether the host should keep sending [`PageMessage::CounterFrame`].
    pub fn counters_running(&self) -> bool {
        self.counters_started && self.counters.iter().any(|c| !c.is_finished())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Scroll requests raised since the last call, oldest first.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    /// Destination of a redirect that became due, if any.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }
}

impl<T: Scheduler + Clone, P: PreferenceStore> fmt::Debug for LandingPage<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LandingPage")
            .field("card_stack", &self.card_stack)
            .field("slider", &self.slider)
            .field("toasts", &self.toasts)
            .field("theme", &self.theme)
            .field("tabs", &self.tabs)
            .field("nav", &self.nav)
            .field("loading", &self.loading)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

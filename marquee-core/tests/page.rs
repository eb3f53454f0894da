use std::time::Duration;

use marquee_core::card_stack::CardStackMessage;
use marquee_core::host::FixedViewport;
use marquee_core::input::Key;
use marquee_core::loading::LoadingPhase;
use marquee_core::nav::NavTarget;
use marquee_core::prefs::{MemoryStore, PreferenceStore};
use marquee_core::scroll::{ScrollMetrics, ScrollRequest};
use marquee_core::theme::ThemeMode;
use marquee_core::timers::SharedScheduler;
use marquee_core::toast::ToastKind;
use marquee_core::{LandingPage, PageConfig, PageLayout, PageMessage};
use rand::SeedableRng;
use rand::rngs::StdRng;

type Page = LandingPage<SharedScheduler, MemoryStore>;

fn page_with(cfg: PageConfig, store: MemoryStore) -> (Page, SharedScheduler) {
    let clock = SharedScheduler::new();
    let mut rng = StdRng::seed_from_u64(1);
    let page = LandingPage::new(&cfg, clock.clone(), store, &FixedViewport(1280.0), &mut rng);
    (page, clock)
}

fn page() -> (Page, SharedScheduler) {
    page_with(PageConfig::default(), MemoryStore::new())
}

fn pump(clock: &SharedScheduler, page: &mut Page, ms: u64) {
    clock.advance(Duration::from_millis(ms), |event| {
        page.update(PageMessage::Timer(event))
    });
}

fn toast_text(page: &Page) -> Option<(String, ToastKind)> {
    page.toasts()
        .current()
        .map(|toast| (toast.message.clone(), toast.kind))
}

#[test]
fn arrow_keys_drive_card_stack_and_slider_together() {
    let (mut page, _clock) = page();
    page.update(PageMessage::Key(Key::ArrowRight));

    assert_eq!(page.card_stack().map(|s| s.current_index()), Some(1));
    assert_eq!(page.slider().map(|s| s.current()), Some(1));

    // card stack is locked, the slider is not
    page.update(PageMessage::Key(Key::ArrowLeft));
    assert_eq!(page.card_stack().map(|s| s.current_index()), Some(1));
    assert_eq!(page.slider().map(|s| s.current()), Some(0));
}

#[test]
fn card_stack_messages_reach_the_stack() {
    let (mut page, clock) = page();
    page.update(PageMessage::CardStack(CardStackMessage::IndicatorClicked(3)));
    assert_eq!(page.card_stack().map(|s| s.current_index()), Some(3));

    pump(&clock, &mut page, 600);
    assert_eq!(page.card_stack().map(|s| s.is_animating()), Some(false));
}

#[test]
fn theme_toggle_persists_and_announces() {
    let (mut page, clock) = page_with(PageConfig::default(), MemoryStore::with("darkMode", "false"));
    assert_eq!(page.theme().mode(), ThemeMode::Light);

    page.update(PageMessage::ToggleTheme);
    assert_eq!(page.theme().mode(), ThemeMode::Dark);
    assert_eq!(page.theme().store().get("darkMode").as_deref(), Some("true"));
    assert_eq!(
        toast_text(&page),
        Some(("Switched to dark mode".to_string(), ToastKind::Success))
    );

    pump(&clock, &mut page, 500);
    assert!(!page.theme().is_button_animating());
    pump(&clock, &mut page, 2_500);
    assert!(page.toasts().current().is_none());
}

#[test]
fn login_redirects_after_delay() {
    let (mut page, clock) = page();
    page.update(PageMessage::LoginClicked);
    assert_eq!(
        toast_text(&page).map(|(text, _)| text),
        Some("Redirecting to login...".to_string())
    );
    assert_eq!(page.take_navigation(), None);

    pump(&clock, &mut page, 1_000);
    assert_eq!(page.take_navigation().as_deref(), Some("login.html"));
    assert_eq!(page.take_navigation(), None);
}

#[test]
fn newsletter_success_and_failure_toasts() {
    let (mut page, clock) = page();
    page.update(PageMessage::EmailInput("not-an-email".into()));
    page.update(PageMessage::SubmitNewsletter);
    assert_eq!(
        toast_text(&page),
        Some(("Invalid email address".to_string(), ToastKind::Error))
    );

    page.update(PageMessage::EmailInput(String::new()));
    for ch in "ada@example.com".chars() {
        page.update(PageMessage::EmailChar(ch));
    }
    page.update(PageMessage::EmailChar('x'));
    page.update(PageMessage::EmailBackspace);
    page.update(PageMessage::SubmitNewsletter);
    pump(&clock, &mut page, 900);

    assert_eq!(
        toast_text(&page),
        Some(("Subscribed successfully".to_string(), ToastKind::Success))
    );
    assert_eq!(page.newsletter().email(), "");
}

#[test]
fn stats_counters_start_once_visible() {
    let (mut page, _clock) = page();
    page.update(PageMessage::CounterFrame);
    assert_eq!(page.counters()[0].text(), "0");

    page.update(PageMessage::StatsVisibility(0.3));
    assert!(!page.counters_running());
    page.update(PageMessage::StatsVisibility(0.6));
    assert!(page.counters_running());

    while page.counters_running() {
        page.update(PageMessage::CounterFrame);
    }
    let texts: Vec<&str> = page.counters().iter().map(|c| c.text()).collect();
    assert_eq!(texts, vec!["12,500", "98", "1,250,000"]);
}

#[test]
fn sections_and_images_reveal_once() {
    let (mut page, _clock) = page();
    page.update(PageMessage::SectionVisibility {
        id: "features".into(),
        ratio: 0.12,
    });
    assert!(page.entries().has_fired("features"));
    assert!(!page.sections().has_fired("features"));

    page.update(PageMessage::SectionVisibility {
        id: "features".into(),
        ratio: 0.2,
    });
    assert!(page.sections().has_fired("features"));

    page.update(PageMessage::ImageVisibility {
        id: "testimonial".into(),
        ratio: 0.1,
    });
    assert!(page.images().has_fired("testimonial"));
    assert!(page.images().is_watching("feature-grow"));
}

#[test]
fn navigation_raises_scroll_requests() {
    let (mut page, _clock) = page();
    page.update(PageMessage::ToggleMenu);
    page.update(PageMessage::NavClicked(NavTarget::Link("#pricing".into())));
    page.update(PageMessage::ScrollToFeatures);
    page.update(PageMessage::Scrolled(ScrollMetrics {
        scroll_top: 900.0,
        scroll_height: 3_000.0,
        viewport_height: 800.0,
    }));
    page.update(PageMessage::BackToTop);

    assert!(!page.nav().is_menu_open());
    assert!(page.scroll().back_to_top_visible());
    assert_eq!(
        page.take_scroll_requests(),
        vec![
            ScrollRequest::Anchor("#pricing".into()),
            ScrollRequest::Anchor("#features".into()),
            ScrollRequest::Top,
        ]
    );
    assert!(page.take_scroll_requests().is_empty());
}

#[test]
fn tabs_switch_and_ignore_unknown_ids() {
    let (mut page, _clock) = page();
    page.update(PageMessage::TabClicked("2".into()));
    page.update(PageMessage::TabClicked("missing".into()));
    assert_eq!(page.tabs().map(|t| t.active_id()), Some("2"));
}

#[test]
fn loading_screen_fades_after_load() {
    let (mut page, clock) = page();
    page.update(PageMessage::Loaded);
    pump(&clock, &mut page, 2_000);
    assert_eq!(page.loading().phase(), LoadingPhase::Fading);
    pump(&clock, &mut page, 500);
    assert_eq!(page.loading().phase(), LoadingPhase::Gone);
}

#[test]
fn page_without_cards_still_runs_the_slider() {
    let mut cfg = PageConfig::default();
    cfg.layout = PageLayout {
        cards: 0,
        ..PageLayout::default()
    };
    let (mut page, clock) = page_with(cfg, MemoryStore::new());
    assert!(page.card_stack().is_none());

    page.update(PageMessage::Key(Key::ArrowRight));
    page.update(PageMessage::CardStack(CardStackMessage::Next));
    assert_eq!(page.slider().map(|s| s.current()), Some(1));

    pump(&clock, &mut page, 5_000);
    assert_eq!(page.slider().map(|s| s.current()), Some(2));
}

#[test]
fn empty_layout_builds_an_inert_page() {
    let mut cfg = PageConfig::default();
    cfg.layout = PageLayout::empty();
    let (mut page, _clock) = page_with(cfg, MemoryStore::new());
    page.update(PageMessage::Key(Key::ArrowLeft));
    page.update(PageMessage::StatsVisibility(1.0));
    page.update(PageMessage::TabClicked("1".into()));

    assert!(page.slider().is_none());
    assert!(page.tabs().is_none());
    assert!(!page.counters_running());
    assert_eq!(page.particles().len(), 50);
}

#[test]
fn disposed_page_ignores_everything() {
    let (mut page, clock) = page();
    page.update(PageMessage::Dispose);
    page.update(PageMessage::Key(Key::ArrowRight));
    pump(&clock, &mut page, 20_000);

    assert!(page.is_disposed());
    let stack = page.card_stack().expect("card stack");
    assert!(stack.is_disposed());
    assert_eq!(stack.current_index(), 0);
    assert_eq!(page.slider().map(|s| s.current()), Some(0));
}

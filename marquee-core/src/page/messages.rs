use crate::card_stack::CardStackMessage;
use crate::input::Key;
use crate::nav::NavTarget;
use crate::scroll::ScrollMetrics;
use crate::slider::SliderMessage;
use crate::timers::TimerEvent;

/// Everything the host can tell the page.
#[derive(Clone)]
pub enum PageMessage {
    /// Page finished loading; starts the loading-screen fade.
    Loaded,

    // Component passthrough
    CardStack(CardStackMessage),
    Slider(SliderMessage),

    /// Document-level key press, seen by every keyboard-driven component.
    Key(Key),
    Timer(TimerEvent),

    ToggleTheme,
    ToggleMenu,
    NavClicked(NavTarget),
    ScrollToFeatures,
    LoginClicked,
    BackToTop,

    Scrolled(ScrollMetrics),
    HeaderVisibility(bool),
    SectionVisibility { id: String, ratio: f32 },
    ImageVisibility { id: String, ratio: f32 },
    StatsVisibility(f32),
    CounterFrame,

    TabClicked(String),

    EmailInput(String),
    EmailChar(char),
    EmailBackspace,
    SubmitNewsletter,

    Dispose,
}

impl PageMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loaded => "Page::Loaded",
            Self::CardStack(_) => "Page::CardStack",
            Self::Slider(_) => "Page::Slider",
            Self::Key(_) => "Page::Key",
            Self::Timer(_) => "Page::Timer",
            Self::ToggleTheme => "Page::ToggleTheme",
            Self::ToggleMenu => "Page::ToggleMenu",
            Self::NavClicked(_) => "Page::NavClicked",
            Self::ScrollToFeatures => "Page::ScrollToFeatures",
            Self::LoginClicked => "Page::LoginClicked",
            Self::BackToTop => "Page::BackToTop",
            Self::Scrolled(_) => "Page::Scrolled",
            Self::HeaderVisibility(_) => "Page::HeaderVisibility",
            Self::SectionVisibility { .. } => "Page::SectionVisibility",
            Self::ImageVisibility { .. } => "Page::ImageVisibility",
            Self::StatsVisibility(_) => "Page::StatsVisibility",
            Self::CounterFrame => "Page::CounterFrame",
            Self::TabClicked(_) => "Page::TabClicked",
            Self::EmailInput(_) => "Page::EmailInput",
            Self::EmailChar(_) => "Page::EmailChar",
            Self::EmailBackspace => "Page::EmailBackspace",
            Self::SubmitNewsletter => "Page::SubmitNewsletter",
            Self::Dispose => "Page::Dispose",
        }
    }
}

impl std::fmt::Debug for PageMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CardStack(inner) => write!(f, "Page::CardStack({inner:?})"),
            Self::Slider(inner) => write!(f, "Page::Slider({})", inner.name()),
            Self::Key(key) => write!(f, "Page::Key({key:?})"),
            Self::Timer(event) => write!(f, "Page::{}", event.name()),
            Self::TabClicked(id) => write!(f, "Page::TabClicked({id})"),
            Self::SectionVisibility { id, ratio } => {
                write!(f, "Page::SectionVisibility({id}, {ratio:.2})")
            }
            Self::ImageVisibility { id, ratio } => {
                write!(f, "Page::ImageVisibility({id}, {ratio:.2})")
            }
            Self::StatsVisibility(ratio) => {
                write!(f, "Page::StatsVisibility({ratio:.2})")
            }
            // Keep typed addresses out of logs
            Self::EmailInput(_) | Self::EmailChar(_) => write!(f, "{}", self.name()),
            other => write!(f, "{}", other.name()),
        }
    }
}

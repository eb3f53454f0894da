//! Headless scripted runs
//!
//! A script is one command per line; `#` starts a comment line and blank
//! lines are skipped:
//!
//! ```text
//! next | prev | go <k> | dot <k>
//! key left|right
//! swipe <dx> <dy>      # start minus end, as a finger would travel
//! hover on|off
//! wait <ms>
//! dark | menu | login | submit | features | top
//! tab <id>
//! scroll <px>
//! email <text>
//! ```
//!
//! Time only moves on `wait`, on a virtual clock, so runs are reproducible.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use marquee_core::card_stack::CardStackMessage;
use marquee_core::host::FixedViewport;
use marquee_core::input::{Key, PointerEvent, PointerPhase};
use marquee_core::prefs::PreferenceStore;
use marquee_core::slider::SliderMessage;
use marquee_core::timers::SharedScheduler;
use marquee_core::{LandingPage, PageConfig, PageMessage};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::document::VirtualDocument;
use crate::report::{self, History};

/// Viewport assumed when none is given on the command line.
pub const DEFAULT_VIEWPORT: (f32, f32) = (1280.0, 800.0);
const FRAME_MS: u64 = 16;
const SWIPE_ORIGIN: (f32, f32) = (400.0, 300.0);

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Prev,
    Go(usize),
    Dot(usize),
    Key(Key),
    Swipe { dx: f32, dy: f32 },
    Hover(bool),
    Wait(u64),
    Dark,
    Menu,
    Login,
    Submit,
    Features,
    Top,
    Tab(String),
    Scroll(f32),
    Email(String),
}

pub fn parse(contents: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command = parse_line(line)
            .with_context(|| format!("script line {}: {}", idx + 1, line))?;
        commands.push(command);
    }
    Ok(commands)
}

fn parse_line(line: &str) -> Result<Command> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word, rest) {
        ("next", "") => Command::Next,
        ("prev", "") => Command::Prev,
        ("go", k) => Command::Go(k.parse().context("card index")?),
        ("dot", k) => Command::Dot(k.parse().context("slide index")?),
        ("key", "left") => Command::Key(Key::ArrowLeft),
        ("key", "right") => Command::Key(Key::ArrowRight),
        ("swipe", args) => {
            let mut parts = args.split_whitespace();
            let (Some(dx), Some(dy), None) = (parts.next(), parts.next(), parts.next())
            else {
                bail!("swipe takes <dx> <dy>");
            };
            Command::Swipe {
                dx: dx.parse().context("swipe dx")?,
                dy: dy.parse().context("swipe dy")?,
            }
        }
        ("hover", "on") => Command::Hover(true),
        ("hover", "off") => Command::Hover(false),
        ("wait", ms) => Command::Wait(ms.parse().context("wait duration")?),
        ("dark", "") => Command::Dark,
        ("menu", "") => Command::Menu,
        ("login", "") => Command::Login,
        ("submit", "") => Command::Submit,
        ("features", "") => Command::Features,
        ("top", "") => Command::Top,
        ("tab", id) if !id.is_empty() => Command::Tab(id.to_string()),
        ("scroll", px) => Command::Scroll(px.parse().context("scroll offset")?),
        ("email", text) => Command::Email(text.to_string()),
        _ => return Err(anyhow!("unrecognized script command")),
    };
    Ok(command)
}

/// A page driven by script commands on a virtual clock.
pub struct ScriptRunner<P: PreferenceStore> {
    page: LandingPage<SharedScheduler, P>,
    clock: SharedScheduler,
    document: VirtualDocument,
    scroll_top: f32,
    history: History,
}

impl<P: PreferenceStore> ScriptRunner<P> {
    pub fn new(config: &PageConfig, store: P, viewport_width: f32, seed: u64) -> Self {
        let clock = SharedScheduler::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let viewport = FixedViewport(viewport_width);
        let mut page = LandingPage::new(config, clock.clone(), store, &viewport, &mut rng);
        page.update(PageMessage::Loaded);

        let document = VirtualDocument::new(&config.layout, DEFAULT_VIEWPORT.1);
        let mut runner = Self {
            page,
            clock,
            document,
            scroll_top: 0.0,
            history: History::default(),
        };
        runner.scroll_to(0.0);
        runner
    }

    pub fn page(&self) -> &LandingPage<SharedScheduler, P> {
        &self.page
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn apply(&mut self, command: &Command) -> Result<()> {
        log::debug!("script: {command:?}");
        match command {
            Command::Next => self.card(CardStackMessage::Next),
            Command::Prev => self.card(CardStackMessage::Previous),
            Command::Go(k) => {
                let cards = self.page.card_stack().map_or(0, |stack| stack.len());
                if *k >= cards {
                    bail!("card {k} out of range for {cards} cards");
                }
                self.card(CardStackMessage::IndicatorClicked(*k));
            }
            Command::Dot(k) => {
                let slides = self.page.slider().map_or(0, |slider| slider.len());
                if *k >= slides {
                    bail!("slide {k} out of range for {slides} slides");
                }
                self.page.update(PageMessage::Slider(SliderMessage::DotClicked(*k)));
            }
            Command::Key(key) => self.page.update(PageMessage::Key(key.clone())),
            Command::Swipe { dx, dy } => {
                let (x, y) = SWIPE_ORIGIN;
                for (phase, px, py) in [
                    (PointerPhase::Down, x, y),
                    (PointerPhase::Move, x - dx / 2.0, y - dy / 2.0),
                    (PointerPhase::Up, x - dx, y - dy),
                ] {
                    let event = PointerEvent::mouse(phase, px, py);
                    self.card(CardStackMessage::Pointer(event));
                }
            }
            Command::Hover(true) => self.card(CardStackMessage::HoverEnter),
            Command::Hover(false) => self.card(CardStackMessage::HoverLeave),
            Command::Wait(ms) => self.wait(*ms),
            Command::Dark => self.page.update(PageMessage::ToggleTheme),
            Command::Menu => self.page.update(PageMessage::ToggleMenu),
            Command::Login => self.page.update(PageMessage::LoginClicked),
            Command::Submit => self.page.update(PageMessage::SubmitNewsletter),
            Command::Features => self.page.update(PageMessage::ScrollToFeatures),
            Command::Top => self.page.update(PageMessage::BackToTop),
            Command::Tab(id) => self.page.update(PageMessage::TabClicked(id.clone())),
            Command::Scroll(px) => self.scroll_to(*px),
            Command::Email(text) => self.page.update(PageMessage::EmailInput(text.clone())),
        }
        self.follow_scroll_requests();
        self.history.record(&mut self.page);
        Ok(())
    }

    pub fn summary(&self) -> String {
        let mut out = format!("time: {}ms\n", self.clock.now().as_millis());
        out.push_str(&report::summary(&self.page, &self.history));
        out
    }

    fn card(&mut self, message: CardStackMessage) {
        self.page.update(PageMessage::CardStack(message));
    }

    /// Advance the clock in frame-sized steps so counter animations and
    /// timers interleave the way they would live.
    fn wait(&mut self, ms: u64) {
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(FRAME_MS);
            remaining -= step;
            let page = &mut self.page;
            self.clock.advance(Duration::from_millis(step), |event| {
                page.update(PageMessage::Timer(event))
            });
            if self.page.counters_running() {
                self.page.update(PageMessage::CounterFrame);
            }
            self.history.record(&mut self.page);
        }
    }

    fn scroll_to(&mut self, px: f32) {
        self.scroll_top = self.document.clamp(px);
        for message in self.document.observe(self.scroll_top) {
            self.page.update(message);
        }
    }

    fn follow_scroll_requests(&mut self) {
        for request in self.page.take_scroll_requests() {
            match self.document.resolve(&request) {
                Some(top) => self.scroll_to(top),
                None => log::debug!("no target for {request:?}"),
            }
        }
    }
}

/// Run the script at `path` and return the final summary.
pub fn run_file<P: PreferenceStore>(
    path: &Path,
    config: &PageConfig,
    store: P,
    viewport_width: f32,
    seed: u64,
) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read script {}", path.display()))?;
    let commands = parse(&contents)?;
    let mut runner = ScriptRunner::new(config, store, viewport_width, seed);
    for command in &commands {
        runner.apply(command)?;
    }
    Ok(runner.summary())
}

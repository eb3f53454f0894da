//! Interactive terminal host
//!
//! Terminal input, tokio timers and a frame ticker are multiplexed on one
//! current-thread runtime; each event is applied to the page to completion
//! before the next is taken.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use marquee_core::card_stack::CardStackMessage;
use marquee_core::host::FixedViewport;
use marquee_core::input::{Key, PointerEvent, PointerPhase};
use marquee_core::prefs::PreferenceStore;
use marquee_core::slider::SliderMessage;
use marquee_core::{LandingPage, PageConfig, PageLayout, PageMessage};
use rand::Rng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::cli::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::document::VirtualDocument;
use crate::report::History;
use crate::scheduler::{Fired, TokioScheduler};
use crate::ui;

const FRAME: Duration = Duration::from_millis(33);
const WHEEL_STEP_PX: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    /// Keystrokes go to the newsletter email field.
    Email,
}

/// Screen regions recorded by the last render, for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub stack: Rect,
    pub indicators: Vec<Rect>,
    pub dots: Vec<Rect>,
}

pub struct App<P: PreferenceStore> {
    page: LandingPage<TokioScheduler, P>,
    scheduler: TokioScheduler,
    layout: PageLayout,
    document: VirtualDocument,
    scroll_top: f32,
    mode: InputMode,
    hits: HitAreas,
    hovering: bool,
    dragging: bool,
    history: History,
    started: Instant,
    quit: bool,
}

impl<P: PreferenceStore> App<P> {
    pub fn new<R: Rng>(
        config: &PageConfig,
        scheduler: TokioScheduler,
        store: P,
        viewport: (f32, f32),
        rng: &mut R,
    ) -> Self {
        let mut page = LandingPage::new(
            config,
            scheduler.clone(),
            store,
            &FixedViewport(viewport.0),
            rng,
        );
        page.update(PageMessage::Loaded);

        let mut app = Self {
            page,
            scheduler,
            layout: config.layout.clone(),
            document: VirtualDocument::new(&config.layout, viewport.1),
            scroll_top: 0.0,
            mode: InputMode::Browse,
            hits: HitAreas::default(),
            hovering: false,
            dragging: false,
            history: History::default(),
            started: Instant::now(),
            quit: false,
        };
        app.scroll_to(0.0);
        app
    }

    pub fn page(&self) -> &LandingPage<TokioScheduler, P> {
        &self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn document(&self) -> &VirtualDocument {
        &self.document
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Seconds since start, for particle animation.
    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn set_hits(&mut self, hits: HitAreas) {
        self.hits = hits;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, rows) => self.resize(rows),
            _ => {}
        }
        self.settle();
    }

    pub fn handle_timer(&mut self, fired: Fired) {
        if let Some(event) = self.scheduler.accept(fired) {
            self.page.update(PageMessage::Timer(event));
            self.settle();
        }
    }

    /// Frame tick: advances counter animations while they run.
    pub fn frame(&mut self) {
        if self.page.counters_running() {
            self.page.update(PageMessage::CounterFrame);
        }
    }

    pub fn shutdown(&mut self) {
        self.page.update(PageMessage::Dispose);
        self.scheduler.shutdown();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match self.mode {
            InputMode::Email => match key.code {
                KeyCode::Esc => self.mode = InputMode::Browse,
                KeyCode::Enter => {
                    self.page.update(PageMessage::SubmitNewsletter);
                    self.mode = InputMode::Browse;
                }
                KeyCode::Backspace => self.page.update(PageMessage::EmailBackspace),
                KeyCode::Char(ch) => self.page.update(PageMessage::EmailChar(ch)),
                _ => {}
            },
            InputMode::Browse => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                KeyCode::Left => self.page.update(PageMessage::Key(Key::ArrowLeft)),
                KeyCode::Right => self.page.update(PageMessage::Key(Key::ArrowRight)),
                KeyCode::Char('[') => self.slider(SliderMessage::Previous),
                KeyCode::Char(']') => self.slider(SliderMessage::Next),
                KeyCode::Char('d') => self.page.update(PageMessage::ToggleTheme),
                KeyCode::Char('m') => self.page.update(PageMessage::ToggleMenu),
                KeyCode::Char('l') => self.page.update(PageMessage::LoginClicked),
                KeyCode::Char('f') => self.page.update(PageMessage::ScrollToFeatures),
                KeyCode::Char('n') => self.mode = InputMode::Email,
                KeyCode::Enter => self.page.update(PageMessage::SubmitNewsletter),
                KeyCode::Home => self.page.update(PageMessage::BackToTop),
                KeyCode::PageDown => self.scroll_by(self.page_step()),
                KeyCode::PageUp => self.scroll_by(-self.page_step()),
                KeyCode::Down => self.scroll_by(WHEEL_STEP_PX),
                KeyCode::Up => self.scroll_by(-WHEEL_STEP_PX),
                KeyCode::Char(digit @ '1'..='9') => {
                    let idx = digit as usize - '1' as usize;
                    let id = self
                        .page
                        .tabs()
                        .and_then(|tabs| tabs.ids().get(idx).cloned());
                    if let Some(id) = id {
                        self.page.update(PageMessage::TabClicked(id));
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(k) = hit_index(&self.hits.indicators, col, row) {
                    self.card(CardStackMessage::IndicatorClicked(k));
                } else if let Some(k) = hit_index(&self.hits.dots, col, row) {
                    self.slider(SliderMessage::DotClicked(k));
                } else if contains(self.hits.stack, col, row) {
                    self.dragging = true;
                    self.pointer(PointerPhase::Down, col, row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                self.pointer(PointerPhase::Move, col, row);
            }
            MouseEventKind::Up(MouseButton::Left) if self.dragging => {
                self.dragging = false;
                self.pointer(PointerPhase::Up, col, row);
            }
            MouseEventKind::Moved => {
                let inside = contains(self.hits.stack, col, row);
                if inside != self.hovering {
                    self.hovering = inside;
                    let message = if inside {
                        CardStackMessage::HoverEnter
                    } else {
                        CardStackMessage::HoverLeave
                    };
                    self.card(message);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP_PX),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP_PX),
            _ => {}
        }
    }

    fn card(&mut self, message: CardStackMessage) {
        self.page.update(PageMessage::CardStack(message));
    }

    fn slider(&mut self, message: SliderMessage) {
        self.page.update(PageMessage::Slider(message));
    }

    fn pointer(&mut self, phase: PointerPhase, col: u16, row: u16) {
        let event = PointerEvent::mouse(
            phase,
            f32::from(col) * CELL_WIDTH_PX,
            f32::from(row) * CELL_HEIGHT_PX,
        );
        self.card(CardStackMessage::Pointer(event));
    }

    fn page_step(&self) -> f32 {
        self.document.viewport_height() * 0.8
    }

    fn resize(&mut self, rows: u16) {
        self.document = VirtualDocument::new(&self.layout, f32::from(rows) * CELL_HEIGHT_PX);
        self.scroll_to(self.scroll_top);
    }

    fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_top + delta);
    }

    fn scroll_to(&mut self, px: f32) {
        self.scroll_top = self.document.clamp(px);
        for message in self.document.observe(self.scroll_top) {
            self.page.update(message);
        }
    }

    /// Carry out scroll requests and record toasts and redirects.
    fn settle(&mut self) {
        for request in self.page.take_scroll_requests() {
            if let Some(top) = self.document.resolve(&request) {
                self.scroll_to(top);
            }
        }
        self.history.record(&mut self.page);
    }
}

impl<P: PreferenceStore> std::fmt::Debug for App<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("scroll_top", &self.scroll_top)
            .field("mode", &self.mode)
            .field("hovering", &self.hovering)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

fn hit_index(rects: &[Rect], col: u16, row: u16) -> Option<usize> {
    rects.iter().position(|rect| contains(*rect, col, row))
}

/// Terminal viewport in pixels.
pub fn terminal_viewport() -> Result<(f32, f32)> {
    let (cols, rows) = terminal::size()?;
    Ok((f32::from(cols) * CELL_WIDTH_PX, f32::from(rows) * CELL_HEIGHT_PX))
}

/// Take over the terminal and run until the user quits.
pub async fn run<P, R>(
    config: PageConfig,
    store: P,
    viewport_width: Option<f32>,
    rng: &mut R,
) -> Result<()>
where
    P: PreferenceStore,
    R: Rng,
{
    let (width, height) = terminal_viewport()?;
    let viewport = (viewport_width.unwrap_or(width), height);
    let (scheduler, timers) = TokioScheduler::new();
    let mut app = App::new(&config, scheduler, store, viewport, rng);
    log::info!("Interactive session started, viewport {:.0}x{:.0}px", viewport.0, viewport.1);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app, timers).await;
    app.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop<P: PreferenceStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<P>,
    mut timers: mpsc::UnboundedReceiver<Fired>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut frames = time::interval(FRAME);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            maybe = events.next() => match maybe {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(fired) = timers.recv() => app.handle_timer(fired),
            _ = frames.tick() => app.frame(),
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

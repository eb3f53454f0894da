use std::fmt;

use super::config::CardStackConfig;
use super::messages::CardStackMessage;
use super::roles::{CardRole, role_for};
use crate::host::{CardSurface, Viewport};
use crate::input::{
    GestureOutcome, GestureTracker, Key, NavStep, PointerEvent, SwipeDirection,
};
use crate::timers::{CardStackTimer, Scheduler, TimerEvent, TimerHandle};

/// Card-stack carousel controller.
///
/// Owns the current index over a fixed set of cards and serializes
/// navigation through a timed lock: every successful transition blocks
/// further navigation for `animation_lock_ms`, and requests arriving inside
/// that window are dropped, not queued.
pub struct CardStack<S: CardSurface, T: Scheduler> {
    surface: S,
    scheduler: T,
    cfg: CardStackConfig,
    count: usize,
    current: usize,
    animating: bool,
    /// Decided once at construction from the viewport width.
    auto_advance_enabled: bool,
    auto_advance: Option<TimerHandle>,
    gesture: GestureTracker,
    hovered: bool,
    disposed: bool,
}

impl<S: CardSurface, T: Scheduler> CardStack<S, T> {
    /// Build the controller, render the initial roles and indicators, and
    /// start auto-advance when the viewport is wide enough.
    ///
    /// # Panics
    ///
    /// Panics when the surface has no cards or when its indicator count does
    /// not match its card count.
    pub fn new(
        surface: S,
        scheduler: T,
        viewport: &dyn Viewport,
        cfg: CardStackConfig,
    ) -> Self {
        let count = surface.card_count();
        assert!(count > 0, "card stack needs at least one card");
        assert_eq!(
            surface.indicator_count(),
            count,
            "card stack needs exactly one indicator per card"
        );

        let width = viewport.width();
        let auto_advance_enabled = width > cfg.auto_advance_min_viewport;

        let mut stack = Self {
            surface,
            scheduler,
            cfg,
            count,
            current: 0,
            animating: false,
            auto_advance_enabled,
            auto_advance: None,
            gesture: GestureTracker::new(cfg.swipe_threshold_px),
            hovered: false,
            disposed: false,
        };

        stack.render();
        log::debug!(
            "Card stack initialized: {} cards, viewport {:.0}px, auto-advance {}",
            count,
            width,
            if auto_advance_enabled { "on" } else { "off" }
        );
        stack.start_auto_advance();
        stack
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance_enabled
    }

    /// Whether an auto-advance schedule is currently armed.
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn role_of(&self, index: usize) -> CardRole {
        role_for(index, self.current, self.count)
    }

    pub fn config(&self) -> &CardStackConfig {
        &self.cfg
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Route one message to the matching operation.
    pub fn update(&mut self, message: CardStackMessage) {
        log::trace!("{:?}", message);
        match message {
            CardStackMessage::Next => {
                self.next_card();
            }
            CardStackMessage::Previous => {
                self.prev_card();
            }
            CardStackMessage::GoTo(index) => {
                self.go_to_card(index);
            }
            CardStackMessage::IndicatorClicked(index) => {
                self.indicator_clicked(index);
            }
            CardStackMessage::Key(key) => {
                self.handle_key(&key);
            }
            CardStackMessage::Pointer(event) => {
                self.handle_pointer(event);
            }
            CardStackMessage::HoverEnter => self.hover_enter(),
            CardStackMessage::HoverLeave => self.hover_leave(),
            CardStackMessage::Timer(timer) => self.handle_timer(timer),
        }
    }

    /// Jump to `index`. Returns whether a transition started.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not a valid card position.
    pub fn go_to_card(&mut self, index: usize) -> bool {
        assert!(
            index < self.count,
            "card index {index} out of range for {} cards",
            self.count
        );
        if self.blocked("go_to_card") || index == self.current {
            return false;
        }
        self.current = index;
        self.transition();
        true
    }

    pub fn next_card(&mut self) -> bool {
        if self.blocked("next_card") {
            return false;
        }
        self.current = (self.current + 1) % self.count;
        self.transition();
        true
    }

    pub fn prev_card(&mut self) -> bool {
        if self.blocked("prev_card") {
            return false;
        }
        self.current = (self.current + self.count - 1) % self.count;
        self.transition();
        true
    }

    /// Indicator `index` was clicked.
    pub fn indicator_clicked(&mut self, index: usize) -> bool {
        self.go_to_card(index)
    }

    /// Arm the periodic auto-advance, replacing any schedule already armed.
    /// Does nothing when auto-advance was disabled at construction.
    pub fn start_auto_advance(&mut self) {
        if self.disposed || !self.auto_advance_enabled {
            return;
        }
        if let Some(previous) = self.auto_advance.take() {
            self.scheduler.cancel(previous);
        }
        let handle = self.scheduler.every(
            self.cfg.auto_advance_period(),
            TimerEvent::CardStack(CardStackTimer::AutoAdvance),
        );
        log::trace!("Card stack auto-advance armed ({handle})");
        self.auto_advance = Some(handle);
    }

    pub fn stop_auto_advance(&mut self) {
        if let Some(handle) = self.auto_advance.take() {
            self.scheduler.cancel(handle);
            log::trace!("Card stack auto-advance cancelled ({handle})");
        }
    }

    /// Left/right arrows navigate; every other key is ignored.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key.nav_step() {
            Some(NavStep::Previous) => self.prev_card(),
            Some(NavStep::Next) => self.next_card(),
            None => false,
        }
    }

    /// Feed a pointer or touch event. The returned outcome tells the host
    /// whether to suppress default scrolling for this event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        if self.disposed {
            return GestureOutcome::Ignored;
        }
        let outcome = self.gesture.handle(event);
        match outcome {
            GestureOutcome::Started => self.stop_auto_advance(),
            GestureOutcome::Swipe(direction) => {
                log::debug!("Card stack swipe {:?}", direction);
                match direction {
                    SwipeDirection::Forward => self.next_card(),
                    SwipeDirection::Backward => self.prev_card(),
                };
                self.start_auto_advance();
            }
            GestureOutcome::Released => self.start_auto_advance(),
            GestureOutcome::Tracking | GestureOutcome::Ignored => {}
        }
        outcome
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.stop_auto_advance();
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.start_auto_advance();
    }

    pub fn handle_timer(&mut self, timer: CardStackTimer) {
        if self.disposed {
            log::trace!("Card stack disposed, dropping {:?}", timer);
            return;
        }
        match timer {
            CardStackTimer::AnimationUnlock => {
                self.animating = false;
            }
            CardStackTimer::AutoAdvance => {
                self.next_card();
            }
        }
    }

    /// Stop reacting to input and timers. The pending unlock timer may still
    /// fire; it is ignored.
    pub fn dispose(&mut self) {
        self.stop_auto_advance();
        self.disposed = true;
        log::debug!("Card stack disposed at index {}", self.current);
    }

    fn blocked(&self, op: &str) -> bool {
        if self.disposed {
            log::trace!("{op} ignored: card stack disposed");
            return true;
        }
        if self.animating {
            log::trace!("{op} dropped: transition in progress");
            return true;
        }
        false
    }

    fn transition(&mut self) {
        self.animating = true;
        self.render();
        self.scheduler.once(
            self.cfg.animation_lock(),
            TimerEvent::CardStack(CardStackTimer::AnimationUnlock),
        );
        log::debug!("Card stack moved to {}/{}", self.current, self.count);
    }

    fn render(&mut self) {
        for index in 0..self.count {
            let role = role_for(index, self.current, self.count);
            self.surface.apply_role(index, role);
        }
        for index in 0..self.count {
            self.surface
                .set_indicator_active(index, index == self.current);
        }
    }
}

impl<S: CardSurface, T: Scheduler> fmt::Debug for CardStack<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStack")
            .field("count", &self.count)
            .field("current", &self.current)
            .field("animating", &self.animating)
            .field("auto_advance_enabled", &self.auto_advance_enabled)
            .field("auto_advance", &self.auto_advance)
            .field("gesture", &self.gesture)
            .field("hovered", &self.hovered)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

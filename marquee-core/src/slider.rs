//! Fallback image slider
//!
//! A plain wrap-around slider with one dot per slide. Unlike the card stack
//! it has no transition lock: every request moves immediately.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::slider as defaults;
use crate::input::{Key, NavStep};
use crate::timers::{Scheduler, TimerEvent, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Period between automatic slide changes (ms).
    pub auto_slide_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            auto_slide_ms: defaults::AUTO_SLIDE_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SliderMessage {
    Next,
    Previous,
    DotClicked(usize),
    Key(Key),
    HoverEnter,
    HoverLeave,
    Advance,
}

impl SliderMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "Slider::Next",
            Self::Previous => "Slider::Previous",
            Self::DotClicked(_) => "Slider::DotClicked",
            Self::Key(_) => "Slider::Key",
            Self::HoverEnter => "Slider::HoverEnter",
            Self::HoverLeave => "Slider::HoverLeave",
            Self::Advance => "Slider::Advance",
        }
    }
}

pub struct Slider<T: Scheduler> {
    scheduler: T,
    period: Duration,
    count: usize,
    current: usize,
    auto_slide: Option<TimerHandle>,
}

impl<T: Scheduler> Slider<T> {
    /// Create the slider showing slide 0 and start auto-sliding.
    ///
    /// # Panics
    ///
    /// Panics when `count` is zero.
    pub fn new(count: usize, scheduler: T, cfg: SliderConfig) -> Self {
        assert!(count > 0, "slider needs at least one slide");
        let mut slider = Self {
            scheduler,
            period: Duration::from_millis(cfg.auto_slide_ms),
            count,
            current: 0,
            auto_slide: None,
        };
        slider.start_auto_slide();
        slider
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, slide: usize) -> bool {
        slide == self.current
    }

    pub fn is_auto_sliding(&self) -> bool {
        self.auto_slide.is_some()
    }

    /// Accessible label of the dot for `slide`.
    pub fn dot_label(slide: usize) -> String {
        format!("Slide {}", slide + 1)
    }

    pub fn update(&mut self, message: SliderMessage) {
        log::trace!("{}", message.name());
        match message {
            SliderMessage::Next | SliderMessage::Advance => self.next_slide(),
            SliderMessage::Previous => self.prev_slide(),
            SliderMessage::DotClicked(slide) => self.go_to_slide(slide),
            SliderMessage::Key(key) => self.handle_key(&key),
            SliderMessage::HoverEnter => self.stop_auto_slide(),
            SliderMessage::HoverLeave => self.start_auto_slide(),
        }
    }

    /// # Panics
    ///
    /// Panics when `slide` is out of range.
    pub fn go_to_slide(&mut self, slide: usize) {
        assert!(
            slide < self.count,
            "slide {slide} out of range for {} slides",
            self.count
        );
        self.current = slide;
        log::debug!("Slider showing {}/{}", slide, self.count);
    }

    pub fn next_slide(&mut self) {
        let next = if self.current == self.count - 1 {
            0
        } else {
            self.current + 1
        };
        self.go_to_slide(next);
    }

    pub fn prev_slide(&mut self) {
        let prev = if self.current == 0 {
            self.count - 1
        } else {
            self.current - 1
        };
        self.go_to_slide(prev);
    }

    pub fn handle_key(&mut self, key: &Key) {
        match key.nav_step() {
            Some(NavStep::Previous) => self.prev_slide(),
            Some(NavStep::Next) => self.next_slide(),
            None => {}
        }
    }

    pub fn start_auto_slide(&mut self) {
        if let Some(previous) = self.auto_slide.take() {
            self.scheduler.cancel(previous);
        }
        self.auto_slide =
            Some(self.scheduler.every(self.period, TimerEvent::SlideAdvance));
    }

    pub fn stop_auto_slide(&mut self) {
        if let Some(handle) = self.auto_slide.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<T: Scheduler> fmt::Debug for Slider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("count", &self.count)
            .field("current", &self.current)
            .field("auto_slide", &self.auto_slide)
            .finish_non_exhaustive()
    }
}

//! Timer facility shared by every timed component on the page
//!
//! Components never hold callbacks. They ask a [`Scheduler`] to deliver a
//! [`TimerEvent`] later, and the host feeds that event back through the
//! owner's message handler. Delivery happens on the same single-threaded
//! queue as input, so a timer can never race a user-triggered update.

use std::fmt;
use std::time::Duration;

use crate::loading::LoadingStage;

pub mod virtual_clock;

pub use virtual_clock::{SharedScheduler, VirtualScheduler};

/// Opaque handle identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Timers owned by the card-stack controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardStackTimer {
    /// Single-shot release of the transition lock.
    AnimationUnlock,
    /// Periodic auto-advance tick.
    AutoAdvance,
}

/// Event delivered back to the page when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    CardStack(CardStackTimer),
    SlideAdvance,
    /// Dismissal of the toast with the given sequence number.
    ToastExpired(u64),
    Loading(LoadingStage),
    ThemeButtonSettled,
    NewsletterDelivered,
    LoginRedirect,
}

impl TimerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CardStack(CardStackTimer::AnimationUnlock) => {
                "Timer::CardStack::AnimationUnlock"
            }
            Self::CardStack(CardStackTimer::AutoAdvance) => {
                "Timer::CardStack::AutoAdvance"
            }
            Self::SlideAdvance => "Timer::SlideAdvance",
            Self::ToastExpired(_) => "Timer::ToastExpired",
            Self::Loading(_) => "Timer::Loading",
            Self::ThemeButtonSettled => "Timer::ThemeButtonSettled",
            Self::NewsletterDelivered => "Timer::NewsletterDelivered",
            Self::LoginRedirect => "Timer::LoginRedirect",
        }
    }
}

/// Host-provided timer facility.
///
/// `once` fires a single time after `delay`; `every` fires each `period`
/// until cancelled. Cancelling an unknown or already-fired handle is a no-op.
pub trait Scheduler {
    fn once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;

    fn every(&mut self, period: Duration, event: TimerEvent) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}

//! Transient status toast
//!
//! At most one toast is visible. Each `show` replaces the current toast and
//! arms its own dismissal; a dismissal only clears the toast it was armed
//! for, so an older timer never cuts a newer toast short.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::toast as defaults;
use crate::timers::{Scheduler, TimerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: defaults::DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

pub struct ToastCenter<T: Scheduler> {
    scheduler: T,
    duration: Duration,
    current: Option<Toast>,
    next_id: u64,
}

impl<T: Scheduler> ToastCenter<T> {
    pub fn new(scheduler: T, cfg: ToastConfig) -> Self {
        Self {
            scheduler,
            duration: Duration::from_millis(cfg.duration_ms),
            current: None,
            next_id: 0,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        log::debug!("Toast #{id} ({}): {message}", kind.class());
        self.current = Some(Toast { id, message, kind });
        self.scheduler
            .once(self.duration, TimerEvent::ToastExpired(id));
        id
    }

    /// Dismiss toast `id` if it is still the one on screen.
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
        }
    }
}

impl<T: Scheduler> fmt::Debug for ToastCenter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastCenter")
            .field("current", &self.current)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

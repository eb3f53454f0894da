//! Newsletter signup form with client-side validation
//!
//! Nothing is sent anywhere: a valid address goes through a fixed simulated
//! latency and then reports success.

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::newsletter as defaults;
use crate::timers::{Scheduler, TimerEvent};
use crate::toast::ToastKind;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Loose shape check: something, `@`, something, `.`, something, no spaces.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub submit_delay_ms: u64,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: defaults::SUBMIT_DELAY_MS,
        }
    }
}

/// Color family of the hint line under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTone {
    Error,
    Pending,
    Success,
}

impl HintTone {
    pub fn color(self) -> &'static str {
        match self {
            Self::Error => "#fecaca",
            Self::Pending => "#cbd5e1",
            Self::Success => "#bbf7d0",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub text: String,
    pub tone: HintTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Subscribed,
}

/// Toast the page should show as a consequence of a form event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNotice {
    pub message: &'static str,
    pub kind: ToastKind,
}

pub struct NewsletterForm<T: Scheduler> {
    scheduler: T,
    delay: Duration,
    email: String,
    hint: Option<Hint>,
    state: SubmitState,
}

impl<T: Scheduler> NewsletterForm<T> {
    pub fn new(scheduler: T, cfg: NewsletterConfig) -> Self {
        Self {
            scheduler,
            delay: Duration::from_millis(cfg.submit_delay_ms),
            email: String::new(),
            hint: None,
            state: SubmitState::Idle,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn hint(&self) -> Option<&Hint> {
        self.hint.as_ref()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.email.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.email.pop();
    }

    /// Validate and start the simulated submission.
    pub fn submit(&mut self) -> Option<FormNotice> {
        if self.state == SubmitState::Submitting {
            log::trace!("newsletter submit ignored: already submitting");
            return None;
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            self.hint = Some(Hint {
                text: defaults::INVALID_HINT.to_string(),
                tone: HintTone::Error,
            });
            return Some(FormNotice {
                message: "Invalid email address",
                kind: ToastKind::Error,
            });
        }

        log::debug!("newsletter submitting {email}");
        self.hint = Some(Hint {
            text: defaults::PENDING_HINT.to_string(),
            tone: HintTone::Pending,
        });
        self.state = SubmitState::Submitting;
        self.scheduler
            .once(self.delay, TimerEvent::NewsletterDelivered);
        None
    }

    /// The simulated submission completed.
    pub fn delivered(&mut self) -> Option<FormNotice> {
        if self.state != SubmitState::Submitting {
            return None;
        }
        self.state = SubmitState::Subscribed;
        self.hint = Some(Hint {
            text: defaults::SUCCESS_HINT.to_string(),
            tone: HintTone::Success,
        });
        self.email.clear();
        Some(FormNotice {
            message: "Subscribed successfully",
            kind: ToastKind::Success,
        })
    }
}

impl<T: Scheduler> fmt::Debug for NewsletterForm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsletterForm")
            .field("email", &self.email)
            .field("hint", &self.hint)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::SharedScheduler;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.io"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn invalid_email_sets_error_hint() {
        let mut form = NewsletterForm::new(SharedScheduler::new(), NewsletterConfig::default());
        form.set_email("nope");
        let notice = form.submit().expect("error toast");
        assert_eq!(notice.kind, ToastKind::Error);
        let hint = form.hint().expect("hint");
        assert_eq!(hint.tone, HintTone::Error);
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn valid_email_is_trimmed_and_delivered() {
        let clock = SharedScheduler::new();
        let mut form = NewsletterForm::new(clock.clone(), NewsletterConfig::default());
        form.set_email("  ada@example.com  ");
        assert_eq!(form.submit(), None);
        assert_eq!(form.state(), SubmitState::Submitting);
        assert_eq!(form.submit(), None);
        assert_eq!(clock.pending_for(TimerEvent::NewsletterDelivered), 1);

        let mut notices = Vec::new();
        clock.advance(Duration::from_millis(900), |event| {
            if event == TimerEvent::NewsletterDelivered {
                notices.extend(form.delivered());
            }
        });
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Subscribed successfully");
        assert_eq!(form.email(), "");
        assert_eq!(form.hint().map(|h| h.tone), Some(HintTone::Success));
    }
}

//! Plain-text state summary
//!
//! One `key: value` line per component. Script mode prints it on exit and
//! the interactive view shows it in the debug pane.

use std::fmt::Write;

use marquee_core::LandingPage;
use marquee_core::newsletter::SubmitState;
use marquee_core::prefs::PreferenceStore;
use marquee_core::timers::Scheduler;

/// What happened on the page beyond its current state.
#[derive(Debug, Default)]
pub struct History {
    toasts: Vec<String>,
    last_toast: Option<u64>,
    navigation: Option<String>,
}

impl History {
    /// Note any toast that appeared and take a due redirect off the page.
    pub fn record<T, P>(&mut self, page: &mut LandingPage<T, P>)
    where
        T: Scheduler + Clone,
        P: PreferenceStore,
    {
        if let Some(toast) = page.toasts().current()
            && self.last_toast != Some(toast.id)
        {
            self.last_toast = Some(toast.id);
            self.toasts.push(toast.message.clone());
        }
        if let Some(url) = page.take_navigation() {
            self.navigation = Some(url);
        }
    }

    pub fn toasts(&self) -> &[String] {
        &self.toasts
    }

    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }
}

pub fn summary<T, P>(page: &LandingPage<T, P>, history: &History) -> String
where
    T: Scheduler + Clone,
    P: PreferenceStore,
{
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_summary(&mut out, page, history);
    out
}

fn write_summary<T, P>(
    out: &mut String,
    page: &LandingPage<T, P>,
    history: &History,
) -> std::fmt::Result
where
    T: Scheduler + Clone,
    P: PreferenceStore,
{
    match page.card_stack() {
        Some(stack) => {
            writeln!(out, "card: {}/{}", stack.current_index(), stack.len())?;
            let roles: Vec<String> = stack
                .surface()
                .roles()
                .map(|role| role.map_or("-".to_string(), |r| r.to_string()))
                .collect();
            writeln!(out, "roles: {}", roles.join(" "))?;
            let indicators: Vec<String> = stack
                .surface()
                .active_indicators()
                .iter()
                .map(usize::to_string)
                .collect();
            writeln!(out, "indicator: {}", indicators.join(","))?;
            writeln!(
                out,
                "auto_advance: {}",
                if stack.is_auto_advancing() { "on" } else { "off" }
            )?;
        }
        None => writeln!(out, "card: none")?,
    }

    match page.slider() {
        Some(slider) => writeln!(out, "slider: {}/{}", slider.current(), slider.len())?,
        None => writeln!(out, "slider: none")?,
    }
    writeln!(out, "theme: {}", page.theme().mode())?;
    writeln!(
        out,
        "tab: {}",
        page.tabs().map_or("none", |tabs| tabs.active_id())
    )?;
    writeln!(
        out,
        "menu: {}",
        if page.nav().is_menu_open() { "open" } else { "closed" }
    )?;
    writeln!(
        out,
        "sticky: {}",
        if page.nav().is_sticky() { "yes" } else { "no" }
    )?;
    writeln!(out, "progress: {:.0}%", page.scroll().progress())?;

    let revealed: Vec<&str> = page.sections().fired().collect();
    writeln!(out, "revealed: {}", revealed.join(","))?;
    let counters: Vec<&str> = page.counters().iter().map(|c| c.text()).collect();
    writeln!(out, "counters: {}", counters.join(" "))?;

    let newsletter = match page.newsletter().state() {
        SubmitState::Idle => "idle",
        SubmitState::Submitting => "submitting",
        SubmitState::Subscribed => "subscribed",
    };
    writeln!(out, "newsletter: {newsletter}")?;
    writeln!(
        out,
        "toast: {}",
        page.toasts()
            .current()
            .map_or("none", |toast| toast.message.as_str())
    )?;
    writeln!(out, "toasts: {}", history.toasts().join(" | "))?;
    writeln!(out, "navigation: {}", history.navigation().unwrap_or("none"))?;
    Ok(())
}

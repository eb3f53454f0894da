//! Light/dark theme toggle backed by the persisted `darkMode` flag

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::theme as defaults;
use crate::prefs::PreferenceStore;
use crate::timers::{Scheduler, TimerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub button_animation_ms: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            button_animation_ms: defaults::BUTTON_ANIMATION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Only the exact string `"true"` selects dark mode.
    pub fn from_flag(flag: Option<&str>) -> Self {
        if flag == Some("true") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_flag(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Confirmation shown after switching to this mode.
    pub fn switched_message(self) -> String {
        format!("Switched to {} mode", self.label())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct ThemeController<P: PreferenceStore, T: Scheduler> {
    store: P,
    scheduler: T,
    mode: ThemeMode,
    button_animating: bool,
    button_animation: Duration,
}

impl<P: PreferenceStore, T: Scheduler> ThemeController<P, T> {
    pub fn new(store: P, scheduler: T, cfg: ThemeConfig) -> Self {
        let stored = store.get(defaults::STORAGE_KEY);
        let mode = ThemeMode::from_flag(stored.as_deref());
        log::debug!("Theme restored as {mode}");
        Self {
            store,
            scheduler,
            mode,
            button_animating: false,
            button_animation: Duration::from_millis(cfg.button_animation_ms),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_button_animating(&self) -> bool {
        self.button_animating
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Flip the mode and persist it. A failed write is logged and the new
    /// mode still applies for this session.
    pub fn toggle(&mut self) -> ThemeMode {
        self.button_animating = true;
        self.scheduler
            .once(self.button_animation, TimerEvent::ThemeButtonSettled);

        self.mode = self.mode.toggled();
        if let Err(err) = self.store.set(defaults::STORAGE_KEY, self.mode.as_flag()) {
            log::warn!("Failed to persist theme preference: {err}");
        }
        log::debug!("Theme switched to {}", self.mode);
        self.mode
    }

    pub fn settle_button(&mut self) {
        self.button_animating = false;
    }
}

impl<P: PreferenceStore, T: Scheduler> fmt::Debug for ThemeController<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode)
            .field("button_animating", &self.button_animating)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::prefs::MemoryStore;
    use crate::timers::SharedScheduler;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            Some("true".into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::NoPreferenceDir)
        }
    }

    #[test]
    fn restores_and_persists_flag() {
        let store = MemoryStore::with("darkMode", "true");
        let mut theme =
            ThemeController::new(store, SharedScheduler::new(), ThemeConfig::default());
        assert_eq!(theme.mode(), ThemeMode::Dark);

        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.store().get("darkMode").as_deref(), Some("false"));
        assert!(theme.is_button_animating());
    }

    #[test]
    fn only_exact_true_means_dark() {
        assert_eq!(ThemeMode::from_flag(Some("TRUE")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_flag(None), ThemeMode::Light);
    }

    #[test]
    fn failed_write_still_flips_mode() {
        let mut theme = ThemeController::new(
            ReadOnlyStore,
            SharedScheduler::new(),
            ThemeConfig::default(),
        );
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn switched_message_names_the_mode() {
        assert_eq!(ThemeMode::Dark.switched_message(), "Switched to dark mode");
    }
}

//! Loading screen fade-out

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::loading as defaults;
use crate::timers::{Scheduler, TimerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub visible_ms: u64,
    pub fade_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            visible_ms: defaults::VISIBLE_MS,
            fade_ms: defaults::FADE_MS,
        }
    }
}

/// Timer stages of the fade-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadingStage {
    BeginFade,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Visible,
    /// Hidden marker applied; fading out.
    Fading,
    /// Removed from layout.
    Gone,
}

pub struct LoadingScreen<T: Scheduler> {
    scheduler: T,
    cfg: LoadingConfig,
    phase: LoadingPhase,
    loaded: bool,
}

impl<T: Scheduler> LoadingScreen<T> {
    pub fn new(scheduler: T, cfg: LoadingConfig) -> Self {
        Self {
            scheduler,
            cfg,
            phase: LoadingPhase::Visible,
            loaded: false,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// The page finished loading. Only the first call starts the fade.
    pub fn page_loaded(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.scheduler.once(
            Duration::from_millis(self.cfg.visible_ms),
            TimerEvent::Loading(LoadingStage::BeginFade),
        );
    }

    pub fn advance(&mut self, stage: LoadingStage) {
        match stage {
            LoadingStage::BeginFade => {
                self.phase = LoadingPhase::Fading;
                self.scheduler.once(
                    Duration::from_millis(self.cfg.fade_ms),
                    TimerEvent::Loading(LoadingStage::Remove),
                );
            }
            LoadingStage::Remove => {
                self.phase = LoadingPhase::Gone;
                log::debug!("Loading screen removed");
            }
        }
    }
}

impl<T: Scheduler> fmt::Debug for LoadingScreen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingScreen")
            .field("phase", &self.phase)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::SharedScheduler;

    #[test]
    fn fades_then_disappears() {
        let clock = SharedScheduler::new();
        let mut screen = LoadingScreen::new(clock.clone(), LoadingConfig::default());
        screen.page_loaded();
        screen.page_loaded();

        let drive = |ms: u64, screen: &mut LoadingScreen<SharedScheduler>| {
            clock.advance(Duration::from_millis(ms), |event| {
                if let TimerEvent::Loading(stage) = event {
                    screen.advance(stage);
                }
            });
        };

        drive(1_999, &mut screen);
        assert_eq!(screen.phase(), LoadingPhase::Visible);
        drive(1, &mut screen);
        assert_eq!(screen.phase(), LoadingPhase::Fading);
        drive(500, &mut screen);
        assert_eq!(screen.phase(), LoadingPhase::Gone);
        assert_eq!(clock.pending_count(), 0);
    }
}

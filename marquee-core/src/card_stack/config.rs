//! Configuration for the card-stack controller

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::card_stack as defaults;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardStackConfig {
    /// Period between auto-advance ticks (ms).
    pub auto_advance_ms: u64,
    /// Fixed navigation lock after each transition (ms).
    pub animation_lock_ms: u64,
    /// Horizontal travel (px) a drag must exceed to count as a swipe.
    pub swipe_threshold_px: f32,
    /// Auto-advance starts only when the viewport is strictly wider than this.
    pub auto_advance_min_viewport: f32,
}

impl Default for CardStackConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: defaults::AUTO_ADVANCE_MS,
            animation_lock_ms: defaults::ANIMATION_LOCK_MS,
            swipe_threshold_px: defaults::SWIPE_THRESHOLD_PX,
            auto_advance_min_viewport: defaults::AUTO_ADVANCE_MIN_VIEWPORT,
        }
    }
}

impl CardStackConfig {
    pub fn auto_advance_period(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    pub fn animation_lock(&self) -> Duration {
        Duration::from_millis(self.animation_lock_ms)
    }
}

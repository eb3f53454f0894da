//! Scroll progress bar and back-to-top button

use serde::{Deserialize, Serialize};

use crate::constants::scroll as defaults;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset (px) beyond which the back-to-top button is shown.
    pub back_to_top_threshold: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: defaults::BACK_TO_TOP_THRESHOLD,
        }
    }
}

/// Document scroll measurements reported by the host on scroll and resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    /// Scrollable distance: document height minus viewport height.
    pub fn scrollable(&self) -> f32 {
        self.scroll_height - self.viewport_height
    }

    /// Progress through the document in percent, capped at 100. A document
    /// that fits the viewport reports 0.
    pub fn progress_percent(&self) -> f32 {
        let doc_height = self.scrollable();
        if doc_height > 0.0 {
            (self.scroll_top / doc_height * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// Smooth-scroll request for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Scroll the element matching this anchor (`#id`) into view.
    Anchor(String),
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollIndicators {
    threshold: f32,
    progress: f32,
    back_to_top_visible: bool,
    last: ScrollMetrics,
}

impl ScrollIndicators {
    pub fn new(cfg: ScrollConfig) -> Self {
        Self {
            threshold: cfg.back_to_top_threshold,
            progress: 0.0,
            back_to_top_visible: false,
            last: ScrollMetrics::default(),
        }
    }

    pub fn update(&mut self, metrics: ScrollMetrics) {
        self.last = metrics;
        self.progress = metrics.progress_percent();
        self.back_to_top_visible = metrics.scroll_top > self.threshold;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.last
    }

    pub fn back_to_top_clicked(&self) -> ScrollRequest {
        ScrollRequest::Top
    }
}

//! One-shot visibility observers
//!
//! Each observer watches a set of element ids and fires once per element
//! when its intersection ratio reaches the observer's threshold; the element
//! is then dropped from the watch list. Sections, lazy images, the stats
//! block and the entry animation all use this.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::reveal as defaults;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    pub section_threshold: f32,
    pub image_threshold: f32,
    pub stats_threshold: f32,
    pub entry_animation_threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_threshold: defaults::SECTION_THRESHOLD,
            image_threshold: defaults::IMAGE_THRESHOLD,
            stats_threshold: defaults::STATS_THRESHOLD,
            entry_animation_threshold: defaults::ENTRY_ANIMATION_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityObserver {
    threshold: f32,
    watching: BTreeSet<String>,
    fired: BTreeSet<String>,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            watching: BTreeSet::new(),
            fired: BTreeSet::new(),
        }
    }

    /// Observer already watching `ids`.
    pub fn watching<I, S>(threshold: f32, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut observer = Self::new(threshold);
        for id in ids {
            observer.observe(id);
        }
        observer
    }

    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.fired.contains(&id) {
            self.watching.insert(id);
        }
    }

    pub fn is_watching(&self, id: &str) -> bool {
        self.watching.contains(id)
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.fired.contains(id)
    }

    pub fn fired(&self) -> impl Iterator<Item = &str> {
        self.fired.iter().map(String::as_str)
    }

    /// Report the intersection ratio of `id`. Returns true exactly once per
    /// element, the first time it intersects at or above the threshold.
    pub fn report(&mut self, id: &str, ratio: f32) -> bool {
        if !self.watching.contains(id) {
            return false;
        }
        let intersecting = ratio > 0.0 && ratio >= self.threshold;
        if !intersecting {
            return false;
        }
        self.watching.remove(id);
        self.fired.insert(id.to_string());
        log::trace!("{id} became visible at ratio {ratio:.2}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut sections = VisibilityObserver::watching(0.15, ["features", "pricing"]);
        assert!(!sections.report("features", 0.10));
        assert!(sections.report("features", 0.15));
        assert!(!sections.report("features", 1.0));
        assert!(sections.has_fired("features"));
        assert!(sections.is_watching("pricing"));
    }

    #[test]
    fn zero_threshold_still_needs_some_overlap() {
        let mut observer = VisibilityObserver::watching(0.0, ["header"]);
        assert!(!observer.report("header", 0.0));
        assert!(observer.report("header", 0.01));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut observer = VisibilityObserver::new(0.1);
        assert!(!observer.report("ghost", 1.0));
    }
}

//! Elements present on the landing page

use serde::{Deserialize, Serialize};

/// What the page contains. Components whose elements are absent are simply
/// not created: zero cards means no card stack, zero slides no slider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageLayout {
    pub cards: usize,
    pub slides: usize,
    /// Operation tab ids, in display order.
    pub tabs: Vec<String>,
    /// Ids of the revealable sections.
    pub sections: Vec<String>,
    /// Ids of the lazily loaded images.
    pub images: Vec<String>,
    /// Target values of the stat counters.
    pub stats: Vec<u64>,
}

impl PageLayout {
    /// A page with nothing on it.
    pub fn empty() -> Self {
        Self {
            cards: 0,
            slides: 0,
            tabs: Vec::new(),
            sections: Vec::new(),
            images: Vec::new(),
            stats: Vec::new(),
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            cards: 5,
            slides: 3,
            tabs: ["1", "2", "3"].map(String::from).to_vec(),
            sections: ["features", "operations", "testimonials", "pricing"]
                .map(String::from)
                .to_vec(),
            images: ["feature-digital", "feature-grow", "feature-card", "testimonial"]
                .map(String::from)
                .to_vec(),
            stats: vec![12_500, 98, 1_250_000],
        }
    }
}

//! Virtual page geometry
//!
//! A terminal has no document to scroll, so the host lays the page out on a
//! fixed pixel grid and derives scroll metrics and intersection ratios from
//! it. Sections stack below the header, each image sits inside a section,
//! and the stats block follows the last section.

use marquee_core::page::PageLayout;
use marquee_core::scroll::{ScrollMetrics, ScrollRequest};
use marquee_core::PageMessage;

const HEADER_PX: f32 = 640.0;
const SECTION_PX: f32 = 720.0;
const IMAGE_OFFSET_PX: f32 = 240.0;
const IMAGE_PX: f32 = 200.0;
const STATS_PX: f32 = 320.0;
const FOOTER_PX: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Band {
    top: f32,
    height: f32,
}

impl Band {
    /// Share of this band inside `[view_top, view_top + view_height)`.
    fn ratio(&self, view_top: f32, view_height: f32) -> f32 {
        let overlap = (self.top + self.height).min(view_top + view_height)
            - self.top.max(view_top);
        (overlap.max(0.0) / self.height).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct VirtualDocument {
    viewport_height: f32,
    header: Band,
    sections: Vec<(String, Band)>,
    images: Vec<(String, Band)>,
    stats: Option<Band>,
    height: f32,
}

impl VirtualDocument {
    pub fn new(layout: &PageLayout, viewport_height: f32) -> Self {
        let header = Band {
            top: 0.0,
            height: HEADER_PX,
        };
        let sections: Vec<(String, Band)> = layout
            .sections
            .iter()
            .enumerate()
            .map(|(idx, id)| {
                let band = Band {
                    top: HEADER_PX + idx as f32 * SECTION_PX,
                    height: SECTION_PX,
                };
                (id.clone(), band)
            })
            .collect();

        let mut cursor = HEADER_PX + sections.len() as f32 * SECTION_PX;
        let images = layout
            .images
            .iter()
            .enumerate()
            .map(|(idx, id)| {
                let top = if sections.is_empty() {
                    let top = cursor;
                    cursor += IMAGE_PX;
                    top
                } else {
                    sections[idx % sections.len()].1.top + IMAGE_OFFSET_PX
                };
                (
                    id.clone(),
                    Band {
                        top,
                        height: IMAGE_PX,
                    },
                )
            })
            .collect();

        let stats = (!layout.stats.is_empty()).then(|| {
            let band = Band {
                top: cursor,
                height: STATS_PX,
            };
            cursor += STATS_PX;
            band
        });

        Self {
            viewport_height,
            header,
            sections,
            images,
            stats,
            height: cursor + FOOTER_PX,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn max_scroll(&self) -> f32 {
        (self.height - self.viewport_height).max(0.0)
    }

    pub fn clamp(&self, scroll_top: f32) -> f32 {
        scroll_top.clamp(0.0, self.max_scroll())
    }

    pub fn metrics(&self, scroll_top: f32) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: self.height,
            viewport_height: self.viewport_height,
        }
    }

    /// Scroll position a request lands on. Unknown anchors resolve to `None`.
    pub fn resolve(&self, request: &ScrollRequest) -> Option<f32> {
        match request {
            ScrollRequest::Top => Some(0.0),
            ScrollRequest::Anchor(anchor) => {
                let id = anchor.trim_start_matches('#');
                self.sections
                    .iter()
                    .find(|(section, _)| section == id)
                    .map(|(_, band)| self.clamp(band.top))
            }
        }
    }

    /// Section the top of the viewport is in, if any.
    pub fn section_at(&self, scroll_top: f32) -> Option<&str> {
        self.sections
            .iter()
            .find(|(_, band)| scroll_top >= band.top && scroll_top < band.top + band.height)
            .map(|(id, _)| id.as_str())
    }

    /// Messages a browser would raise after scrolling to `scroll_top`.
    pub fn observe(&self, scroll_top: f32) -> Vec<PageMessage> {
        let view = self.viewport_height;
        let mut messages = vec![
            PageMessage::Scrolled(self.metrics(scroll_top)),
            PageMessage::HeaderVisibility(self.header.ratio(scroll_top, view) > 0.0),
        ];
        for (id, band) in &self.sections {
            messages.push(PageMessage::SectionVisibility {
                id: id.clone(),
                ratio: band.ratio(scroll_top, view),
            });
        }
        for (id, band) in &self.images {
            messages.push(PageMessage::ImageVisibility {
                id: id.clone(),
                ratio: band.ratio(scroll_top, view),
            });
        }
        if let Some(band) = self.stats {
            messages.push(PageMessage::StatsVisibility(band.ratio(scroll_top, view)));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> VirtualDocument {
        VirtualDocument::new(&PageLayout::default(), 800.0)
    }

    #[test]
    fn bands_stack_below_the_header() {
        let doc = document();
        // header + 4 sections + stats + footer
        assert_eq!(doc.height(), 640.0 + 4.0 * 720.0 + 320.0 + 400.0);
        assert_eq!(
            doc.resolve(&ScrollRequest::Anchor("#operations".into())),
            Some(640.0 + 720.0)
        );
        assert_eq!(doc.resolve(&ScrollRequest::Anchor("#nowhere".into())), None);
        assert_eq!(doc.section_at(700.0), Some("features"));
    }

    #[test]
    fn top_of_page_sees_header_and_first_section() {
        let doc = document();
        let messages = doc.observe(0.0);
        assert!(messages.iter().any(|m| matches!(m, PageMessage::HeaderVisibility(true))));
        let features = messages.iter().find_map(|m| match m {
            PageMessage::SectionVisibility { id, ratio } if id == "features" => Some(*ratio),
            _ => None,
        });
        assert_eq!(features, Some(160.0 / 720.0));
    }

    #[test]
    fn clamp_stays_within_document() {
        let doc = document();
        assert_eq!(doc.clamp(-50.0), 0.0);
        assert_eq!(doc.clamp(1.0e6), doc.max_scroll());
    }
}

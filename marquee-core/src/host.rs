//! Interfaces the page consumes from its host environment
//!
//! The host owns rendering and measurement. Components only describe what
//! should be shown through these traits, so the same logic drives a browser
//! DOM, a terminal, or a test double.

use crate::card_stack::CardRole;

/// Rendering surface for a card stack and its indicator row.
///
/// Cards and indicators are addressed by position; their order is fixed when
/// the surface is created and the two sequences correspond 1:1.
#[cfg_attr(test, mockall::automock)]
pub trait CardSurface {
    fn card_count(&self) -> usize;

    fn indicator_count(&self) -> usize;

    /// Replace whatever role marker `card` carries with `role`.
    fn apply_role(&mut self, card: usize, role: CardRole);

    fn set_indicator_active(&mut self, indicator: usize, active: bool);
}

/// Viewport measurement.
pub trait Viewport {
    /// Current layout width in CSS pixels.
    fn width(&self) -> f32;
}

/// A viewport with a width fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub f32);

impl Viewport for FixedViewport {
    fn width(&self) -> f32 {
        self.0
    }
}

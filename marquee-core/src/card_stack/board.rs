//! In-memory card surface
//!
//! Retains the markers a host would apply to real elements. Terminal and
//! headless hosts render from it directly; tests inspect it.

use super::roles::CardRole;
use crate::host::CardSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBoard {
    roles: Vec<Option<CardRole>>,
    indicators: Vec<bool>,
    /// Number of role markers applied so far.
    role_writes: usize,
}

impl CardBoard {
    pub fn new(cards: usize) -> Self {
        Self {
            roles: vec![None; cards],
            indicators: vec![false; cards],
            role_writes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn role(&self, card: usize) -> Option<CardRole> {
        self.roles.get(card).copied().flatten()
    }

    pub fn roles(&self) -> impl Iterator<Item = Option<CardRole>> + '_ {
        self.roles.iter().copied()
    }

    pub fn indicator(&self, indicator: usize) -> bool {
        self.indicators.get(indicator).copied().unwrap_or(false)
    }

    /// Positions of every indicator currently marked active.
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(idx, on)| on.then_some(idx))
            .collect()
    }

    /// Positions of every card carrying `role`.
    pub fn cards_with(&self, role: CardRole) -> Vec<usize> {
        self.roles
            .iter()
            .enumerate()
            .filter_map(|(idx, r)| (*r == Some(role)).then_some(idx))
            .collect()
    }

    pub fn role_writes(&self) -> usize {
        self.role_writes
    }
}

impl CardSurface for CardBoard {
    fn card_count(&self) -> usize {
        self.roles.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn apply_role(&mut self, card: usize, role: CardRole) {
        if let Some(slot) = self.roles.get_mut(card) {
            *slot = Some(role);
            self.role_writes += 1;
        }
    }

    fn set_indicator_active(&mut self, indicator: usize, active: bool) {
        if let Some(slot) = self.indicators.get_mut(indicator) {
            *slot = active;
        }
    }
}

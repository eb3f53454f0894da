use std::fmt;

/// Presentation role of one card relative to the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardRole {
    Active,
    Next,
    Prev,
    Hidden,
}

impl CardRole {
    /// Marker name as used by the page's stylesheet.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Hidden => "hidden",
        }
    }

    pub const ALL: [Self; 4] = [Self::Active, Self::Next, Self::Prev, Self::Hidden];
}

impl fmt::Display for CardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Role of the card at `index` when `current` is in front.
///
/// Checks run in order active, next, prev, so with two cards the other one is
/// `Next` rather than `Prev`, and a single card is always `Active`.
pub fn role_for(index: usize, current: usize, count: usize) -> CardRole {
    debug_assert!(count > 0 && current < count && index < count);
    if index == current {
        CardRole::Active
    } else if index == (current + 1) % count {
        CardRole::Next
    } else if index == (current + count - 1) % count {
        CardRole::Prev
    } else {
        CardRole::Hidden
    }
}

/// Roles for every card, in card order.
pub fn roles(current: usize, count: usize) -> impl Iterator<Item = CardRole> {
    (0..count).map(move |index| role_for(index, current, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_cards_from_zero() {
        let got: Vec<_> = roles(0, 5).collect();
        assert_eq!(
            got,
            vec![
                CardRole::Active,
                CardRole::Next,
                CardRole::Hidden,
                CardRole::Hidden,
                CardRole::Prev,
            ]
        );
    }

    #[test]
    fn single_card_is_always_active() {
        assert_eq!(role_for(0, 0, 1), CardRole::Active);
    }

    #[test]
    fn two_cards_prefer_next_over_prev() {
        assert_eq!(role_for(1, 0, 2), CardRole::Next);
        assert_eq!(role_for(0, 1, 2), CardRole::Next);
    }

    #[test]
    fn exactly_one_active_for_every_index() {
        for count in 1..=7 {
            for current in 0..count {
                let all: Vec<_> = roles(current, count).collect();
                assert_eq!(all.iter().filter(|r| **r == CardRole::Active).count(), 1);
                assert_eq!(all[current], CardRole::Active);
                assert!(all.iter().filter(|r| **r == CardRole::Next).count() <= 1);
                assert!(all.iter().filter(|r| **r == CardRole::Prev).count() <= 1);
            }
        }
    }
}

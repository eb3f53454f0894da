/// Key identifier delivered by the host's keydown events.
///
/// Only the keys the page reacts to are named; everything else collapses to
/// `Char` or `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    Enter,
    Escape,
    Backspace,
    Char(char),
    Other(String),
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowLeft"`, `"a"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Home" => Self::Home,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            "Backspace" => Self::Backspace,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other(other.to_string()),
                }
            }
        }
    }

    /// Horizontal navigation intent, if any. Modifiers are not considered.
    pub fn nav_step(&self) -> Option<NavStep> {
        match self {
            Self::ArrowLeft => Some(NavStep::Previous),
            Self::ArrowRight => Some(NavStep::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    Previous,
    Next,
}

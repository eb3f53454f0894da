use crate::input::{Key, PointerEvent};
use crate::timers::CardStackTimer;

#[derive(Clone)]
pub enum CardStackMessage {
    Next,
    Previous,
    GoTo(usize),
    IndicatorClicked(usize),
    Key(Key),
    Pointer(PointerEvent),
    HoverEnter,
    HoverLeave,
    Timer(CardStackTimer),
}

impl CardStackMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "CardStack::Next",
            Self::Previous => "CardStack::Previous",
            Self::GoTo(_) => "CardStack::GoTo",
            Self::IndicatorClicked(_) => "CardStack::IndicatorClicked",
            Self::Key(_) => "CardStack::Key",
            Self::Pointer(_) => "CardStack::Pointer",
            Self::HoverEnter => "CardStack::HoverEnter",
            Self::HoverLeave => "CardStack::HoverLeave",
            Self::Timer(_) => "CardStack::Timer",
        }
    }
}

impl std::fmt::Debug for CardStackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoTo(index) => write!(f, "CardStack::GoTo({index})"),
            Self::IndicatorClicked(index) => {
                write!(f, "CardStack::IndicatorClicked({index})")
            }
            Self::Key(key) => write!(f, "CardStack::Key({key:?})"),
            Self::Pointer(event) => write!(
                f,
                "CardStack::Pointer({:?} @ {:.1},{:.1})",
                event.phase, event.x, event.y
            ),
            Self::Timer(timer) => write!(f, "CardStack::Timer({timer:?})"),
            other => write!(f, "{}", other.name()),
        }
    }
}

//! Host input normalized for the page components

pub mod keyboard;
pub mod pointer;

pub use keyboard::{Key, NavStep};
pub use pointer::{
    GestureOutcome, GestureTracker, PointerEvent, PointerPhase, PointerSource,
    SwipeDirection, TouchPoint, classify_swipe,
};

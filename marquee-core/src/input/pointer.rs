//! Unified pointer input and swipe classification
//!
//! Touch and mouse deliver coordinates in different shapes. Both are
//! converted to a [`PointerEvent`] here so gesture logic never has to know
//! which device produced it.

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// A single touch contact as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

/// Device-independent pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub phase: PointerPhase,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            phase,
            source: PointerSource::Mouse,
        }
    }

    /// Build an event from a touch list. Start and move phases read the
    /// active touches, the end phase reads the changed touches; either way
    /// the first contact wins. Returns `None` for an empty list.
    pub fn from_touches(phase: PointerPhase, touches: &[TouchPoint]) -> Option<Self> {
        touches.first().map(|touch| Self {
            x: touch.client_x,
            y: touch.client_y,
            phase,
            source: PointerSource::Touch,
        })
    }
}

/// Direction inferred from a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger or cursor moved right-to-left: advance.
    Forward,
    /// Moved left-to-right: go back.
    Backward,
}

/// Result of feeding one pointer event to a [`GestureTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A new gesture began.
    Started,
    /// Gesture in progress; the host should suppress default scrolling.
    Tracking,
    /// Gesture ended as a horizontal swipe.
    Swipe(SwipeDirection),
    /// Gesture ended without qualifying as a swipe (tap or vertical drag).
    Released,
    /// No gesture was active; nothing happened.
    Ignored,
}

impl GestureOutcome {
    /// Whether the host should cancel the browser default for this event.
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Started | Self::Tracking)
    }

    /// Whether this event closed a gesture.
    pub fn ended_gesture(&self) -> bool {
        matches!(self, Self::Swipe(_) | Self::Released)
    }
}

/// Classify a completed drag. `diff_x`/`diff_y` are start minus end.
///
/// A swipe needs more horizontal than vertical travel and horizontal travel
/// strictly beyond `threshold`.
pub fn classify_swipe(diff_x: f32, diff_y: f32, threshold: f32) -> Option<SwipeDirection> {
    if diff_x.abs() > diff_y.abs() && diff_x.abs() > threshold {
        if diff_x > 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Backward)
        }
    } else {
        None
    }
}

/// Per-interaction gesture state. Created on down, consumed on up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    start: Option<(f32, f32)>,
    threshold: f32,
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed one event through the gesture state machine.
    pub fn handle(&mut self, event: PointerEvent) -> GestureOutcome {
        match event.phase {
            PointerPhase::Down => {
                self.start = Some((event.x, event.y));
                GestureOutcome::Started
            }
            PointerPhase::Move => {
                if self.is_active() {
                    GestureOutcome::Tracking
                } else {
                    GestureOutcome::Ignored
                }
            }
            PointerPhase::Up => {
                let Some((start_x, start_y)) = self.start.take() else {
                    return GestureOutcome::Ignored;
                };
                let diff_x = start_x - event.x;
                let diff_y = start_y - event.y;
                match classify_swipe(diff_x, diff_y, self.threshold) {
                    Some(direction) => GestureOutcome::Swipe(direction),
                    None => GestureOutcome::Released,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(tracker: &mut GestureTracker, from: (f32, f32), to: (f32, f32)) -> GestureOutcome {
        tracker.handle(PointerEvent::mouse(PointerPhase::Down, from.0, from.1));
        tracker.handle(PointerEvent::mouse(PointerPhase::Up, to.0, to.1))
    }

    #[test]
    fn swipe_thresholds() {
        assert_eq!(classify_swipe(50.0, 0.0, 30.0), Some(SwipeDirection::Forward));
        assert_eq!(classify_swipe(-50.0, 0.0, 30.0), Some(SwipeDirection::Backward));
        assert_eq!(classify_swipe(10.0, 0.0, 30.0), None);
        // exactly at the threshold is not enough
        assert_eq!(classify_swipe(30.0, 0.0, 30.0), None);
        // vertical dominates
        assert_eq!(classify_swipe(40.0, -60.0, 30.0), None);
    }

    #[test]
    fn right_to_left_drag_advances() {
        let mut tracker = GestureTracker::new(30.0);
        let outcome = drag(&mut tracker, (200.0, 100.0), (150.0, 100.0));
        assert_eq!(outcome, GestureOutcome::Swipe(SwipeDirection::Forward));
        assert!(!tracker.is_active());
    }

    #[test]
    fn short_drag_is_released_without_swipe() {
        let mut tracker = GestureTracker::new(30.0);
        let outcome = drag(&mut tracker, (200.0, 100.0), (190.0, 100.0));
        assert_eq!(outcome, GestureOutcome::Released);
    }

    #[test]
    fn up_without_down_is_ignored() {
        let mut tracker = GestureTracker::new(30.0);
        let outcome = tracker.handle(PointerEvent::mouse(PointerPhase::Up, 0.0, 0.0));
        assert_eq!(outcome, GestureOutcome::Ignored);
        let outcome = tracker.handle(PointerEvent::mouse(PointerPhase::Move, 0.0, 0.0));
        assert!(!outcome.suppresses_default());
    }

    #[test]
    fn touches_use_first_contact() {
        let touches = [
            TouchPoint {
                client_x: 12.0,
                client_y: 34.0,
            },
            TouchPoint {
                client_x: 99.0,
                client_y: 99.0,
            },
        ];
        let event = PointerEvent::from_touches(PointerPhase::Down, &touches)
            .expect("non-empty touch list");
        assert_eq!((event.x, event.y), (12.0, 34.0));
        assert_eq!(event.source, PointerSource::Touch);
        assert!(PointerEvent::from_touches(PointerPhase::Up, &[]).is_none());
    }
}

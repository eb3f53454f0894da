//! Deterministic virtual-time scheduler
//!
//! Time only moves when the host says so, which makes every timed behavior
//! on the page reproducible: tests step the clock explicitly and the script
//! host replays `wait` commands without sleeping.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, TimerEvent, TimerHandle};

/// Smallest period accepted for a repeating timer, so a zero period can
/// never spin `fire_next` forever.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
struct PendingTimer {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
    /// Scheduling order, used to break ties between equal due times.
    seq: u64,
    event: TimerEvent,
}

#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_handle: u64,
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    /// Count pending timers that would deliver `event`.
    pub fn pending_for(&self, event: TimerEvent) -> usize {
        self.pending.iter().filter(|t| t.event == event).count()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time. Repeating timers are re-armed at `due + period`.
    pub fn fire_next(&mut self, until: Duration) -> Option<TimerEvent> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(idx, _)| idx)?;

        let due = self.pending[idx].due;
        self.now = self.now.max(due);

        let event = self.pending[idx].event;
        match self.pending[idx].period {
            Some(period) => {
                let seq = self.bump_seq();
                let timer = &mut self.pending[idx];
                timer.due = due + period;
                timer.seq = seq;
            }
            None => {
                self.pending.swap_remove(idx);
            }
        }

        log::trace!("virtual clock fired {} at {:?}", event.name(), due);
        Some(event)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn insert(
        &mut self,
        delay: Duration,
        period: Option<Duration>,
        event: TimerEvent,
    ) -> TimerHandle {
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;
        let seq = self.bump_seq();
        self.pending.push(PendingTimer {
            handle,
            due: self.now + delay,
            period,
            seq,
            event,
        });
        handle
    }
}

impl Scheduler for VirtualScheduler {
    fn once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.insert(delay, None, event)
    }

    fn every(&mut self, period: Duration, event: TimerEvent) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Some(period), event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|t| t.handle != handle);
    }
}

/// Cloneable handle to one [`VirtualScheduler`], so every component on a
/// page shares a single clock.
#[derive(Debug, Clone, Default)]
pub struct SharedScheduler(Rc<RefCell<VirtualScheduler>>);

impl SharedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.0.borrow().now()
    }

    pub fn pending_count(&self) -> usize {
        self.0.borrow().pending_count()
    }

    pub fn pending_for(&self, event: TimerEvent) -> usize {
        self.0.borrow().pending_for(event)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.0.borrow().is_pending(handle)
    }

    /// Fire every timer due up to `until`, handing each event to `dispatch`.
    ///
    /// The scheduler is not borrowed while `dispatch` runs, so handlers may
    /// schedule or cancel timers; anything they schedule before `until` fires
    /// in the same call.
    pub fn run_until(&self, until: Duration, mut dispatch: impl FnMut(TimerEvent)) {
        loop {
            let fired = self.0.borrow_mut().fire_next(until);
            match fired {
                Some(event) => dispatch(event),
                None => break,
            }
        }
        self.0.borrow_mut().advance_to(until);
    }

    /// Advance the clock by `by`, dispatching every timer that comes due.
    pub fn advance(&self, by: Duration, dispatch: impl FnMut(TimerEvent)) {
        let until = self.now() + by;
        self.run_until(until, dispatch);
    }
}

impl Scheduler for SharedScheduler {
    fn once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.0.borrow_mut().once(delay, event)
    }

    fn every(&mut self, period: Duration, event: TimerEvent) -> TimerHandle {
        self.0.borrow_mut().every(period, event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.0.borrow_mut().cancel(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::CardStackTimer;

    const TICK: TimerEvent = TimerEvent::CardStack(CardStackTimer::AutoAdvance);
    const UNLOCK: TimerEvent =
        TimerEvent::CardStack(CardStackTimer::AnimationUnlock);

    #[test]
    fn once_fires_a_single_time() {
        let mut clock = VirtualScheduler::new();
        clock.once(Duration::from_millis(600), UNLOCK);

        assert_eq!(clock.fire_next(Duration::from_millis(599)), None);
        assert_eq!(clock.fire_next(Duration::from_millis(600)), Some(UNLOCK));
        assert_eq!(clock.fire_next(Duration::from_secs(60)), None);
        assert_eq!(clock.now(), Duration::from_millis(600));
    }

    #[test]
    fn every_rearms_until_cancelled() {
        let mut clock = VirtualScheduler::new();
        let handle = clock.every(Duration::from_millis(4000), TICK);

        let mut fired = 0;
        while clock.fire_next(Duration::from_secs(10)).is_some() {
            fired += 1;
        }
        assert_eq!(fired, 2);
        assert!(clock.is_pending(handle));

        clock.cancel(handle);
        assert_eq!(clock.fire_next(Duration::from_secs(60)), None);
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut clock = VirtualScheduler::new();
        clock.once(Duration::from_millis(100), TimerEvent::SlideAdvance);
        clock.once(Duration::from_millis(100), TimerEvent::LoginRedirect);

        let until = Duration::from_millis(100);
        assert_eq!(clock.fire_next(until), Some(TimerEvent::SlideAdvance));
        assert_eq!(clock.fire_next(until), Some(TimerEvent::LoginRedirect));
    }

    #[test]
    fn shared_handles_see_one_clock() {
        let shared = SharedScheduler::new();
        let mut other = shared.clone();
        other.once(Duration::from_millis(50), TimerEvent::ThemeButtonSettled);

        let mut seen = Vec::new();
        shared.advance(Duration::from_millis(100), |event| seen.push(event));

        assert_eq!(seen, vec![TimerEvent::ThemeButtonSettled]);
        assert_eq!(other.now(), Duration::from_millis(100));
    }

    #[test]
    fn handlers_can_schedule_during_dispatch() {
        let shared = SharedScheduler::new();
        let mut inner = shared.clone();
        inner.once(Duration::from_millis(10), TimerEvent::SlideAdvance);

        let mut seen = Vec::new();
        shared.advance(Duration::from_millis(100), |event| {
            if event == TimerEvent::SlideAdvance {
                inner.once(Duration::from_millis(20), TimerEvent::LoginRedirect);
            }
            seen.push(event);
        });

        assert_eq!(
            seen,
            vec![TimerEvent::SlideAdvance, TimerEvent::LoginRedirect]
        );
    }
}

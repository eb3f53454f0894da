//! Wall-clock scheduler backed by tokio timers
//!
//! Each scheduled timer is a spawned task that sleeps and then posts a
//! [`Fired`] message on an unbounded channel. The event loop receives those
//! next to terminal input, so timers and input are handled one at a time on
//! the same thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use marquee_core::timers::{Scheduler, TimerEvent, TimerHandle};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub event: TimerEvent,
}

struct Task {
    join: JoinHandle<()>,
    periodic: bool,
}

struct Inner {
    next_id: u64,
    tx: mpsc::UnboundedSender<Fired>,
    tasks: HashMap<TimerHandle, Task>,
}

/// Cloneable handle; all clones share one timer table.
///
/// Must be used from inside a tokio runtime.
#[derive(Clone)]
pub struct TokioScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Fired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let inner = Inner {
            next_id: 0,
            tx,
            tasks: HashMap::new(),
        };
        (
            Self {
                inner: Rc::new(RefCell::new(inner)),
            },
            rx,
        )
    }

    /// Accept a delivered timer. Returns `None` when the timer was cancelled
    /// after its message was already queued.
    pub fn accept(&self, fired: Fired) -> Option<TimerEvent> {
        let mut inner = self.inner.borrow_mut();
        let periodic = inner.tasks.get(&fired.handle)?.periodic;
        if !periodic {
            inner.tasks.remove(&fired.handle);
        }
        Some(fired.event)
    }

    /// Number of timers still armed.
    pub fn active(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Abort every armed timer.
    pub fn shutdown(&self) {
        for (_, task) in self.inner.borrow_mut().tasks.drain() {
            task.join.abort();
        }
    }

    fn spawn<F>(&self, periodic: bool, build: F) -> TimerHandle
    where
        F: FnOnce(TimerHandle, mpsc::UnboundedSender<Fired>) -> JoinHandle<()>,
    {
        let mut inner = self.inner.borrow_mut();
        let handle = TimerHandle::new(inner.next_id);
        inner.next_id += 1;
        let join = build(handle, inner.tx.clone());
        inner.tasks.insert(handle, Task { join, periodic });
        handle
    }
}

impl Scheduler for TokioScheduler {
    fn once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.spawn(false, |handle, tx| {
            tokio::spawn(async move {
                time::sleep(delay).await;
                let _ = tx.send(Fired { handle, event });
            })
        })
    }

    fn every(&mut self, period: Duration, event: TimerEvent) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.spawn(true, |handle, tx| {
            tokio::spawn(async move {
                let mut ticker = time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    if tx.send(Fired { handle, event }).is_err() {
                        break;
                    }
                }
            })
        })
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.inner.borrow_mut().tasks.remove(&handle) {
            task.join.abort();
        }
    }
}

impl fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("active", &self.active())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::timers::CardStackTimer;

    const UNLOCK: TimerEvent = TimerEvent::CardStack(CardStackTimer::AnimationUnlock);
    const TICK: TimerEvent = TimerEvent::CardStack(CardStackTimer::AutoAdvance);

    #[tokio::test(start_paused = true)]
    async fn one_shot_fires_once_and_is_forgotten() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        scheduler.once(Duration::from_millis(600), UNLOCK);

        let fired = rx.recv().await.expect("timer fires");
        assert_eq!(scheduler.accept(fired), Some(UNLOCK));
        assert_eq!(scheduler.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_keeps_firing_until_cancelled() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let handle = scheduler.every(Duration::from_secs(4), TICK);

        for _ in 0..3 {
            let fired = rx.recv().await.expect("tick");
            assert_eq!(scheduler.accept(fired), Some(TICK));
        }
        scheduler.cancel(handle);
        assert_eq!(scheduler.active(), 0);

        time::sleep(Duration::from_secs(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn queued_message_of_cancelled_timer_is_dropped() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let handle = scheduler.once(Duration::from_millis(10), UNLOCK);
        time::sleep(Duration::from_millis(20)).await;

        scheduler.cancel(handle);
        let fired = rx.recv().await.expect("message was queued");
        assert_eq!(scheduler.accept(fired), None);
    }
}

//! Acknowledgement timer.
//!
//! The "copied" acknowledgement is cleared by a fire-once task. At most one
//! task is outstanding: scheduling again cancels the pending one and starts
//! a fresh window. The host drives time by calling `fire_if_due` from its
//! event loop; nothing runs in the background.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// How long the acknowledgement stays visible.
pub const ACK_WINDOW: Duration = Duration::from_secs(2);

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTask {
    generation: u64,
    due: Instant,
}

/// Cancellable fire-once task.
#[derive(Debug, Clone)]
pub struct AckTimer {
    window: Duration,
    generation: u64,
    pending: Option<PendingTask>,
}

impl AckTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: None,
        }
    }

    #[inline]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule the task to fire one window after `now`, replacing any
    /// pending task. Returns the new task's generation.
    pub fn schedule(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.pending = Some(PendingTask {
            generation: self.generation,
            due: now + self.window,
        });
        self.generation
    }

    /// Cancel the pending task. Returns whether one was pending.
    #[inline]
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn due(&self) -> Option<Instant> {
        self.pending.map(|task| task.due)
    }

    /// Generation of the pending task, if any.
    #[inline]
    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.map(|task| task.generation)
    }

    /// Consume the pending task if its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<u64> {
        match self.pending {
            Some(task) if now >= task.due => {
                self.pending = None;
                Some(task.generation)
            }
            _ => None,
        }
    }
}

impl Default for AckTimer {
    fn default() -> Self {
        Self::new(ACK_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_window() {
        let clock = ManualClock::new();
        let mut timer = AckTimer::default();
        let generation = timer.schedule(clock.now());

        clock.advance(Duration::from_millis(1999));
        assert_eq!(timer.fire_if_due(clock.now()), None);

        clock.advance(Duration::from_millis(1));
        assert_eq!(timer.fire_if_due(clock.now()), Some(generation));
        assert_eq!(timer.fire_if_due(clock.now()), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending_task() {
        let clock = ManualClock::new();
        let mut timer = AckTimer::new(Duration::from_secs(2));
        let first = timer.schedule(clock.now());

        clock.advance(Duration::from_secs(1));
        let second = timer.schedule(clock.now());
        assert_ne!(first, second);
        assert_eq!(timer.pending_generation(), Some(second));

        clock.advance(Duration::from_secs(1));
        assert_eq!(timer.fire_if_due(clock.now()), None);

        clock.advance(Duration::from_secs(1));
        assert_eq!(timer.fire_if_due(clock.now()), Some(second));
    }

    #[test]
    fn test_cancel() {
        let clock = ManualClock::new();
        let mut timer = AckTimer::default();
        assert!(!timer.cancel());
        timer.schedule(clock.now());
        assert!(timer.cancel());
        clock.advance(ACK_WINDOW * 2);
        assert_eq!(timer.fire_if_due(clock.now()), None);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let shared = clock.clone();
        let start = clock.now();
        shared.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }
}

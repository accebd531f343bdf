#![forbid(unsafe_code)]

//! Deterministic timer scheduler.
//!
//! Models the page's timer queue: every timer-based effect (rotation ticks,
//! debounce windows, simulated-submission delays, notice auto-dismissal)
//! owns exactly one cancellable [`TimerHandle`] here.
//!
//! # Invariants
//!
//! 1. Handles are unique and never reused.
//! 2. A cancelled handle never fires again.
//! 3. `advance` fires timers in due order; a repeating timer that falls
//!    behind fires once per elapsed interval, in order.
//!
//! # Failure Modes
//!
//! - Cancelling an unknown or already-retired handle returns `false`.
//! - `advance` with a zero delta fires nothing.

use std::time::Duration;

use web_time::Instant;

/// Opaque cancellable token for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Debug)]
struct TimerEntry {
    handle: TimerHandle,
    due: Duration,
    repeat: Repeat,
}

/// Single-threaded timer queue over a virtual clock.
///
/// Tests drive it with [`advance`](Self::advance); a live host calls
/// [`poll`](Self::poll) once per animation frame, which advances by the
/// wall-clock time elapsed since the previous poll.
#[derive(Debug)]
pub struct Scheduler {
    now: Duration,
    timers: Vec<TimerEntry>,
    next_id: u64,
    last_poll: Option<Instant>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// An empty scheduler at virtual time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            timers: Vec::new(),
            next_id: 1,
            last_poll: None,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timers.
    pub fn live_count(&self) -> usize {
        self.timers.len()
    }

    /// Whether `handle` is still armed.
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Arm a one-shot timer firing after `delay`.
    pub fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.arm(delay, Repeat::Once)
    }

    /// Arm a repeating timer firing every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero: a zero-interval repeat would never let
    /// `advance` terminate.
    pub fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        assert!(
            interval > Duration::ZERO,
            "repeating timers require a positive interval"
        );
        self.arm(interval, Repeat::Every(interval))
    }

    fn arm(&mut self, delay: Duration, repeat: Repeat) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(TimerEntry {
            handle,
            due: self.now + delay,
            repeat,
        });
        handle
    }

    /// Cancel a timer. Returns `true` if it was live.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    /// Advance virtual time by `dt` and return the handles that fired, in
    /// due order. One-shot timers retire on fire; repeating timers re-arm.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        self.now += dt;
        let mut fired = Vec::new();
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= self.now)
                .min_by_key(|(_, t)| (t.due, t.handle.0));
            let Some((index, _)) = next else {
                break;
            };
            let entry = &mut self.timers[index];
            fired.push(entry.handle);
            match entry.repeat {
                Repeat::Once => {
                    self.timers.swap_remove(index);
                }
                Repeat::Every(interval) => {
                    entry.due += interval;
                }
            }
        }
        fired
    }

    /// Advance by the wall-clock time elapsed since the last poll.
    pub fn poll(&mut self) -> Vec<TimerHandle> {
        let now = Instant::now();
        let dt = match self.last_poll {
            Some(last) => now.duration_since(last),
            None => Duration::ZERO,
        };
        self.last_poll = Some(now);
        self.advance(dt)
    }
}

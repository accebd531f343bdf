#![forbid(unsafe_code)]

//! Debounce window over the scheduler.
//!
//! Used for rate-limiting scroll offset reports. Each trigger cancels the
//! pending window before arming a new one, so at most one handle is ever
//! live per debouncer.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerHandle};

/// A restartable delay window.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    /// A debouncer with the given window length.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Restart the window: cancel any pending handle, arm a fresh one.
    pub fn trigger(&mut self, sched: &mut Scheduler) -> TimerHandle {
        if let Some(previous) = self.pending.take() {
            sched.cancel(previous);
        }
        let handle = sched.schedule_once(self.delay);
        self.pending = Some(handle);
        handle
    }

    /// Consume a fired handle. Returns `true` (and clears the pending slot)
    /// when it is this debouncer's live window.
    pub fn take_fired(&mut self, fired: TimerHandle) -> bool {
        if self.pending == Some(fired) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancel the pending window, if any.
    pub fn clear(&mut self, sched: &mut Scheduler) {
        if let Some(previous) = self.pending.take() {
            sched.cancel(previous);
        }
    }

    /// Whether a window is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

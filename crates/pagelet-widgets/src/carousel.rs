#![forbid(unsafe_code)]

//! Quote carousel: cyclic rotation over a fixed item sequence.
//!
//! # State machine
//!
//! Idle → Running → Paused → Running → … → Idle (on stop).
//!
//! # Invariants
//!
//! 1. `0 ≤ index < items.len()` at all times.
//! 2. A timer handle is held exactly while the phase is Running; any
//!    previous handle is cancelled before a new one is armed, so repeated
//!    pause/resume can never accumulate ticks.
//! 3. After every tick exactly one item carries the `active` class.

use std::time::Duration;

use core::fmt;

use pagelet_core::{Document, NodeId, PointerKind};
use pagelet_runtime::{Scheduler, TimerHandle};

use crate::ACTIVE_CLASS;

/// Rotation lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Construction error: a carousel needs at least one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselError;

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "carousel requires at least one item")
    }
}

impl std::error::Error for CarouselError {}

/// Timed rotation over display items.
#[derive(Debug)]
pub struct Carousel {
    items: Vec<NodeId>,
    index: usize,
    interval: Duration,
    handle: Option<TimerHandle>,
    phase: Phase,
}

impl Carousel {
    /// Build a carousel over `items`. Errors when `items` is empty; a
    /// single item is accepted (a trivial cycle with no visible change).
    pub fn new(items: Vec<NodeId>, interval: Duration) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError);
        }
        Ok(Self {
            items,
            index: 0,
            interval,
            handle: None,
            phase: Phase::Idle,
        })
    }

    /// Current item index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start rotating: index 0 becomes active and a repeating tick is
    /// armed. Restarting an already-running carousel rearms from scratch.
    pub fn start(&mut self, doc: &mut Document, sched: &mut Scheduler) {
        self.release(sched);
        for &item in &self.items {
            doc.remove_class(item, ACTIVE_CLASS);
        }
        self.index = 0;
        doc.add_class(self.items[0], ACTIVE_CLASS);
        self.handle = Some(sched.schedule_repeating(self.interval));
        self.phase = Phase::Running;
    }

    /// Consume a fired timer. Returns `true` (after advancing the active
    /// item) when the handle is this carousel's live tick.
    pub fn on_timer(&mut self, doc: &mut Document, fired: TimerHandle) -> bool {
        if self.phase != Phase::Running || self.handle != Some(fired) {
            return false;
        }
        doc.remove_class(self.items[self.index], ACTIVE_CLASS);
        self.index = (self.index + 1) % self.items.len();
        doc.add_class(self.items[self.index], ACTIVE_CLASS);
        true
    }

    /// Cancel the tick without resetting the index. No-op unless Running.
    pub fn pause(&mut self, sched: &mut Scheduler) {
        if self.phase == Phase::Running {
            self.release(sched);
            self.phase = Phase::Paused;
        }
    }

    /// Re-arm the tick from the current index at the same interval. No-op
    /// unless Paused.
    pub fn resume(&mut self, sched: &mut Scheduler) {
        if self.phase == Phase::Paused {
            self.release(sched);
            self.handle = Some(sched.schedule_repeating(self.interval));
            self.phase = Phase::Running;
        }
    }

    /// Tear down: cancel the tick and return to Idle. The active item keeps
    /// its class; a later `start` resets it.
    pub fn stop(&mut self, sched: &mut Scheduler) {
        self.release(sched);
        self.phase = Phase::Idle;
    }

    /// Hover policy layered on the timer: hover-in pauses, hover-out
    /// resumes. Other pointer kinds are ignored.
    pub fn handle_pointer(&mut self, sched: &mut Scheduler, kind: PointerKind) {
        match kind {
            PointerKind::HoverEnter => self.pause(sched),
            PointerKind::HoverLeave => self.resume(sched),
            PointerKind::Click => {}
        }
    }

    fn release(&mut self, sched: &mut Scheduler) {
        if let Some(handle) = self.handle.take() {
            sched.cancel(handle);
        }
    }
}

#![forbid(unsafe_code)]

//! Transient notices with automatic dismissal.

use std::time::Duration;

use pagelet_runtime::{Scheduler, TimerHandle};

/// Default lifetime of a notice before auto-dismissal.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One live notice and its dismissal timer.
#[derive(Debug)]
pub struct Notice {
    pub id: u64,
    pub text: String,
    pub kind: NoticeKind,
    dismiss: TimerHandle,
}

/// Owns every live notice. Each notice carries exactly one dismissal
/// timer; explicit dismissal cancels it, auto-dismissal consumes it.
#[derive(Debug)]
pub struct NoticeCenter {
    notices: Vec<Notice>,
    next_id: u64,
    ttl: Duration,
}

impl Default for NoticeCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeCenter {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            notices: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    /// Post a notice and arm its dismissal timer. Returns the notice id.
    pub fn post(&mut self, sched: &mut Scheduler, text: impl Into<String>, kind: NoticeKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            text: text.into(),
            kind,
            dismiss: sched.schedule_once(self.ttl),
        });
        id
    }

    /// Consume a fired timer. Returns `true` when it dismissed a notice.
    pub fn on_timer(&mut self, fired: TimerHandle) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.dismiss != fired);
        self.notices.len() != before
    }

    /// Dismiss a notice early, cancelling its timer. Unknown ids are a
    /// quiet no-op.
    pub fn dismiss(&mut self, sched: &mut Scheduler, id: u64) {
        if let Some(position) = self.notices.iter().position(|notice| notice.id == id) {
            let notice = self.notices.remove(position);
            sched.cancel(notice.dismiss);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

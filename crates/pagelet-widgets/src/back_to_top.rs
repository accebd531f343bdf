#![forbid(unsafe_code)]

//! Back-to-top button driven by debounced scroll reports.

use std::time::Duration;

use pagelet_core::{Document, Event, NodeId, PointerKind};
use pagelet_runtime::{Debouncer, Scheduler, TimerHandle};

/// Scroll offset above which the button shows, in host units.
pub const SCROLL_THRESHOLD: u32 = 300;

/// Debounce window for scroll offset reports.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Class toggled on the button while it is shown.
pub const VISIBLE_CLASS: &str = "visible";

/// Shows a return-to-top control once the page has scrolled far enough.
///
/// Scroll reports are debounced: visibility is only re-evaluated when the
/// stream goes quiet for the window length, using the last reported offset.
#[derive(Debug)]
pub struct BackToTop {
    button: NodeId,
    debouncer: Debouncer,
    last_offset: u32,
    scroll_requested: bool,
}

impl BackToTop {
    pub fn new(doc: &mut Document, button: NodeId) -> Self {
        doc.remove_class(button, VISIBLE_CLASS);
        Self {
            button,
            debouncer: Debouncer::new(SCROLL_DEBOUNCE),
            last_offset: 0,
            scroll_requested: false,
        }
    }

    /// Record a scroll offset and restart the debounce window.
    pub fn report_scroll(&mut self, sched: &mut Scheduler, offset: u32) {
        self.last_offset = offset;
        self.debouncer.trigger(sched);
    }

    /// Consume a fired timer. When it closes this button's debounce window,
    /// visibility is updated from the last reported offset.
    pub fn on_timer(&mut self, doc: &mut Document, fired: TimerHandle) -> bool {
        if !self.debouncer.take_fired(fired) {
            return false;
        }
        if self.last_offset > SCROLL_THRESHOLD {
            doc.add_class(self.button, VISIBLE_CLASS);
        } else {
            doc.remove_class(self.button, VISIBLE_CLASS);
        }
        true
    }

    /// Route an event: scroll reports feed the debouncer, clicks on the
    /// button record a scroll-to-top request. Returns `true` when handled.
    pub fn handle_event(&mut self, sched: &mut Scheduler, event: &Event) -> bool {
        match event {
            Event::Scroll { offset } => {
                self.report_scroll(sched, *offset);
                true
            }
            Event::Pointer(pointer)
                if pointer.kind == PointerKind::Click && pointer.target == self.button =>
            {
                self.scroll_requested = true;
                true
            }
            _ => false,
        }
    }

    /// Take the pending scroll-to-top request, if one was recorded.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelet_core::{Node, NodeKind, PointerEvent};

    fn fixture() -> (Document, BackToTop) {
        let mut doc = Document::new();
        let button = doc.append(doc.root(), Node::new(NodeKind::Button).with_class("back-to-top"));
        let widget = BackToTop::new(&mut doc, button);
        (doc, widget)
    }

    fn settle(doc: &mut Document, sched: &mut Scheduler, widget: &mut BackToTop) {
        for fired in sched.advance(SCROLL_DEBOUNCE) {
            widget.on_timer(doc, fired);
        }
    }

    #[test]
    fn shows_past_the_threshold_and_hides_below_it() {
        let (mut doc, mut widget) = fixture();
        let mut sched = Scheduler::new();

        widget.report_scroll(&mut sched, SCROLL_THRESHOLD + 1);
        settle(&mut doc, &mut sched, &mut widget);
        assert!(doc.has_class(widget.button, VISIBLE_CLASS));

        widget.report_scroll(&mut sched, SCROLL_THRESHOLD);
        settle(&mut doc, &mut sched, &mut widget);
        assert!(!doc.has_class(widget.button, VISIBLE_CLASS));
    }

    #[test]
    fn rapid_reports_collapse_into_one_evaluation() {
        let (mut doc, mut widget) = fixture();
        let mut sched = Scheduler::new();

        for offset in [50, 150, 400] {
            widget.report_scroll(&mut sched, offset);
            sched.advance(SCROLL_DEBOUNCE / 2);
        }
        assert_eq!(sched.live_count(), 1, "one live debounce window");

        settle(&mut doc, &mut sched, &mut widget);
        assert!(
            doc.has_class(widget.button, VISIBLE_CLASS),
            "last offset wins"
        );
    }

    #[test]
    fn click_records_a_scroll_request() {
        let (_doc, mut widget) = fixture();
        let mut sched = Scheduler::new();
        let button = widget.button;

        assert!(widget.handle_event(&mut sched, &Event::Pointer(PointerEvent::click(button))));
        assert!(widget.take_scroll_request());
        assert!(!widget.take_scroll_request(), "request is one-shot");
    }

    #[test]
    fn unrelated_timers_are_ignored() {
        let (mut doc, mut widget) = fixture();
        let mut sched = Scheduler::new();
        let stray = sched.schedule_once(SCROLL_DEBOUNCE);
        assert!(!widget.on_timer(&mut doc, stray));
    }
}

#![forbid(unsafe_code)]

//! Focus trap for modal boundaries.
//!
//! # Invariants
//!
//! 1. The trap holds the registry snapshot computed when the modal opened;
//!    reopening recomputes it (dynamic content tolerance).
//! 2. Tab from the last member wraps to the first; Shift-Tab from the first
//!    wraps to the last; focus never leaves the member set while trapped.
//! 3. A trap over an empty registry pins focus on the fallback node (the
//!    modal's content container) instead of failing.

use ahash::AHashSet;
use pagelet_core::{Document, NodeId};

use crate::focus::FocusManager;
use crate::registry::focusable_in;

/// A tab-cycle boundary over a modal's focusable members.
#[derive(Debug, Clone)]
pub struct FocusTrap {
    members: Vec<NodeId>,
    member_set: AHashSet<NodeId>,
    fallback: NodeId,
}

impl FocusTrap {
    /// Build a trap for `container`, recomputing the focus registry now.
    /// `fallback` receives focus when the registry is empty (and when focus
    /// is found outside the trap).
    pub fn capture(doc: &Document, container: NodeId, fallback: NodeId) -> Self {
        let members = focusable_in(doc, container);
        let member_set = members.iter().copied().collect();
        Self {
            members,
            member_set,
            fallback,
        }
    }

    /// The node that should receive focus when the trap engages: the first
    /// member, or the fallback when there are none.
    pub fn initial(&self) -> NodeId {
        self.members.first().copied().unwrap_or(self.fallback)
    }

    /// Whether `id` is inside the trap (member or fallback).
    pub fn contains(&self, id: NodeId) -> bool {
        id == self.fallback || self.member_set.contains(&id)
    }

    /// Handle a Tab (or Shift-Tab) press while trapped. Returns `true` when
    /// the event was consumed (focus wrapped at a boundary or was pulled
    /// back inside the trap).
    pub fn handle_tab(&self, doc: &Document, focus: &mut FocusManager, backward: bool) -> bool {
        let (Some(&first), Some(&last)) = (self.members.first(), self.members.last()) else {
            // Nothing tabbable inside: keep focus pinned to the fallback.
            return focus.focus(doc, self.fallback);
        };

        let current = focus.current();
        let escaped = current.is_none_or(|id| !self.contains(id));
        if escaped {
            return focus.focus(doc, first);
        }

        if backward && current == Some(first) {
            return focus.focus(doc, last);
        }
        if !backward && current == Some(last) {
            return focus.focus(doc, first);
        }

        // Interior moves are left to the host's native tab order.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelet_core::{Node, NodeKind};

    fn modal_fixture() -> (Document, NodeId, NodeId, Vec<NodeId>) {
        let mut doc = Document::new();
        let modal = doc.append(doc.root(), Node::new(NodeKind::Container));
        let content = doc.append(modal, Node::new(NodeKind::Container).with_tab_index(-1));
        let a = doc.append(content, Node::new(NodeKind::Anchor));
        let b = doc.append(content, Node::new(NodeKind::Input));
        let c = doc.append(content, Node::new(NodeKind::Button));
        (doc, modal, content, vec![a, b, c])
    }

    #[test]
    fn forward_tab_wraps_last_to_first() {
        let (doc, modal, content, members) = modal_fixture();
        let trap = FocusTrap::capture(&doc, modal, content);
        let mut focus = FocusManager::new();
        focus.focus(&doc, members[2]);

        assert!(trap.handle_tab(&doc, &mut focus, false));
        assert_eq!(focus.current(), Some(members[0]));
    }

    #[test]
    fn backward_tab_wraps_first_to_last() {
        let (doc, modal, content, members) = modal_fixture();
        let trap = FocusTrap::capture(&doc, modal, content);
        let mut focus = FocusManager::new();
        focus.focus(&doc, members[0]);

        assert!(trap.handle_tab(&doc, &mut focus, true));
        assert_eq!(focus.current(), Some(members[2]));
    }

    #[test]
    fn interior_moves_are_not_consumed() {
        let (doc, modal, content, members) = modal_fixture();
        let trap = FocusTrap::capture(&doc, modal, content);
        let mut focus = FocusManager::new();
        focus.focus(&doc, members[1]);

        assert!(!trap.handle_tab(&doc, &mut focus, false));
        assert!(!trap.handle_tab(&doc, &mut focus, true));
        assert_eq!(focus.current(), Some(members[1]));
    }

    #[test]
    fn escaped_focus_is_pulled_back_in() {
        let (mut doc, modal, content, members) = modal_fixture();
        let outside = doc.append(doc.root(), Node::new(NodeKind::Button));
        let trap = FocusTrap::capture(&doc, modal, content);
        let mut focus = FocusManager::new();
        focus.focus(&doc, outside);

        assert!(trap.handle_tab(&doc, &mut focus, false));
        assert_eq!(focus.current(), Some(members[0]));
    }

    #[test]
    fn empty_registry_pins_the_fallback() {
        let mut doc = Document::new();
        let modal = doc.append(doc.root(), Node::new(NodeKind::Container));
        let content = doc.append(modal, Node::new(NodeKind::Container).with_tab_index(-1));
        doc.remove(content);
        let content2 = doc.append(modal, Node::new(NodeKind::Container).with_tab_index(-1));

        let trap = FocusTrap::capture(&doc, modal, content2);
        assert_eq!(trap.initial(), content2);

        let mut focus = FocusManager::new();
        assert!(trap.handle_tab(&doc, &mut focus, false));
        assert_eq!(focus.current(), Some(content2));
    }

    #[test]
    fn capture_reflects_content_at_open_time() {
        let (mut doc, modal, content, members) = modal_fixture();
        let trap = FocusTrap::capture(&doc, modal, content);
        assert_eq!(trap.initial(), members[0]);

        // Content added after capture is only seen by the next capture.
        let newcomer = doc.append(content, Node::new(NodeKind::Button));
        assert!(!trap.contains(newcomer));
        let recaptured = FocusTrap::capture(&doc, modal, content);
        assert!(recaptured.contains(newcomer));
    }
}

#![forbid(unsafe_code)]

//! Focus tracking.
//!
//! The host document has exactly one focused element at a time; this mirrors
//! it. Moving focus to a detached or non-focusable node is refused rather
//! than panicking, so callers can attempt a restore unconditionally and let
//! a vanished trigger degrade silently.

use pagelet_core::{Document, NodeId};

/// Tracks the currently focused node.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusManager {
    current: Option<NodeId>,
}

impl FocusManager {
    /// No node focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused node, if any.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Move focus to `id`. Returns `true` on success; refuses (and leaves
    /// focus where it was) when the node is detached or not a focus target.
    pub fn focus(&mut self, doc: &Document, id: NodeId) -> bool {
        let ok = doc.is_connected(id) && doc.get(id).is_some_and(|node| node.is_focus_target());
        if ok {
            self.current = Some(id);
        }
        ok
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.current = None;
    }
}

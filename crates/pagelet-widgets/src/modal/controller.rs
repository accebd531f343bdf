#![forbid(unsafe_code)]

//! Modal open/close lifecycle and event routing.
//!
//! # Invariants
//!
//! 1. `open_order` contains exactly the modals whose state holds a live
//!    trap; the last entry is the topmost and the only one receiving keys.
//! 2. The trigger recorded at open is cleared on close unconditionally,
//!    whether or not focus restoration happened.
//! 3. The focus registry is recomputed at every open, never cached.
//!
//! # Failure Modes
//!
//! - `close` on a modal that is not open is a no-op returning `false`.
//! - A trigger removed from the document while its modal was open is
//!   skipped during restoration; focus stays where it was left.

use core::fmt;

use ahash::AHashMap;
use pagelet_a11y::{FocusManager, FocusTrap};
use pagelet_core::{Document, Event, KeyCode, Modifiers, NodeId, PointerKind};

use crate::ACTIVE_CLASS;
use crate::modal::{CONTENT_CLASS, DISMISS_CLASS};

/// Errors from modal registration and opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalError {
    /// The node was never registered as a modal.
    Unknown(NodeId),
    /// `open` was called on a modal that is already open.
    AlreadyOpen(NodeId),
}

impl fmt::Display for ModalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(id) => write!(f, "node {id:?} is not a registered modal"),
            Self::AlreadyOpen(id) => write!(f, "modal {id:?} is already open"),
        }
    }
}

impl std::error::Error for ModalError {}

/// Action taken by the controller in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// A modal was closed (escape, backdrop, or dismiss control).
    Closed(NodeId),
    /// Focus wrapped at the trap boundary.
    FocusCycled,
}

#[derive(Debug)]
struct ModalState {
    /// The inner content container; focus fallback and `tabindex = -1`
    /// target.
    content: NodeId,
    /// Identity of the element that opened the modal, for restoration.
    trigger: Option<NodeId>,
    /// Present exactly while the modal is open.
    trap: Option<FocusTrap>,
}

/// Owns open/close state for every modal on the page.
#[derive(Debug, Default)]
pub struct ModalController {
    states: AHashMap<NodeId, ModalState>,
    /// Open modals, bottom to top.
    open_order: Vec<NodeId>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a modal found in the markup. The modal starts closed and
    /// hidden from assistive technology; its content container (first
    /// descendant with the `modal-content` class, else the modal itself)
    /// becomes a programmatic focus target.
    pub fn register(&mut self, doc: &mut Document, modal: NodeId) {
        let content = doc
            .descendants(modal)
            .find(|&id| doc.has_class(id, CONTENT_CLASS))
            .unwrap_or(modal);
        doc.set_tab_index(content, -1);
        doc.set_hidden(modal, true);
        doc.remove_class(modal, ACTIVE_CLASS);
        self.states.insert(
            modal,
            ModalState {
                content,
                trigger: None,
                trap: None,
            },
        );
    }

    /// Whether `modal` is currently open.
    pub fn is_open(&self, modal: NodeId) -> bool {
        self.states
            .get(&modal)
            .is_some_and(|state| state.trap.is_some())
    }

    /// The topmost open modal, if any.
    pub fn top(&self) -> Option<NodeId> {
        self.open_order.last().copied()
    }

    /// Open a modal, recording `trigger` for later focus restoration.
    ///
    /// Marks the modal active and visible to assistive technology,
    /// recomputes the focus registry, and moves focus to the first
    /// focusable element (or the content container when there is none).
    pub fn open(
        &mut self,
        doc: &mut Document,
        focus: &mut FocusManager,
        modal: NodeId,
        trigger: NodeId,
    ) -> Result<(), ModalError> {
        let state = self.states.get_mut(&modal).ok_or(ModalError::Unknown(modal))?;
        if state.trap.is_some() {
            return Err(ModalError::AlreadyOpen(modal));
        }

        doc.add_class(modal, ACTIVE_CLASS);
        doc.set_hidden(modal, false);
        state.trigger = Some(trigger);

        let trap = FocusTrap::capture(doc, modal, state.content);
        focus.focus(doc, trap.initial());
        state.trap = Some(trap);
        self.open_order.push(modal);

        tracing::debug!(?modal, ?trigger, "modal opened");
        Ok(())
    }

    /// Close a modal. A no-op (returning `false`) when it is not open.
    ///
    /// Restores focus to the recorded trigger if it is still in the
    /// document; the recorded trigger is cleared regardless.
    pub fn close(&mut self, doc: &mut Document, focus: &mut FocusManager, modal: NodeId) -> bool {
        let Some(state) = self.states.get_mut(&modal) else {
            return false;
        };
        if state.trap.take().is_none() {
            return false;
        }

        doc.remove_class(modal, ACTIVE_CLASS);
        doc.set_hidden(modal, true);
        self.open_order.retain(|&open| open != modal);

        if let Some(trigger) = state.trigger.take() {
            if doc.is_connected(trigger) {
                focus.focus(doc, trigger);
            } else {
                tracing::debug!(?modal, ?trigger, "trigger left the document; focus unchanged");
            }
        }

        tracing::debug!(?modal, "modal closed");
        true
    }

    /// Route an event to the open modals.
    ///
    /// - Escape closes the topmost modal.
    /// - Tab / Shift-Tab cycle the topmost trap at its boundary.
    /// - A click on an open modal's outer surface (the backdrop) closes it.
    /// - A click on a dismiss control closes its enclosing modal.
    pub fn handle_event(
        &mut self,
        doc: &mut Document,
        focus: &mut FocusManager,
        event: &Event,
    ) -> Option<ModalAction> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Escape => {
                    let top = self.top()?;
                    self.close(doc, focus, top);
                    Some(ModalAction::Closed(top))
                }
                KeyCode::Tab => {
                    let top = self.top()?;
                    let backward = key.modifiers.contains(Modifiers::SHIFT);
                    let trap = self.states.get(&top).and_then(|s| s.trap.as_ref())?;
                    trap.handle_tab(doc, focus, backward)
                        .then_some(ModalAction::FocusCycled)
                }
                _ => None,
            },
            Event::Pointer(pointer) if pointer.kind == PointerKind::Click => {
                let target = pointer.target;
                // Backdrop: the click landed on the modal's outer surface
                // itself, not on content within it.
                if self.is_open(target) {
                    self.close(doc, focus, target);
                    return Some(ModalAction::Closed(target));
                }
                if doc.has_class(target, DISMISS_CLASS) {
                    let enclosing = self
                        .open_order
                        .iter()
                        .rev()
                        .copied()
                        .find(|&modal| doc.contains(modal, target))?;
                    self.close(doc, focus, enclosing);
                    return Some(ModalAction::Closed(enclosing));
                }
                None
            }
            _ => None,
        }
    }
}

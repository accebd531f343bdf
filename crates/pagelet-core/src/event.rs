#![forbid(unsafe_code)]

//! Typed interaction events.
//!
//! Handlers register against these instead of a host event-loop API, which
//! keeps every behavior testable by feeding it events directly.

use bitflags::bitflags;

use crate::node::NodeId;

bitflags! {
    /// Key modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Tab,
    Escape,
    Enter,
    Char(char),
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Forward tab.
    pub fn tab() -> Self {
        Self::new(KeyCode::Tab)
    }

    /// Backward tab.
    pub fn shift_tab() -> Self {
        Self {
            code: KeyCode::Tab,
            modifiers: Modifiers::SHIFT,
        }
    }

    /// Escape.
    pub fn escape() -> Self {
        Self::new(KeyCode::Escape)
    }

    /// Whether this press activates a control (Enter or Space), the pair of
    /// keys card and accordion handlers treat as a click.
    pub fn is_activate(&self) -> bool {
        matches!(self.code, KeyCode::Enter | KeyCode::Char(' '))
    }
}

/// Pointer gesture kinds the behaviors react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Click,
    HoverEnter,
    HoverLeave,
}

/// A pointer gesture aimed at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub target: NodeId,
    pub kind: PointerKind,
}

impl PointerEvent {
    /// A click on `target`.
    pub fn click(target: NodeId) -> Self {
        Self {
            target,
            kind: PointerKind::Click,
        }
    }

    /// Hover entering `target`.
    pub fn hover_enter(target: NodeId) -> Self {
        Self {
            target,
            kind: PointerKind::HoverEnter,
        }
    }

    /// Hover leaving `target`.
    pub fn hover_leave(target: NodeId) -> Self {
        Self {
            target,
            kind: PointerKind::HoverLeave,
        }
    }
}

/// An interaction event delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Pointer(PointerEvent),
    /// Viewport scroll offset report, in host units.
    Scroll { offset: u32 },
}

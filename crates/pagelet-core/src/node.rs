#![forbid(unsafe_code)]

//! Node identity, kinds, and per-node attributes.

use bitflags::bitflags;

/// Arena index of a node within a [`Document`](crate::Document).
///
/// Ids stay valid after the node is detached; `Document::is_connected`
/// distinguishes live nodes from removed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw index value.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Element kinds the engine cares about.
///
/// This is deliberately narrower than HTML: only the kinds that affect
/// focusability, card binding, or text content are distinguished. Everything
/// else is a `Container`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Container,
    Heading,
    Anchor,
    Button,
    Input,
    TextArea,
    Select,
    Text,
}

impl NodeKind {
    /// Whether this kind is focusable by default (without an explicit
    /// tab index).
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            Self::Anchor | Self::Button | Self::Input | Self::TextArea | Self::Select
        )
    }
}

bitflags! {
    /// Boolean attributes mirrored to the host document.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeFlags: u8 {
        /// `aria-hidden="true"`: the subtree is invisible to assistive tech.
        const HIDDEN = 1 << 0;
        /// `aria-expanded="true"` on disclosure controls.
        const EXPANDED = 1 << 1;
        /// Disabled form controls are skipped by the focus registry.
        const DISABLED = 1 << 2;
    }
}

/// A single node: kind, identity, classes, text, and attributes.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) element_id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) text: String,
    pub(crate) tab_index: Option<i32>,
    pub(crate) flags: NodeFlags,
}

impl Node {
    /// Create a node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            element_id: None,
            classes: Vec::new(),
            text: String::new(),
            tab_index: None,
            flags: NodeFlags::empty(),
        }
    }

    /// Set the element id (`id="…"` in markup).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Add a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an explicit tab index.
    pub fn with_tab_index(mut self, index: i32) -> Self {
        self.tab_index = Some(index);
        self
    }

    /// Mark the node disabled.
    pub fn disabled(mut self) -> Self {
        self.flags |= NodeFlags::DISABLED;
        self
    }

    /// Node kind.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Element id, if any.
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Explicit tab index, if any.
    pub fn tab_index(&self) -> Option<i32> {
        self.tab_index
    }

    /// Whether the focus registry should include this node: interactive by
    /// kind, or explicitly marked focusable via a non-negative tab index.
    pub fn is_focusable(&self) -> bool {
        if self.flags.intersects(NodeFlags::HIDDEN | NodeFlags::DISABLED) {
            return false;
        }
        match self.tab_index {
            Some(index) => index >= 0,
            None => self.kind.is_interactive(),
        }
    }

    /// Whether the node can receive programmatic focus. Unlike
    /// [`is_focusable`](Self::is_focusable) this includes `tabindex = -1`
    /// targets such as a modal's content container.
    pub fn is_focus_target(&self) -> bool {
        if self.flags.intersects(NodeFlags::HIDDEN | NodeFlags::DISABLED) {
            return false;
        }
        self.tab_index.is_some() || self.kind.is_interactive()
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_kinds_are_focusable() {
        for kind in [
            NodeKind::Anchor,
            NodeKind::Button,
            NodeKind::Input,
            NodeKind::TextArea,
            NodeKind::Select,
        ] {
            assert!(Node::new(kind).is_focusable(), "{kind:?} should be focusable");
        }
        assert!(!Node::new(NodeKind::Container).is_focusable());
        assert!(!Node::new(NodeKind::Heading).is_focusable());
    }

    #[test]
    fn explicit_tab_index_overrides_kind() {
        // A card container made focusable, like service cards at init.
        assert!(Node::new(NodeKind::Container).with_tab_index(0).is_focusable());
        // Programmatic-only focus targets stay out of the tab order.
        assert!(!Node::new(NodeKind::Container).with_tab_index(-1).is_focusable());
        // An interactive kind can opt out.
        assert!(!Node::new(NodeKind::Button).with_tab_index(-1).is_focusable());
    }

    #[test]
    fn disabled_controls_are_not_focusable() {
        assert!(!Node::new(NodeKind::Input).disabled().is_focusable());
    }
}

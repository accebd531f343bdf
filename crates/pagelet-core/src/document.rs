#![forbid(unsafe_code)]

//! Arena-backed document tree.
//!
//! # Invariants
//!
//! 1. `NodeId`s are never reused; removal tombstones the slot and
//!    `is_connected` turns false for the whole subtree.
//! 2. `descendants` yields preorder document order, matching the order the
//!    host document lays the same elements out in markup.
//! 3. The element-id map only contains connected nodes.
//!
//! # Failure Modes
//!
//! - Lookups with a stale or foreign `NodeId` return `None`/`false`; nothing
//!   here panics on a detached node.

use ahash::AHashMap;

use crate::node::{Node, NodeFlags, NodeId, NodeKind};

struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    connected: bool,
}

/// The page's node tree.
pub struct Document {
    slots: Vec<Slot>,
    root: NodeId,
    ids: AHashMap<String, NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty root container.
    pub fn new() -> Self {
        let root_slot = Slot {
            node: Node::new(NodeKind::Container),
            parent: None,
            children: Vec::new(),
            connected: true,
        };
        Self {
            slots: vec![root_slot],
            root: NodeId(0),
            ids: AHashMap::new(),
        }
    }

    /// The root container.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a node under `parent`, returning its id.
    ///
    /// Appending under a detached parent leaves the new node detached too;
    /// it still gets an id so callers can build subtrees before attaching
    /// behavior, but it will not appear in traversals.
    pub fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        let connected = self.is_connected(parent);
        if connected && let Some(element_id) = node.element_id.clone() {
            self.ids.insert(element_id, id);
        }
        self.slots.push(Slot {
            node,
            parent: Some(parent),
            children: Vec::new(),
            connected,
        });
        if let Some(slot) = self.slots.get_mut(parent.index()) {
            slot.children.push(id);
        }
        id
    }

    /// Detach `id` and its subtree. Returns `false` for the root or an
    /// already-detached node.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || !self.is_connected(id) {
            return false;
        }
        if let Some(parent) = self.slots[id.index()].parent {
            let siblings = &mut self.slots[parent.index()].children;
            siblings.retain(|child| *child != id);
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let slot = &mut self.slots[current.index()];
            slot.connected = false;
            if let Some(element_id) = slot.node.element_id.clone() {
                self.ids.remove(&element_id);
            }
            stack.extend_from_slice(&slot.children.clone());
        }
        true
    }

    /// Whether the node is still part of the document.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.slots.get(id.index()).is_some_and(|slot| slot.connected)
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).map(|slot| &slot.node)
    }

    /// Look up a node mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index()).map(|slot| &mut slot.node)
    }

    /// Resolve an element id to a connected node.
    pub fn by_element_id(&self, element_id: &str) -> Option<NodeId> {
        self.ids.get(element_id).copied()
    }

    /// Children of a node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.index())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.index()).and_then(|slot| slot.parent)
    }

    /// Preorder traversal of the subtree below `container` (excluding the
    /// container itself), in document order.
    pub fn descendants(&self, container: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.is_connected(container) {
            let children = self.children(container);
            stack.extend(children.iter().rev().copied());
        }
        Descendants { doc: self, stack }
    }

    /// Walk from `id` up to the root, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(id),
        }
    }

    /// Whether `id` is inside the subtree rooted at `ancestor` (inclusive).
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        if ancestor == id {
            return true;
        }
        self.ancestors(id).any(|node| node == ancestor)
    }

    // --- Classes ---

    /// Add a class if not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.get_mut(id)
            && !node.has_class(class)
        {
            node.classes.push(class.to_owned());
        }
    }

    /// Remove a class.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Whether the node carries the class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|node| node.has_class(class))
    }

    // --- Attributes ---

    /// Set or clear `aria-hidden`.
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(node) = self.get_mut(id) {
            node.flags.set(NodeFlags::HIDDEN, hidden);
        }
    }

    /// Current `aria-hidden` state.
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|node| node.flags.contains(NodeFlags::HIDDEN))
    }

    /// Set `aria-expanded`.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        if let Some(node) = self.get_mut(id) {
            node.flags.set(NodeFlags::EXPANDED, expanded);
        }
    }

    /// Current `aria-expanded` state.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|node| node.flags.contains(NodeFlags::EXPANDED))
    }

    /// Set an explicit tab index (cards get `0`, modal content gets `-1`).
    pub fn set_tab_index(&mut self, id: NodeId, index: i32) {
        if let Some(node) = self.get_mut(id) {
            node.tab_index = Some(index);
        }
    }
}

/// Preorder iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.doc.children(id);
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}

/// Parent-chain iterator returned by [`Document::ancestors`].
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}

#![forbid(unsafe_code)]

//! Collapsible navigation menu.
//!
//! The hamburger toggle flips the menu's `active` class and mirrors the
//! open state onto the toggle as `aria-expanded`. Following any nav link
//! closes the menu so it never lingers over the scrolled-to section.

use pagelet_core::{Document, Event, NodeId, PointerKind};

use crate::ACTIVE_CLASS;

/// Hamburger navigation: toggle button, menu container, link list.
#[derive(Debug)]
pub struct NavMenu {
    toggle: NodeId,
    menu: NodeId,
    links: Vec<NodeId>,
}

impl NavMenu {
    /// Wire the menu up in the closed state.
    pub fn new(doc: &mut Document, toggle: NodeId, menu: NodeId, links: Vec<NodeId>) -> Self {
        doc.set_expanded(toggle, false);
        doc.remove_class(menu, ACTIVE_CLASS);
        Self {
            toggle,
            menu,
            links,
        }
    }

    /// Whether the menu is open.
    pub fn is_open(&self, doc: &Document) -> bool {
        doc.is_expanded(self.toggle)
    }

    /// Flip the menu open or closed.
    pub fn toggle(&mut self, doc: &mut Document) {
        if self.is_open(doc) {
            self.close(doc);
        } else {
            doc.set_expanded(self.toggle, true);
            doc.add_class(self.menu, ACTIVE_CLASS);
        }
    }

    /// Close the menu. Idempotent.
    pub fn close(&mut self, doc: &mut Document) {
        doc.set_expanded(self.toggle, false);
        doc.remove_class(self.menu, ACTIVE_CLASS);
    }

    /// Route an event: clicks on the toggle flip the menu, clicks on a link
    /// close it. Returns `true` when the event was for this menu.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> bool {
        let Event::Pointer(pointer) = event else {
            return false;
        };
        if pointer.kind != PointerKind::Click {
            return false;
        }
        if pointer.target == self.toggle {
            self.toggle(doc);
            return true;
        }
        if self.links.contains(&pointer.target) {
            self.close(doc);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelet_core::{Node, NodeKind, PointerEvent};

    fn nav(doc: &mut Document) -> NavMenu {
        let bar = doc.append(doc.root(), Node::new(NodeKind::Container));
        let toggle = doc.append(bar, Node::new(NodeKind::Button).with_class("nav-toggle"));
        let menu = doc.append(bar, Node::new(NodeKind::Container).with_class("nav-menu"));
        let links = (0..3)
            .map(|_| doc.append(menu, Node::new(NodeKind::Anchor)))
            .collect();
        NavMenu::new(doc, toggle, menu, links)
    }

    #[test]
    fn toggle_flips_class_and_expanded_state() {
        let mut doc = Document::new();
        let mut menu = nav(&mut doc);
        assert!(!menu.is_open(&doc));

        menu.toggle(&mut doc);
        assert!(menu.is_open(&doc));
        assert!(doc.has_class(menu.menu, ACTIVE_CLASS));

        menu.toggle(&mut doc);
        assert!(!menu.is_open(&doc));
        assert!(!doc.has_class(menu.menu, ACTIVE_CLASS));
    }

    #[test]
    fn link_clicks_close_the_menu() {
        let mut doc = Document::new();
        let mut menu = nav(&mut doc);
        menu.toggle(&mut doc);

        let link = menu.links[1];
        assert!(menu.handle_event(&mut doc, &Event::Pointer(PointerEvent::click(link))));
        assert!(!menu.is_open(&doc));
    }

    #[test]
    fn link_clicks_while_closed_stay_closed() {
        let mut doc = Document::new();
        let mut menu = nav(&mut doc);
        let link = menu.links[0];
        menu.handle_event(&mut doc, &Event::Pointer(PointerEvent::click(link)));
        assert!(!menu.is_open(&doc));
    }

    #[test]
    fn unrelated_clicks_are_not_claimed() {
        let mut doc = Document::new();
        let outsider = doc.append(doc.root(), Node::new(NodeKind::Button));
        let mut menu = nav(&mut doc);
        assert!(!menu.handle_event(&mut doc, &Event::Pointer(PointerEvent::click(outsider))));
    }
}

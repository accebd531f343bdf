#![forbid(unsafe_code)]

//! Card-to-modal binding via the heading slug convention.
//!
//! A card's first heading, slugified and suffixed `-modal`, names the
//! element id of the modal it opens. The convention is part of the markup
//! contract; a card whose slug resolves to nothing simply opens nothing.

use pagelet_core::{Document, NodeId, NodeKind, modal_slug};

/// Resolve the modal a card opens: first heading descendant → slug →
/// element-id lookup. `None` when the card has no heading or the id is
/// absent from the document.
pub fn modal_for_card(doc: &Document, card: NodeId) -> Option<NodeId> {
    let heading = doc
        .descendants(card)
        .find(|&id| doc.get(id).is_some_and(|node| node.kind() == NodeKind::Heading))?;
    let slug = modal_slug(doc.get(heading)?.text());
    let modal = doc.by_element_id(&slug);
    if modal.is_none() {
        tracing::warn!(?card, slug, "card heading resolves to no modal");
    }
    modal
}

/// Make a card keyboard-reachable (cards are plain containers in markup).
pub fn prepare_card(doc: &mut Document, card: NodeId) {
    doc.set_tab_index(card, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelet_core::{Node, NodeKind};

    #[test]
    fn heading_slug_resolves_the_modal() {
        let mut doc = Document::new();
        let card = doc.append(doc.root(), Node::new(NodeKind::Container));
        doc.append(card, Node::new(NodeKind::Heading).with_text("Cloud Hosting"));
        let modal = doc.append(
            doc.root(),
            Node::new(NodeKind::Container).with_id("cloud-hosting-modal"),
        );

        assert_eq!(modal_for_card(&doc, card), Some(modal));
    }

    #[test]
    fn hyphenated_headings_keep_their_hyphens() {
        let mut doc = Document::new();
        let card = doc.append(doc.root(), Node::new(NodeKind::Container));
        doc.append(card, Node::new(NodeKind::Heading).with_text("E-Commerce"));
        let modal = doc.append(
            doc.root(),
            Node::new(NodeKind::Container).with_id("e-commerce-modal"),
        );

        assert_eq!(modal_for_card(&doc, card), Some(modal));
    }

    #[test]
    fn first_heading_wins() {
        let mut doc = Document::new();
        let card = doc.append(doc.root(), Node::new(NodeKind::Container));
        doc.append(card, Node::new(NodeKind::Heading).with_text("Primary"));
        doc.append(card, Node::new(NodeKind::Heading).with_text("Secondary"));
        let modal = doc.append(
            doc.root(),
            Node::new(NodeKind::Container).with_id("primary-modal"),
        );

        assert_eq!(modal_for_card(&doc, card), Some(modal));
    }

    #[test]
    fn missing_heading_or_modal_yields_none() {
        let mut doc = Document::new();
        let bare = doc.append(doc.root(), Node::new(NodeKind::Container));
        assert_eq!(modal_for_card(&doc, bare), None);

        let card = doc.append(doc.root(), Node::new(NodeKind::Container));
        doc.append(card, Node::new(NodeKind::Heading).with_text("Orphan"));
        assert_eq!(modal_for_card(&doc, card), None);
    }

    #[test]
    fn prepare_card_makes_it_focusable() {
        let mut doc = Document::new();
        let card = doc.append(doc.root(), Node::new(NodeKind::Container));
        assert!(!doc.get(card).unwrap().is_focusable());
        prepare_card(&mut doc, card);
        assert!(doc.get(card).unwrap().is_focusable());
    }
}

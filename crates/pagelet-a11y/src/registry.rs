#![forbid(unsafe_code)]

//! Focus registry: which descendants of a container can take tab focus.

use pagelet_core::{Document, NodeId};

/// Enumerate the focusable descendants of `container` in document order.
///
/// Focusable means: anchors, buttons, inputs, textareas, selects, plus any
/// node with an explicit non-negative tab index. Subtrees under an
/// `aria-hidden` node are skipped entirely.
///
/// The result is recomputed on every call — never cached — because modal
/// content may change between opens. An empty result is valid; callers must
/// cope with there being no first/last element to trap to.
pub fn focusable_in(doc: &Document, container: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect(doc, container, &mut out);
    out
}

fn collect(doc: &Document, parent: NodeId, out: &mut Vec<NodeId>) {
    for &child in doc.children(parent) {
        if doc.is_hidden(child) {
            continue;
        }
        if doc.get(child).is_some_and(|node| node.is_focusable()) {
            out.push(child);
        }
        collect(doc, child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelet_core::{Node, NodeKind};

    #[test]
    fn document_order_and_kinds() {
        let mut doc = Document::new();
        let modal = doc.append(doc.root(), Node::new(NodeKind::Container));
        let heading = doc.append(modal, Node::new(NodeKind::Heading).with_text("Details"));
        let link = doc.append(modal, Node::new(NodeKind::Anchor));
        let wrap = doc.append(modal, Node::new(NodeKind::Container));
        let input = doc.append(wrap, Node::new(NodeKind::Input));
        let close = doc.append(modal, Node::new(NodeKind::Button));

        let _ = heading;
        assert_eq!(focusable_in(&doc, modal), vec![link, input, close]);
    }

    #[test]
    fn hidden_subtrees_are_skipped() {
        let mut doc = Document::new();
        let modal = doc.append(doc.root(), Node::new(NodeKind::Container));
        let visible = doc.append(modal, Node::new(NodeKind::Button));
        let hidden_wrap = doc.append(modal, Node::new(NodeKind::Container));
        let _inside = doc.append(hidden_wrap, Node::new(NodeKind::Button));
        doc.set_hidden(hidden_wrap, true);

        assert_eq!(focusable_in(&doc, modal), vec![visible]);
    }

    #[test]
    fn explicit_tab_index_includes_containers() {
        let mut doc = Document::new();
        let section = doc.append(doc.root(), Node::new(NodeKind::Container));
        let card = doc.append(
            section,
            Node::new(NodeKind::Container).with_tab_index(0).with_class("service-card"),
        );
        let negative = doc.append(section, Node::new(NodeKind::Container).with_tab_index(-1));

        let _ = negative;
        assert_eq!(focusable_in(&doc, section), vec![card]);
    }

    #[test]
    fn empty_container_yields_empty_registry() {
        let mut doc = Document::new();
        let modal = doc.append(doc.root(), Node::new(NodeKind::Container));
        assert!(focusable_in(&doc, modal).is_empty());
    }

    #[test]
    fn recomputed_after_content_changes() {
        let mut doc = Document::new();
        let modal = doc.append(doc.root(), Node::new(NodeKind::Container));
        let first = doc.append(modal, Node::new(NodeKind::Button));
        assert_eq!(focusable_in(&doc, modal), vec![first]);

        let second = doc.append(modal, Node::new(NodeKind::Anchor));
        assert_eq!(focusable_in(&doc, modal), vec![first, second]);

        doc.remove(first);
        assert_eq!(focusable_in(&doc, modal), vec![second]);
    }
}

#![forbid(unsafe_code)]

//! Single-open accordion.
//!
//! Activating a header collapses every section first, then expands the
//! activated one only if it was previously collapsed, so clicking an open
//! header closes it and at most one section is expanded at any time.

use pagelet_core::{Document, Event, NodeId, PointerKind};

/// One expandable section: a header the user activates and the panel it
/// reveals.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub header: NodeId,
    pub panel: NodeId,
}

/// Accordion over a fixed list of sections.
#[derive(Debug)]
pub struct Accordion {
    sections: Vec<Section>,
}

impl Accordion {
    /// Build the accordion and collapse every section.
    pub fn new(doc: &mut Document, sections: Vec<Section>) -> Self {
        for section in &sections {
            doc.set_expanded(section.header, false);
            doc.set_hidden(section.panel, true);
        }
        Self { sections }
    }

    /// The index of the expanded section, if any.
    pub fn expanded(&self, doc: &Document) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| doc.is_expanded(section.header))
    }

    /// Toggle the section owning `header`. Unknown headers are ignored.
    pub fn activate(&mut self, doc: &mut Document, header: NodeId) {
        let Some(target) = self
            .sections
            .iter()
            .copied()
            .find(|section| section.header == header)
        else {
            return;
        };
        let was_expanded = doc.is_expanded(target.header);
        for section in &self.sections {
            doc.set_expanded(section.header, false);
            doc.set_hidden(section.panel, true);
        }
        if !was_expanded {
            doc.set_expanded(target.header, true);
            doc.set_hidden(target.panel, false);
        }
    }

    /// Route an event: header clicks and activation keys (Enter/Space while
    /// a header holds focus) toggle sections. Returns `true` when handled.
    pub fn handle_event(
        &mut self,
        doc: &mut Document,
        event: &Event,
        focused: Option<NodeId>,
    ) -> bool {
        match event {
            Event::Pointer(pointer) if pointer.kind == PointerKind::Click => {
                if self.is_header(pointer.target) {
                    self.activate(doc, pointer.target);
                    return true;
                }
                false
            }
            Event::Key(key) if key.is_activate() => {
                if let Some(header) = focused
                    && self.is_header(header)
                {
                    self.activate(doc, header);
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    fn is_header(&self, id: NodeId) -> bool {
        self.sections.iter().any(|section| section.header == id)
    }
}

#![forbid(unsafe_code)]

//! Pagelet: a headless interaction engine for content pages.
//!
//! The engine owns page behavior — modal dialogs with focus trapping, a
//! timed quote carousel, form validation with simulated submission, a
//! persisted theme preference, a collapsible nav, an accordion, and
//! transient notices — over an arena document a host mirrors onto its real
//! one. Everything is deterministic: interaction comes in as typed events,
//! time comes in through a virtual clock.
//!
//! [`Page`] wires all of it together from the markup contract; the
//! underlying crates are re-exported for hosts that assemble their own
//! subset.

pub mod page;

pub use page::Page;

pub use pagelet_a11y as a11y;
pub use pagelet_core as dom;
pub use pagelet_runtime as runtime;
pub use pagelet_widgets as widgets;

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::page::Page;
    pub use pagelet_a11y::{FocusManager, FocusTrap, focusable_in};
    pub use pagelet_core::{
        Document, Event, KeyCode, KeyEvent, Modifiers, Node, NodeId, NodeKind, PointerEvent,
        PointerKind,
    };
    pub use pagelet_runtime::{
        Enhancements, FeatureError, InitReport, Initializer, MemoryStore, PreferenceStore,
        Scheduler, Theme, ThemeManager, TimerHandle,
    };
    pub use pagelet_widgets::{
        Accordion, BackToTop, Carousel, ContactForm, FieldError, FieldKind, FormValues,
        ModalAction, ModalController, ModalError, NavMenu, Notice, NoticeCenter, NoticeKind,
        Section,
    };
}

#![forbid(unsafe_code)]

//! Core page model for Pagelet: an arena-backed node tree standing in for
//! the host document, typed interaction events, and the slug rules used to
//! bind interactive cards to their modals.
//!
//! The engine is headless. A host (wasm shim, test harness) owns the real
//! document and mirrors the class/attribute mutations recorded here onto it.
//! Nothing in this crate performs I/O.

pub mod document;
pub mod error;
pub mod event;
pub mod node;
pub mod slug;

pub use document::Document;
pub use error::CoreError;
pub use event::{Event, KeyCode, KeyEvent, Modifiers, PointerEvent, PointerKind};
pub use node::{Node, NodeId, NodeKind};
pub use slug::{modal_slug, slugify};

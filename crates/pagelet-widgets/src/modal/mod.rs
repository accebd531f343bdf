#![forbid(unsafe_code)]

//! Modal dialogs with focus management.
//!
//! # Lifecycle
//!
//! One [`ModalController`] owns the state of every modal on the page. A
//! modal's state is created at registration, mutated on open/close, and
//! never destroyed during the session. Opening records the trigger for
//! focus restoration and captures a fresh focus trap; closing tears the
//! trap down and returns focus to the trigger if it is still connected.
//!
//! # Focus Management
//!
//! - **Auto-focus**: the first focusable element receives focus on open,
//!   falling back to the modal's content container when there is none.
//! - **Focus trap**: Tab/Shift-Tab wrap at the registry boundary.
//! - **Focus restore**: the recorded trigger regains focus on close; a
//!   trigger that has left the document is skipped silently.
//! - **Escape and backdrop**: both close the topmost open modal.

mod binding;
mod controller;

pub use binding::{modal_for_card, prepare_card};
pub use controller::{ModalAction, ModalController, ModalError};

/// Class marking a modal's inner content container.
pub const CONTENT_CLASS: &str = "modal-content";

/// Class marking dismiss controls inside a modal.
pub const DISMISS_CLASS: &str = "modal-close";

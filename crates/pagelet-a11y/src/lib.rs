#![forbid(unsafe_code)]

//! Accessibility layer for Pagelet: enumerating focusable nodes, tracking
//! the focused node, and trapping focus inside a modal boundary.

pub mod focus;
pub mod registry;
pub mod trap;

pub use focus::FocusManager;
pub use registry::focusable_in;
pub use trap::FocusTrap;

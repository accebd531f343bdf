#![forbid(unsafe_code)]

//! Runtime substrate for Pagelet: a deterministic timer scheduler, debounce
//! windows, the persisted theme preference, the per-feature initialization
//! boundary, and the registry of optional decorative enhancements.
//!
//! Everything here follows the page's cooperative, single-threaded model:
//! handlers run to completion, and the only suspension points are timers.

pub mod debounce;
pub mod enhancements;
pub mod init;
pub mod scheduler;
pub mod store;
pub mod theme;

pub use debounce::Debouncer;
pub use enhancements::Enhancements;
pub use init::{FeatureError, InitReport, Initializer};
pub use scheduler::{Scheduler, TimerHandle};
pub use store::{MemoryStore, PreferenceStore, StoreError};
pub use theme::{Theme, ThemeManager};

#[cfg(feature = "theme-persistence")]
pub use store::FileStore;

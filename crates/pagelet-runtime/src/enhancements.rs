#![forbid(unsafe_code)]

//! Registry of optional decorative collaborators.
//!
//! Scroll animations, tilt, particles, vector players, and audio cues are
//! external libraries the host may or may not have loaded. The core only
//! toggles classes and attributes they read; nothing here depends on them
//! succeeding. An absent enhancement degrades to a logged warning.

use crate::init::FeatureError;

/// Availability registry for decorative libraries.
#[derive(Debug, Default)]
pub struct Enhancements {
    available: Vec<&'static str>,
}

impl Enhancements {
    /// Nothing available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an enhancement as loaded by the host.
    pub fn register(&mut self, name: &'static str) {
        if !self.available.contains(&name) {
            self.available.push(name);
        }
    }

    /// Whether the enhancement is loaded.
    pub fn is_available(&self, name: &'static str) -> bool {
        self.available.contains(&name)
    }

    /// Gate a feature on an enhancement being loaded.
    pub fn require(&self, name: &'static str) -> Result<(), FeatureError> {
        if self.is_available(name) {
            Ok(())
        } else {
            Err(FeatureError::MissingDependency { name })
        }
    }

    /// Run `attach` if the enhancement is loaded; otherwise log and skip.
    pub fn with<F: FnOnce()>(&self, name: &'static str, attach: F) {
        if self.is_available(name) {
            attach();
        } else {
            tracing::warn!(enhancement = name, "not loaded; skipping");
        }
    }
}

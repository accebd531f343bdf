#![forbid(unsafe_code)]

//! Per-feature initialization boundary.
//!
//! Every page feature (nav, accordion, modals, carousel, form, …) is set up
//! through [`Initializer::run`]. A feature that fails — missing markup, an
//! absent decorative library, or an outright panic in its setup — is logged
//! and recorded, and the remaining features still initialize. No error here
//! is fatal to the page.

use core::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use pagelet_core::CoreError;

/// Why a feature failed to initialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// An expected element was absent from the document.
    MissingElement(String),
    /// A decorative dependency is not loaded.
    MissingDependency { name: &'static str },
    /// The setup closure failed or panicked.
    Failed(String),
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "missing element: #{id}"),
            Self::MissingDependency { name } => write!(f, "dependency not loaded: {name}"),
            Self::Failed(detail) => write!(f, "feature setup failed: {detail}"),
        }
    }
}

impl std::error::Error for FeatureError {}

impl From<CoreError> for FeatureError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingElement(id) => Self::MissingElement(id),
        }
    }
}

/// Outcome of running a batch of feature setups.
#[derive(Debug, Default)]
pub struct InitReport {
    succeeded: Vec<&'static str>,
    failed: Vec<(&'static str, FeatureError)>,
}

impl InitReport {
    /// Features that initialized.
    pub fn succeeded(&self) -> &[&'static str] {
        &self.succeeded
    }

    /// Features that were skipped, with their errors.
    pub fn failed(&self) -> &[(&'static str, FeatureError)] {
        &self.failed
    }

    /// Whether every feature came up.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Unexpected failures only (panics and setup errors), excluding the
    /// expected log-and-skip cases. These are the ones surfaced to the user
    /// via a transient notice.
    pub fn unexpected(&self) -> impl Iterator<Item = &(&'static str, FeatureError)> {
        self.failed
            .iter()
            .filter(|(_, err)| matches!(err, FeatureError::Failed(_)))
    }
}

/// Runs feature setups, catching failures at the boundary.
#[derive(Debug, Default)]
pub struct Initializer {
    report: InitReport,
}

impl Initializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one feature's setup. Errors and panics are caught, logged, and
    /// recorded; they never propagate to sibling features.
    pub fn run<F>(&mut self, name: &'static str, setup: F)
    where
        F: FnOnce() -> Result<(), FeatureError>,
    {
        let outcome = catch_unwind(AssertUnwindSafe(setup)).unwrap_or_else(|panic| {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic during setup".to_owned());
            Err(FeatureError::Failed(detail))
        });

        match outcome {
            Ok(()) => {
                tracing::debug!(feature = name, "feature initialized");
                self.report.succeeded.push(name);
            }
            Err(err) => {
                match &err {
                    FeatureError::Failed(detail) => {
                        tracing::error!(feature = name, %detail, "feature setup failed")
                    }
                    _ => tracing::warn!(feature = name, error = %err, "feature skipped"),
                }
                self.report.failed.push((name, err));
            }
        }
    }

    /// Finish and take the report.
    pub fn finish(self) -> InitReport {
        self.report
    }
}

#![forbid(unsafe_code)]

//! Error type for core document operations.

use core::fmt;

/// Errors surfaced by document lookups.
///
/// None of these are fatal to the page as a whole; callers are expected to
/// log and skip the feature that hit them. Mutations on stale ids are quiet
/// no-ops rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An expected element id was absent from the document.
    MissingElement(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "missing element: #{id}"),
        }
    }
}

impl std::error::Error for CoreError {}

#![forbid(unsafe_code)]

//! Theme preference.
//!
//! One durable key (`"theme"` → `"light" | "dark"`): read at startup,
//! written on every toggle. The current theme is published through an
//! `ArcSwap` so decorative layers can read a coherent snapshot from
//! wherever they run, without locking the page.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::store::{PreferenceStore, StoreError};

/// The persisted preference key.
pub const THEME_KEY: &str = "theme";

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values are `None` (treated as unset).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Owns the theme preference and its write-through store.
pub struct ThemeManager {
    store: Box<dyn PreferenceStore>,
    current: ArcSwap<Theme>,
}

impl ThemeManager {
    /// Load the stored preference; fall back to the host's color-scheme
    /// hint, then to light. Store read failures are logged and treated as
    /// unset.
    pub fn load(store: Box<dyn PreferenceStore>, system_hint: Option<Theme>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(raw) => raw.as_deref().and_then(Theme::parse),
            Err(err) => {
                tracing::warn!(%err, "could not read theme preference");
                None
            }
        };
        let theme = stored.or(system_hint).unwrap_or_default();
        Self {
            store,
            current: ArcSwap::from_pointee(theme),
        }
    }

    /// Current theme.
    pub fn current(&self) -> Theme {
        **self.current.load()
    }

    /// Snapshot handle for decorative layers.
    pub fn snapshot(&self) -> Arc<Theme> {
        self.current.load_full()
    }

    /// Flip the theme and write it through. A write failure keeps the new
    /// theme in effect for the session and is logged, matching the
    /// degrade-silently policy.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().inverted();
        self.current.store(Arc::new(next));
        if let Err(err) = self.store.set(THEME_KEY, next.as_str()) {
            tracing::warn!(%err, theme = next.as_str(), "could not persist theme");
        }
        next
    }
}

/// A store that always fails; exercises the degrade path in tests.
#[cfg(test)]
struct BrokenStore;

#[cfg(test)]
impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError("quota exceeded".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError("quota exceeded".into()))
    }
}

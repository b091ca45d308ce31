//! Locale registry.
//!
//! Hands out one shared [`LocaleHandle`] per distinct [`Locale`] value. The
//! registry is an ordinary value: callers that want to share handles across
//! generators pass the same `Arc<LocaleRegistry>` around.

use crate::locale::Locale;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to a registered locale.
pub type LocaleHandle = Arc<Locale>;

/// Cache mapping locale values to their shared handles.
///
/// Lookups and first-time insertions happen under a single lock, so two
/// threads registering the same locale concurrently still observe one handle.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    entries: Mutex<HashMap<Locale, LocaleHandle>>,
}

impl LocaleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the handle for `locale`, registering it on first observation.
    pub fn get(&self, locale: Locale) -> LocaleHandle {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(locale)
            .or_insert_with(|| Arc::new(locale))
            .clone()
    }

    /// Whether a handle exists for `locale`.
    pub fn contains(&self, locale: &Locale) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(locale)
    }

    /// Number of registered locales.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Insertion-ordered window registry.
//!
//! The single source of truth for which windows exist. Entries are kept in
//! creation order; lookups are a linear scan and the *first* match wins, so
//! duplicate keys shadow later entries. All access happens on one thread.

use tracing::debug;

use crate::content::ContentKind;
use crate::toolkit::{ContentSurface, ToolkitWindow};

/// One open top-level window.
pub struct WindowEntry {
    key: String,
    content: ContentKind,
    /// Exclusively owned native window; destroyed when the entry is removed.
    pub(crate) window: Box<dyn ToolkitWindow>,
    pub(crate) surface: Box<dyn ContentSurface>,
}

impl WindowEntry {
    pub fn new(
        key: impl Into<String>,
        content: ContentKind,
        window: Box<dyn ToolkitWindow>,
        surface: Box<dyn ContentSurface>,
    ) -> Self {
        Self {
            key: key.into(),
            content,
            window,
            surface,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn content(&self) -> &ContentKind {
        &self.content
    }
}

/// Ordered collection of open windows.
#[derive(Default)]
pub struct WindowRegistry {
    entries: Vec<WindowEntry>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate keys are not rejected: the new entry is
    /// appended, but lookups keep resolving to the first match.
    pub fn insert(&mut self, entry: WindowEntry) {
        debug!(key = %entry.key, count = self.entries.len() + 1, "window registered");
        self.entries.push(entry);
    }

    /// First entry matching `key`, in insertion order.
    pub fn find(&self, key: &str) -> Option<&WindowEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut WindowEntry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Position of the first match in insertion order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Remove and return the first entry matching `key`.
    pub fn remove(&mut self, key: &str) -> Option<WindowEntry> {
        let index = self.position(key)?;
        let entry = self.entries.remove(index);
        debug!(key = %entry.key, count = self.entries.len(), "window deregistered");
        Some(entry)
    }

    /// Key of the most recently appended entry.
    pub fn last_key(&self) -> Option<&str> {
        self.entries.last().map(|e| e.key.as_str())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered keys, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }
}

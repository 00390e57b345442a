//! Core row types.

use std::fmt;
use std::sync::Arc;

/// A stable row identifier.
///
/// Ids are issued by [`IdCounter`](crate::IdCounter) and are never reused, so
/// they remain valid reconciliation keys for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntryId(u64);

impl EntryId {
    /// Creates a new entry ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw entry ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<EntryId> for u64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single row: its identity and display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    pub id: EntryId,
    pub label: String,
}

impl Entry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(id: EntryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Returns a new entry with the same id and `suffix` appended to the label.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut label = String::with_capacity(self.label.len() + suffix.len());
        label.push_str(&self.label);
        label.push_str(suffix);
        Self { id: self.id, label }
    }
}

/// A shared handle to an immutable [`Entry`].
///
/// Row identity (`Arc::ptr_eq`) is what `Remove` matches on: two rows with
/// equal id and label are still different rows if they were built separately.
pub type Row = Arc<Entry>;

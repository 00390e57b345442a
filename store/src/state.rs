//! Immutable store snapshots.

use std::sync::Arc;

use crate::{EntryId, Row};

/// The complete row collection plus the current selection.
///
/// A `State` is never mutated once built. Transitions produce a new value and
/// share the row slice whenever it did not change, so `Select` on 10,000 rows
/// costs one reference count bump.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct State {
    data: Arc<[Row]>,
    selected: Option<EntryId>,
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}

impl State {
    /// The canonical empty state: no rows, nothing selected.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            data: Arc::from(Vec::new()),
            selected: None,
        }
    }

    /// Creates a state from its parts.
    #[must_use]
    pub fn new(data: Vec<Row>, selected: Option<EntryId>) -> Self {
        Self {
            data: data.into(),
            selected,
        }
    }

    /// Rows in display order.
    #[must_use]
    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Selected id, if any. May name a row that has since been removed.
    #[must_use]
    pub const fn selected(&self) -> Option<EntryId> {
        self.selected
    }

    /// Selected id in raw form, `0` meaning no selection.
    #[must_use]
    pub fn selected_raw(&self) -> u64 {
        self.selected.map_or(0, EntryId::raw)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` for the canonical empty state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.data.is_empty() && self.selected.is_none()
    }

    /// Row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.data.get(index)
    }

    /// Position of `row` by identity, not by value.
    #[must_use]
    pub fn position_of(&self, row: &Row) -> Option<usize> {
        self.data.iter().position(|candidate| Arc::ptr_eq(candidate, row))
    }

    /// Returns `true` if `id` is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: EntryId) -> bool {
        self.selected == Some(id)
    }

    /// Returns `true` if both states hold the very same row slice.
    #[must_use]
    pub fn shares_data_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Copy of this state with `data` replaced and the selection kept.
    #[must_use]
    pub fn with_data(&self, data: Vec<Row>) -> Self {
        Self {
            data: data.into(),
            selected: self.selected,
        }
    }

    /// Copy of this state with the selection replaced and the rows shared.
    #[must_use]
    pub fn with_selected(&self, selected: Option<EntryId>) -> Self {
        Self {
            data: Arc::clone(&self.data),
            selected,
        }
    }
}

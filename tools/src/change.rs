//! Keyed comparison of two states.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use store::{EntryId, State};

/// What a keyed renderer has to do to go from one state to the next.
///
/// Rows are matched by id, the same key renderers use for reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RowChange {
    /// Ids present only in the new state.
    pub created: usize,
    /// Ids present only in the old state.
    pub removed: usize,
    /// Ids in both states whose label differs.
    pub relabelled: usize,
    /// Ids in both states that a minimal reorder has to move.
    pub moved: usize,
    /// Ids in both states backed by the very same row.
    pub shared: usize,
    pub selection_changed: bool,
}

impl RowChange {
    /// Compares `old` and `new` by row id.
    #[must_use]
    pub fn between(old: &State, new: &State) -> Self {
        let positions: HashMap<EntryId, usize> = old
            .data()
            .iter()
            .enumerate()
            .map(|(idx, row)| (row.id, idx))
            .collect();

        let mut change = Self {
            selection_changed: old.selected() != new.selected(),
            ..Self::default()
        };
        let mut old_order = Vec::with_capacity(new.len().min(old.len()));
        for row in new.data() {
            let Some(&old_idx) = positions.get(&row.id) else {
                change.created += 1;
                continue;
            };
            let previous = &old.data()[old_idx];
            if Arc::ptr_eq(previous, row) {
                change.shared += 1;
            } else if previous.label != row.label {
                change.relabelled += 1;
            }
            old_order.push(old_idx);
        }
        change.removed = old.len() - old_order.len();
        change.moved = old_order.len() - longest_increasing_run(&old_order);
        change
    }

    /// Returns `true` if a renderer has nothing to do.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.created == 0
            && self.removed == 0
            && self.relabelled == 0
            && self.moved == 0
            && !self.selection_changed
    }
}

/// Length of the longest strictly increasing subsequence.
fn longest_increasing_run(values: &[usize]) -> usize {
    let mut tails: Vec<usize> = Vec::new();
    for &value in values {
        let pos = tails.partition_point(|&tail| tail < value);
        if pos == tails.len() {
            tails.push(value);
        } else {
            tails[pos] = value;
        }
    }
    tails.len()
}

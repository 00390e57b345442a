//! Human- and machine-readable state dumps.

use std::fmt::Write as _;

use serde::Serialize;
use store::{Row, State};

/// JSON shape of a state: `selected` uses the raw form, 0 for none.
#[derive(Debug, Serialize)]
pub struct StateDump<'a> {
    pub rows: usize,
    pub selected: u64,
    pub data: &'a [Row],
}

impl<'a> StateDump<'a> {
    #[must_use]
    pub fn new(state: &'a State) -> Self {
        Self {
            rows: state.len(),
            selected: state.selected_raw(),
            data: state.data(),
        }
    }
}

/// Renders up to `limit` rows as a table, marking the selected one with `*`.
#[must_use]
pub fn format_state_pretty(state: &State, limit: usize) -> String {
    let mut out = String::new();
    let selected = state
        .selected()
        .map_or_else(|| "none".to_string(), |id| id.to_string());
    let _ = writeln!(out, "rows: {} selected: {selected}", state.len());
    if let Some(id) = state.selected() {
        if !state.data().iter().any(|row| row.id == id) {
            let _ = writeln!(out, "  (selected id {id} is not in the table)");
        }
    }
    for row in state.data().iter().take(limit) {
        let marker = if state.is_selected(row.id) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:>7}  {}", row.id, row.label);
    }
    if state.len() > limit {
        let _ = writeln!(out, "  ... {} more", state.len() - limit);
    }
    out
}

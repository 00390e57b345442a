//! The transition function.
//!
//! Every transition is a shallow merge: only the field an action names is
//! replaced, the other one is carried over from the previous state. Rows that
//! an action does not touch are shared, not copied, so a renderer can skip
//! them by pointer comparison.

use std::sync::Arc;

use crate::labels::UPDATE_SUFFIX;
use crate::{Action, LabelGenerator, RandomSource, Row, State, StoreError, StoreLimits, StoreResult};

/// Applies `action` to `state` with the standard batch sizes.
pub fn apply<R: RandomSource>(
    state: &State,
    action: &Action,
    rows: &mut LabelGenerator<'_, R>,
) -> State {
    apply_with_limits(state, action, rows, &StoreLimits::default())
}

/// Applies `action` to `state` using `limits` for batch sizes and positions.
pub fn apply_with_limits<R: RandomSource>(
    state: &State,
    action: &Action,
    rows: &mut LabelGenerator<'_, R>,
    limits: &StoreLimits,
) -> State {
    match action {
        Action::Run => state.with_data(rows.build_data(limits.run_rows)),
        Action::RunLots => state.with_data(rows.build_data(limits.run_lots_rows)),
        Action::Add => {
            let mut data = Vec::with_capacity(state.len() + limits.add_rows);
            data.extend_from_slice(state.data());
            data.extend(rows.build_data(limits.add_rows));
            state.with_data(data)
        }
        Action::Update => state.with_data(update_every(state.data(), limits.update_stride)),
        Action::SwapRows => match try_swap(state.data(), limits.swap_a, limits.swap_b) {
            Ok(data) => state.with_data(data),
            Err(err) => {
                tracing::debug!(%err, "swap skipped");
                state.clone()
            }
        },
        Action::Select(row) => state.with_selected(Some(row.id)),
        Action::Remove(row) => match state.position_of(row) {
            Some(index) => {
                let mut data = state.data().to_vec();
                data.remove(index);
                state.with_data(data)
            }
            None => {
                tracing::debug!(id = %row.id, "remove skipped, row not present");
                state.clone()
            }
        },
        Action::Clear => State::initial(),
    }
}

/// Parses `tag` and applies the resulting action.
///
/// Unknown tags are returned as [`StoreError::UnknownAction`] and leave the
/// caller's state untouched.
pub fn dispatch_tag<R: RandomSource>(
    state: &State,
    tag: &str,
    row: Option<Row>,
    rows: &mut LabelGenerator<'_, R>,
) -> StoreResult<State> {
    let action = Action::from_tag(tag, row)?;
    Ok(apply(state, &action, rows))
}

/// Copies `data` with rows `a` and `b` exchanged.
///
/// Fails with [`StoreError::OutOfRangeOperation`] when either index is past
/// the end.
pub fn try_swap(data: &[Row], a: usize, b: usize) -> StoreResult<Vec<Row>> {
    let needed = a.max(b);
    if needed >= data.len() {
        return Err(StoreError::OutOfRangeOperation {
            index: needed,
            len: data.len(),
        });
    }
    let mut swapped = data.to_vec();
    swapped.swap(a, b);
    Ok(swapped)
}

/// Copies `data`, suffixing the label of every row whose index is a multiple
/// of `stride`. A zero stride is treated as 1.
pub fn update_every(data: &[Row], stride: usize) -> Vec<Row> {
    let mut updated = data.to_vec();
    for row in updated.iter_mut().step_by(stride.max(1)) {
        *row = Arc::new(row.with_suffix(UPDATE_SUFFIX));
    }
    updated
}

/// A current state together with the generator that feeds it.
///
/// This is the shape a host event loop holds on to: it dispatches actions and
/// hands [`RowStore::state`] to the renderer after each one.
#[derive(Debug)]
pub struct RowStore<'a, R> {
    state: State,
    rows: LabelGenerator<'a, R>,
    limits: StoreLimits,
}

impl<'a, R: RandomSource> RowStore<'a, R> {
    /// Creates a store in the initial state with the standard batch sizes.
    pub fn new(rows: LabelGenerator<'a, R>) -> Self {
        Self::with_limits(rows, StoreLimits::default())
    }

    pub fn with_limits(rows: LabelGenerator<'a, R>, limits: StoreLimits) -> Self {
        Self {
            state: State::initial(),
            rows,
            limits,
        }
    }

    /// Current state.
    pub const fn state(&self) -> &State {
        &self.state
    }

    pub const fn limits(&self) -> &StoreLimits {
        &self.limits
    }

    /// Applies `action` and returns the new state.
    pub fn dispatch(&mut self, action: &Action) -> &State {
        tracing::trace!(action = %action.kind(), rows = self.state.len(), "dispatch");
        self.state = apply_with_limits(&self.state, action, &mut self.rows, &self.limits);
        &self.state
    }

    /// Parses `tag` and dispatches it. On error the state is unchanged.
    pub fn dispatch_tag(&mut self, tag: &str, row: Option<Row>) -> StoreResult<&State> {
        let action = Action::from_tag(tag, row)?;
        Ok(self.dispatch(&action))
    }
}

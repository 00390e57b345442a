//! Script replay.

use store::{
    apply_with_limits, LabelGenerator, RandomSource, Script, State, Step, StoreLimits, StoreResult,
};

use crate::RowChange;

/// One replayed step and what it did.
#[derive(Debug, Clone)]
pub struct ReplayStep {
    pub step: Step,
    pub state: State,
    pub change: RowChange,
}

/// Runs `script` from the initial state, keeping every intermediate state.
///
/// Stops at the first step that cannot be resolved (for example an index past
/// the end of the table) and returns that error.
pub fn replay<R: RandomSource>(
    script: &Script,
    rows: &mut LabelGenerator<'_, R>,
    limits: &StoreLimits,
) -> StoreResult<Vec<ReplayStep>> {
    let mut state = State::initial();
    let mut out = Vec::with_capacity(script.len());
    for step in script.steps() {
        let action = step.resolve(&state)?;
        let next = apply_with_limits(&state, &action, rows, limits);
        tracing::debug!(%step, rows = next.len(), "replayed");
        out.push(ReplayStep {
            step: *step,
            change: RowChange::between(&state, &next),
            state: next.clone(),
        });
        state = next;
    }
    Ok(out)
}

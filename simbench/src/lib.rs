//! Scripted benchmark harness for the rowbench row store.
//!
//! This crate provides:
//!
//! - A timed script runner that records every transition
//! - Per-action timing statistics with JSON output
//! - Budget checks suitable for CI regression tracking
//!
//! # Design Principles
//!
//! - **Reproducible** - Labels and ids are deterministic given a seed.
//! - **Comparable** - The standard script matches the reference benchmark actions.
//! - **Cheap to gate on** - `summary.json` plus budget flags for CI.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use serde::Serialize;
use store::{
    apply_with_limits, ActionKind, LabelGenerator, RandomSource, Script, State, StoreLimits,
    StoreResult,
};
use tools::RowChange;

/// One timed transition.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub kind: ActionKind,
    /// Row count after the step.
    pub rows: usize,
    pub change: RowChange,
    pub elapsed: Duration,
}

/// Runs `script` starting from `state` and times each transition.
///
/// Only the call to the transition function is timed; resolving row indices
/// and computing the keyed change are not.
pub fn run_script<R: RandomSource>(
    script: &Script,
    state: State,
    rows: &mut LabelGenerator<'_, R>,
    limits: &StoreLimits,
) -> StoreResult<(State, Vec<StepReport>)> {
    let mut state = state;
    let mut reports = Vec::with_capacity(script.len());
    for step in script.steps() {
        let action = step.resolve(&state)?;
        let start = Instant::now();
        let next = apply_with_limits(&state, &action, rows, limits);
        let elapsed = start.elapsed();
        tracing::trace!(%step, rows = next.len(), elapsed_us = elapsed.as_micros() as u64, "step");
        reports.push(StepReport {
            kind: step.kind,
            rows: next.len(),
            change: RowChange::between(&state, &next),
            elapsed,
        });
        state = next;
    }
    Ok((state, reports))
}

/// Timing statistics for one action kind.
#[derive(Debug, Default, Serialize)]
pub struct ActionStats {
    pub count: u64,
    pub avg_us: u64,
    pub p95_us: u64,
    pub max_us: u64,
    #[serde(skip)]
    samples_us: Vec<u64>,
}

/// Benchmark run summary, written as `summary.json`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub iterations: u32,
    pub script: String,
    pub steps_total: u64,
    pub rows_created_total: u64,
    pub rows_moved_total: u64,
    pub final_rows: usize,
    pub actions: BTreeMap<ActionKind, ActionStats>,
}

impl Summary {
    #[must_use]
    pub fn new(seed: u64, iterations: u32, script: &Script) -> Self {
        Self {
            seed,
            iterations,
            script: script.to_string(),
            steps_total: 0,
            rows_created_total: 0,
            rows_moved_total: 0,
            final_rows: 0,
            actions: BTreeMap::new(),
        }
    }

    /// Records one iteration's step reports.
    pub fn push(&mut self, reports: &[StepReport]) {
        for report in reports {
            self.steps_total += 1;
            self.rows_created_total += report.change.created as u64;
            self.rows_moved_total += report.change.moved as u64;
            self.final_rows = report.rows;
            let micros = u64::try_from(report.elapsed.as_micros()).unwrap_or(u64::MAX);
            self.actions
                .entry(report.kind)
                .or_default()
                .samples_us
                .push(micros);
        }
    }

    pub fn finalize(&mut self) {
        for stats in self.actions.values_mut() {
            stats.count = stats.samples_us.len() as u64;
            if stats.samples_us.is_empty() {
                continue;
            }
            let total: u64 = stats.samples_us.iter().sum();
            stats.avg_us = total / stats.count;
            stats.p95_us = p95(&mut stats.samples_us);
            stats.max_us = stats.samples_us.iter().copied().max().unwrap_or(0);
        }
    }

    /// Fails if any action's p95 or average exceeds its budget.
    pub fn assert_budgets(&self, max_p95_us: Option<u64>, max_avg_us: Option<u64>) -> Result<()> {
        for (kind, stats) in &self.actions {
            if let Some(max_p95) = max_p95_us {
                if stats.p95_us > max_p95 {
                    anyhow::bail!(
                        "{kind}: p95 {}us exceeds budget {}us",
                        stats.p95_us,
                        max_p95
                    );
                }
            }
            if let Some(max_avg) = max_avg_us {
                if stats.avg_us > max_avg {
                    anyhow::bail!(
                        "{kind}: avg {}us exceeds budget {}us",
                        stats.avg_us,
                        max_avg
                    );
                }
            }
        }
        Ok(())
    }
}

fn p95(values: &mut [u64]) -> u64 {
    values.sort_unstable();
    let idx = ((values.len() as f64) * 0.95).ceil() as usize;
    let idx = idx.saturating_sub(1).min(values.len() - 1);
    values[idx]
}

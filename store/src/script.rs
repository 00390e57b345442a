//! Textual action scripts.
//!
//! A script is a comma-separated list of steps. Each step is an action tag;
//! `select` and `remove` also take the index of a row in the state the step
//! runs against, e.g. `run,select:5,remove:5,update,swaprows,clear`.

use std::fmt;
use std::str::FromStr;

use crate::{Action, ActionKind, State, StoreError, StoreResult};

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: ActionKind,
    /// Row index for `select`/`remove`.
    pub index: Option<usize>,
}

impl Step {
    /// Step without a row index.
    #[must_use]
    pub const fn bare(kind: ActionKind) -> Self {
        Self { kind, index: None }
    }

    /// Step addressing the row at `index`.
    #[must_use]
    pub const fn at(kind: ActionKind, index: usize) -> Self {
        Self {
            kind,
            index: Some(index),
        }
    }

    /// Resolves the row index against `state` and builds the action.
    pub fn resolve(&self, state: &State) -> StoreResult<Action> {
        let row = match self.index {
            Some(index) => Some(state.row(index).cloned().ok_or(
                StoreError::RowIndexOutOfRange {
                    index,
                    len: state.len(),
                },
            )?),
            None => None,
        };
        Action::from_kind(self.kind, row)
    }
}

impl FromStr for Step {
    type Err = StoreError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || StoreError::InvalidStep {
            step: text.to_string(),
        };
        let (tag, index) = match text.split_once(':') {
            Some((tag, index)) => (tag, Some(index.parse::<usize>().map_err(|_| invalid())?)),
            None => (text, None),
        };
        let kind: ActionKind = tag.parse()?;
        match (kind.needs_row(), index) {
            (true, None) => Err(StoreError::MissingEntry { kind }),
            (false, Some(_)) => Err(invalid()),
            _ => Ok(Self { kind, index }),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}:{index}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The canonical benchmark sequence.
    ///
    /// Covers every transition once from a populated state and ends empty, so
    /// it can be repeated back to back.
    #[must_use]
    pub fn standard() -> Self {
        use ActionKind::{Add, Clear, Remove, Run, RunLots, Select, SwapRows, Update};
        Self::new(vec![
            Step::bare(Run),
            Step::bare(Update),
            Step::bare(SwapRows),
            Step::at(Select, 1),
            Step::at(Remove, 1),
            Step::bare(Clear),
            Step::bare(RunLots),
            Step::bare(Clear),
            Step::bare(Run),
            Step::bare(Add),
            Step::bare(Clear),
        ])
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for Script {
    type Err = StoreError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let steps = text
            .split(',')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(str::parse)
            .collect::<StoreResult<Vec<Step>>>()?;
        Ok(Self { steps })
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

//! Row-store state core for the rowbench list reconciliation benchmark.
//!
//! A renderer under test shows a table of labeled rows and mutates it through
//! a fixed set of actions. This crate owns everything about those rows that
//! must be identical across renderers:
//!
//! - Row ids from a process-wide, never-reset counter
//! - Labels drawn from fixed word lists through an injectable random source
//! - The transition function `apply(state, action) -> state`
//! - Textual action tags and scripts for drivers and tools
//!
//! # Design Principles
//!
//! - **Pure transitions** - No I/O, inputs are never mutated.
//! - **Stable keys** - Ids are unique and never reused, even after `Clear`.
//! - **Reproducible** - Same seed, same labels.

mod action;
mod error;
mod ids;
pub mod labels;
mod limits;
mod reducer;
mod rng;
mod script;
mod state;
mod types;

pub use action::{Action, ActionKind, Button, BUTTONS};
pub use error::{StoreError, StoreResult};
pub use ids::IdCounter;
pub use labels::LabelGenerator;
pub use limits::StoreLimits;
pub use reducer::{apply, apply_with_limits, dispatch_tag, try_swap, update_every, RowStore};
pub use rng::{Lcg, RandomSource, SequenceSource};
pub use script::{Script, Step};
pub use state::State;
pub use types::{Entry, EntryId, Row};

//! Replay and inspection tools for the rowbench row store.
//!
//! This crate provides utilities for understanding what a script does to the
//! row table:
//!
//! - Replay a script and keep every intermediate state
//! - Explain each step as a keyed change (created, removed, relabelled, moved)
//! - Print a state as JSON or as a table
//!
//! # Design Principles
//!
//! - **Same rows as the harness** - Replays use the store's own transitions.
//! - **Human-readable output** - Make it easy to see what a renderer is asked to do.

mod change;
mod replay;
mod report;

pub use change::RowChange;
pub use replay::{replay, ReplayStep};
pub use report::{format_state_pretty, StateDump};

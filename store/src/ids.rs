//! Row id issuance.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::EntryId;

static GLOBAL: IdCounter = IdCounter::new();

/// Monotonic source of [`EntryId`]s.
///
/// The process-wide instance returned by [`IdCounter::global`] starts at 1 when
/// the process starts and is never reset, not even by `Clear`. Tests and
/// embedders that need isolated numbering construct their own counter.
///
/// Id 0 is never issued: it is the raw "no selection" value.
#[derive(Debug)]
pub struct IdCounter {
    next: AtomicU64,
}

impl IdCounter {
    /// Creates a counter whose first issued id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a counter whose first issued id is `first`, or 1 when `first`
    /// is 0.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        let first = if first == 0 { 1 } else { first };
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the process-wide counter.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Issues the next id.
    ///
    /// # Panics
    ///
    /// Panics once `u64::MAX` has been issued. Wrapping would hand out ids that
    /// are still in use as reconciliation keys.
    pub fn next_id(&self) -> EntryId {
        match self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                next.checked_add(1)
            }) {
            Ok(issued) => EntryId::new(issued),
            Err(_) => panic!("row id space exhausted"),
        }
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) will issue.
    #[must_use]
    pub fn peek(&self) -> EntryId {
        EntryId::new(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

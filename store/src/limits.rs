//! Batch sizes and positions used by the transitions.

/// Sizes and indices that parameterize the row transitions.
///
/// The default is the standard benchmark definition; other values exist for
/// tests and for exploring how a renderer scales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLimits {
    /// Rows built by `Run`.
    pub run_rows: usize,
    /// Rows built by `RunLots`.
    pub run_lots_rows: usize,
    /// Rows appended by `Add`.
    pub add_rows: usize,
    /// `Update` touches every row whose index is a multiple of this.
    pub update_stride: usize,
    /// First index exchanged by `SwapRows`.
    pub swap_a: usize,
    /// Second index exchanged by `SwapRows`.
    pub swap_b: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            run_rows: 1000,
            run_lots_rows: 10_000,
            add_rows: 1000,
            update_stride: 10,
            swap_a: 1,
            swap_b: 998,
        }
    }
}

impl StoreLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            run_rows: 20,
            run_lots_rows: 50,
            add_rows: 10,
            update_stride: 10,
            swap_a: 1,
            swap_b: 18,
        }
    }

    /// Smallest row count for which `SwapRows` is not a no-op.
    #[must_use]
    pub fn min_swap_rows(&self) -> usize {
        self.swap_a.max(self.swap_b) + 1
    }
}

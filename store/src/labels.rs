//! Synthetic row labels.
//!
//! Labels are `"<adjective> <color> <noun>"`, each word drawn independently
//! and with replacement from the fixed lists below. The lists are part of the
//! benchmark definition: every implementation renders the same vocabulary, so
//! text layout cost stays comparable across frameworks.

use std::sync::Arc;

use crate::{Entry, IdCounter, Lcg, RandomSource, Row};

pub const ADJECTIVES: [&str; 25] = [
    "pretty",
    "large",
    "big",
    "small",
    "tall",
    "short",
    "long",
    "handsome",
    "plain",
    "quaint",
    "clean",
    "elegant",
    "easy",
    "angry",
    "crazy",
    "helpful",
    "mushy",
    "odd",
    "unsightly",
    "adorable",
    "important",
    "inexpensive",
    "cheap",
    "expensive",
    "fancy",
];

// "brown" appears twice in the reference list.
pub const COLORS: [&str; 11] = [
    "red", "yellow", "blue", "green", "pink", "brown", "purple", "brown", "white", "black",
    "orange",
];

pub const NOUNS: [&str; 13] = [
    "table", "chair", "house", "bbq", "desk", "car", "pony", "cookie", "sandwich", "burger",
    "pizza", "mouse", "keyboard",
];

/// Suffix appended by the `Update` transition.
pub const UPDATE_SUFFIX: &str = " !!!";

/// Builds fresh rows: new ids from an [`IdCounter`], labels from a
/// [`RandomSource`].
#[derive(Debug)]
pub struct LabelGenerator<'a, R> {
    ids: &'a IdCounter,
    rng: R,
}

impl<'a, R: RandomSource> LabelGenerator<'a, R> {
    /// Creates a generator issuing ids from `ids`.
    pub const fn new(ids: &'a IdCounter, rng: R) -> Self {
        Self { ids, rng }
    }

    /// Returns the counter this generator issues ids from.
    #[must_use]
    pub const fn ids(&self) -> &'a IdCounter {
        self.ids
    }

    /// Draws one label. Does not touch the id counter.
    pub fn label(&mut self) -> String {
        let adjective = ADJECTIVES[self.rng.index(ADJECTIVES.len())];
        let color = COLORS[self.rng.index(COLORS.len())];
        let noun = NOUNS[self.rng.index(NOUNS.len())];
        let mut label = String::with_capacity(adjective.len() + color.len() + noun.len() + 2);
        label.push_str(adjective);
        label.push(' ');
        label.push_str(color);
        label.push(' ');
        label.push_str(noun);
        label
    }

    /// Builds `count` fresh rows with strictly increasing ids.
    ///
    /// Advances the counter by exactly `count`; `count == 0` yields an empty
    /// vector and leaves the counter alone.
    pub fn build_data(&mut self, count: usize) -> Vec<Row> {
        let mut data = Vec::with_capacity(count);
        for _ in 0..count {
            let id = self.ids.next_id();
            let label = self.label();
            data.push(Arc::new(Entry { id, label }));
        }
        data
    }
}

impl LabelGenerator<'static, Lcg> {
    /// Generator over the process-wide counter with a seeded [`Lcg`].
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(IdCounter::global(), Lcg::new(seed))
    }
}

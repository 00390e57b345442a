//! Actions: immutable descriptions of requested transitions.

use std::fmt;
use std::str::FromStr;

use crate::{Row, StoreError, StoreResult};

/// A requested state transition.
///
/// `Select` and `Remove` carry the row a renderer previously surfaced, not
/// just its id: `Remove` matches by row identity.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace all rows with 1,000 fresh ones.
    Run,
    /// Replace all rows with 10,000 fresh ones.
    RunLots,
    /// Append 1,000 fresh rows.
    Add,
    /// Suffix every 10th label with `" !!!"`.
    Update,
    /// Exchange rows 1 and 998.
    SwapRows,
    /// Highlight a row.
    Select(Row),
    /// Remove a row.
    ///
    /// The selection is left as is, even when it names the removed row. The
    /// reference application behaves the same way and benchmark drivers rely
    /// on it; renderers simply find no row to highlight.
    Remove(Row),
    /// Return to the initial state. Ids keep counting up.
    Clear,
}

impl Action {
    /// Returns the tag of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Run => ActionKind::Run,
            Self::RunLots => ActionKind::RunLots,
            Self::Add => ActionKind::Add,
            Self::Update => ActionKind::Update,
            Self::SwapRows => ActionKind::SwapRows,
            Self::Select(_) => ActionKind::Select,
            Self::Remove(_) => ActionKind::Remove,
            Self::Clear => ActionKind::Clear,
        }
    }

    /// Builds an action from its tag. `row` is required by `select` and
    /// `remove` and ignored by the rest.
    pub fn from_kind(kind: ActionKind, row: Option<Row>) -> StoreResult<Self> {
        let action = match kind {
            ActionKind::Run => Self::Run,
            ActionKind::RunLots => Self::RunLots,
            ActionKind::Add => Self::Add,
            ActionKind::Update => Self::Update,
            ActionKind::SwapRows => Self::SwapRows,
            ActionKind::Clear => Self::Clear,
            ActionKind::Select => Self::Select(row.ok_or(StoreError::MissingEntry { kind })?),
            ActionKind::Remove => Self::Remove(row.ok_or(StoreError::MissingEntry { kind })?),
        };
        Ok(action)
    }

    /// Parses a textual tag and builds the action.
    pub fn from_tag(tag: &str, row: Option<Row>) -> StoreResult<Self> {
        Self::from_kind(tag.parse()?, row)
    }

    /// Maps a toolbar button id to its action.
    pub fn from_button_id(id: &str) -> StoreResult<Self> {
        let button = BUTTONS
            .iter()
            .find(|button| button.id == id)
            .ok_or_else(|| StoreError::UnknownAction {
                tag: id.to_string(),
            })?;
        Self::from_kind(button.kind, None)
    }
}

/// Payload-free tag of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActionKind {
    Run,
    RunLots,
    Add,
    Update,
    SwapRows,
    Select,
    Remove,
    Clear,
}

impl ActionKind {
    /// Every tag, in toolbar order followed by the row actions.
    pub const ALL: [Self; 8] = [
        Self::Run,
        Self::RunLots,
        Self::Add,
        Self::Update,
        Self::Clear,
        Self::SwapRows,
        Self::Select,
        Self::Remove,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::RunLots => "runlots",
            Self::Add => "add",
            Self::Update => "update",
            Self::SwapRows => "swaprows",
            Self::Select => "select",
            Self::Remove => "remove",
            Self::Clear => "clear",
        }
    }

    /// Returns `true` if the action carries a row.
    #[must_use]
    pub const fn needs_row(self) -> bool {
        matches!(self, Self::Select | Self::Remove)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = StoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| StoreError::UnknownAction {
                tag: tag.to_string(),
            })
    }
}

/// A toolbar button of the benchmark page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// DOM id the benchmark driver clicks.
    pub id: &'static str,
    pub caption: &'static str,
    pub kind: ActionKind,
}

/// The benchmark toolbar, in display order.
pub const BUTTONS: [Button; 6] = [
    Button {
        id: "run",
        caption: "Create 1,000 rows",
        kind: ActionKind::Run,
    },
    Button {
        id: "runlots",
        caption: "Create 10,000 rows",
        kind: ActionKind::RunLots,
    },
    Button {
        id: "add",
        caption: "Append 1,000 rows",
        kind: ActionKind::Add,
    },
    Button {
        id: "update",
        caption: "Update every 10th row",
        kind: ActionKind::Update,
    },
    Button {
        id: "clear",
        caption: "Clear",
        kind: ActionKind::Clear,
    },
    Button {
        id: "swaprows",
        caption: "Swap Rows",
        kind: ActionKind::SwapRows,
    },
];

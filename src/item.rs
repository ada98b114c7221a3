//! Lendable item record, insertion draft, and lending state.

use std::fmt;

use crate::types::ItemId;

/// Per-item lending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LendState {
    /// On the shelf.
    Available,
    /// Held by exactly one member.
    Borrowed,
}

impl fmt::Display for LendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Borrowed => f.write_str("Borrowed"),
        }
    }
}

/// Insert payload used to create a new [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Item title.
    pub title: String,
    /// Item author.
    pub author: String,
    /// Unique catalog key.
    pub id: ItemId,
}

impl ItemDraft {
    /// Convenience constructor.
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: impl Into<ItemId>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            id: id.into(),
        }
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) id: ItemId,
    pub(crate) borrowed: bool,
}

impl Item {
    pub(crate) fn from_draft(draft: ItemDraft) -> Self {
        Self {
            title: draft.title,
            author: draft.author,
            id: draft.id,
            borrowed: false,
        }
    }

    /// Item title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Item author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Immutable catalog key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True while some member holds the item.
    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// Current state in the available/borrowed machine.
    pub fn state(&self) -> LendState {
        if self.borrowed {
            LendState::Borrowed
        } else {
            LendState::Available
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ID: {}, Status: {}",
            self.title,
            self.author,
            self.id,
            self.state()
        )
    }
}

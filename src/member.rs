//! Registered borrower record.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::{ItemId, MemberId};

/// Registry entry. `held_items` changes only through lending transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub(crate) id: MemberId,
    pub(crate) name: String,
    pub(crate) held_items: BTreeSet<ItemId>,
}

impl Member {
    pub(crate) fn new(id: MemberId, name: String) -> Self {
        Self {
            id,
            name,
            held_items: BTreeSet::new(),
        }
    }

    /// Assigned identifier.
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifiers of the items this member currently holds.
    pub fn held_items(&self) -> &BTreeSet<ItemId> {
        &self.held_items
    }

    /// True when `item_id` is in the held set.
    pub fn holds(&self, item_id: &str) -> bool {
        self.held_items.contains(item_id)
    }

    /// Number of items currently held.
    pub fn borrowed_count(&self) -> usize {
        self.held_items.len()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member ID: {}, Name: {}, Items Borrowed: {}",
            self.id,
            self.name,
            self.held_items.len()
        )
    }
}

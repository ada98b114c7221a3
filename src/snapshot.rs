//! Versioned on-disk schema for a full library snapshot.
//!
//! These records are written field by field in declaration order and are
//! deliberately separate from the in-memory domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, MemberId};

/// Version number for serialized [`SnapshotEnvelope`] payloads.
pub const SNAPSHOT_FORMAT_VERSION: u16 = 1;

/// One catalog entry as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item title.
    pub title: String,
    /// Item author.
    pub author: String,
    /// Unique catalog key.
    pub id: ItemId,
    /// Lending flag.
    pub borrowed: bool,
}

/// One registry entry as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Assigned identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Identifiers of held items, ascending.
    pub held_items: Vec<ItemId>,
}

/// Full aggregate state: items, members, then the member counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshotV1 {
    /// Items in insertion order.
    pub items: Vec<ItemRecord>,
    /// Members in insertion order.
    pub members: Vec<MemberRecord>,
    /// Next identifier the registry will assign.
    pub next_member_id: MemberId,
}

/// Versioned wrapper for stable on-disk payload decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    /// Payload format version.
    pub format_version: u16,
    /// Wrapped snapshot.
    pub snapshot: LibrarySnapshotV1,
}

impl SnapshotEnvelope {
    /// Constructs an envelope using [`SNAPSHOT_FORMAT_VERSION`].
    pub fn new(snapshot: LibrarySnapshotV1) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            snapshot,
        }
    }
}

/// A decoded snapshot that does not describe a consistent library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Counter below the first assignable identifier.
    CounterTooLow(MemberId),
    /// Item with an empty identifier.
    EmptyItemKey,
    /// Item identifier listed twice.
    DuplicateItem(ItemId),
    /// Member identifier listed twice.
    DuplicateMember(MemberId),
    /// Member identifier the counter has not reached yet.
    MemberAheadOfCounter {
        /// Offending member.
        member: MemberId,
        /// Stored counter.
        next_member_id: MemberId,
    },
    /// Member holds an item missing from the catalog.
    UnknownHeldItem {
        /// Holding member.
        member: MemberId,
        /// Missing item.
        item: ItemId,
    },
    /// Item held by more than one member.
    HeldTwice(ItemId),
    /// Borrowed flag disagrees with the held sets.
    BorrowedFlagMismatch(ItemId),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CounterTooLow(next) => write!(f, "member counter {next} is below the first id"),
            Self::EmptyItemKey => f.write_str("item with empty identifier"),
            Self::DuplicateItem(id) => write!(f, "duplicate item {id}"),
            Self::DuplicateMember(id) => write!(f, "duplicate member {id}"),
            Self::MemberAheadOfCounter {
                member,
                next_member_id,
            } => write!(f, "member {member} not below counter {next_member_id}"),
            Self::UnknownHeldItem { member, item } => {
                write!(f, "member {member} holds unknown item {item}")
            }
            Self::HeldTwice(id) => write!(f, "item {id} held by more than one member"),
            Self::BorrowedFlagMismatch(id) => {
                write!(f, "borrowed flag of item {id} disagrees with holders")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

//! Shared primitive identifiers.

/// Unique catalog key for an item (e.g. an ISBN).
pub type ItemId = String;
/// Sequentially assigned member identifier.
pub type MemberId = u32;

/// First identifier handed out by a fresh registry.
pub const FIRST_MEMBER_ID: MemberId = 1001;

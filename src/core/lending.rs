use std::fmt;

use crate::{
    core::{catalog::Catalog, registry::Registry},
    types::{ItemId, MemberId},
};

/// Rejected borrow or return. Nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendingError {
    /// No item with this identifier.
    ItemNotFound(ItemId),
    /// No member with this identifier.
    MemberNotFound(MemberId),
    /// The item is already out.
    AlreadyBorrowed(ItemId),
    /// The item is available, or it is out with a different member.
    NotHeldByMember {
        /// Item being returned.
        item: ItemId,
        /// Member attempting the return.
        member: MemberId,
    },
}

impl fmt::Display for LendingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "item {id} not found"),
            Self::MemberNotFound(id) => write!(f, "member {id} not found"),
            Self::AlreadyBorrowed(id) => write!(f, "item {id} is already borrowed"),
            Self::NotHeldByMember { item, member } => write!(
                f,
                "item {item} was not checked out by member {member} or is already available"
            ),
        }
    }
}

impl std::error::Error for LendingError {}

/// Moves `item_id` from available to borrowed by `member_id`.
///
/// Checks run item, member, state; both sides change together.
pub(crate) fn borrow(
    catalog: &mut Catalog,
    registry: &mut Registry,
    item_id: &str,
    member_id: MemberId,
) -> Result<(), LendingError> {
    let item = catalog
        .get_mut(item_id)
        .ok_or_else(|| LendingError::ItemNotFound(item_id.to_string()))?;
    let member = registry
        .get_mut(member_id)
        .ok_or(LendingError::MemberNotFound(member_id))?;

    if item.borrowed {
        return Err(LendingError::AlreadyBorrowed(item.id.clone()));
    }

    item.borrowed = true;
    member.held_items.insert(item.id.clone());
    tracing::debug!(item = %item.id, member = member_id, "item borrowed");
    Ok(())
}

/// Moves `item_id` back to available, provided `member_id` holds it.
pub(crate) fn return_item(
    catalog: &mut Catalog,
    registry: &mut Registry,
    item_id: &str,
    member_id: MemberId,
) -> Result<(), LendingError> {
    let item = catalog
        .get_mut(item_id)
        .ok_or_else(|| LendingError::ItemNotFound(item_id.to_string()))?;
    let member = registry
        .get_mut(member_id)
        .ok_or(LendingError::MemberNotFound(member_id))?;

    if !item.borrowed || !member.held_items.contains(item_id) {
        return Err(LendingError::NotHeldByMember {
            item: item.id.clone(),
            member: member_id,
        });
    }

    item.borrowed = false;
    member.held_items.remove(item_id);
    tracing::debug!(item = %item.id, member = member_id, "item returned");
    Ok(())
}

/// Member currently holding `item_id`, if any.
pub(crate) fn holder_of(registry: &Registry, item_id: &str) -> Option<MemberId> {
    registry.all().find(|m| m.holds(item_id)).map(|m| m.id)
}

use hashbrown::{HashMap, HashSet};

use crate::{
    core::{
        catalog::{Catalog, CatalogError},
        lending::{self, LendingError},
        registry::{Registry, RegistryError},
    },
    item::{Item, ItemDraft},
    member::Member,
    snapshot::{ItemRecord, LibrarySnapshotV1, MemberRecord, SnapshotError},
    types::{FIRST_MEMBER_ID, ItemId, MemberId},
};

/// Whole lending state: catalog, registry, and member counter.
///
/// Every public mutation leaves the cross-entity invariants intact: an item
/// is flagged borrowed exactly when one member's held set names it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    catalog: Catalog,
    registry: Registry,
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an available item, rejecting duplicate identifiers.
    pub fn add_item(&mut self, draft: ItemDraft) -> Result<(), CatalogError> {
        self.catalog.add(draft)
    }

    /// Registers a member and returns the assigned identifier.
    pub fn add_member(&mut self, name: impl Into<String>) -> Result<MemberId, RegistryError> {
        self.registry.add(name)
    }

    /// Looks up an item.
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.catalog.find(id)
    }

    /// Looks up a member.
    pub fn find_member(&self, id: MemberId) -> Option<&Member> {
        self.registry.find(id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> + Clone {
        self.catalog.all()
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> + Clone {
        self.registry.all()
    }

    /// Read-only catalog view.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only registry view.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Identifier the next [`Library::add_member`] will assign.
    pub fn next_member_id(&self) -> MemberId {
        self.registry.next_member_id()
    }

    /// True when neither items nor members exist.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty() && self.registry.is_empty()
    }

    /// Lends `item_id` to `member_id`.
    pub fn borrow(&mut self, item_id: &str, member_id: MemberId) -> Result<(), LendingError> {
        lending::borrow(&mut self.catalog, &mut self.registry, item_id, member_id)
    }

    /// Takes `item_id` back from `member_id`.
    pub fn return_item(&mut self, item_id: &str, member_id: MemberId) -> Result<(), LendingError> {
        lending::return_item(&mut self.catalog, &mut self.registry, item_id, member_id)
    }

    /// Member currently holding `item_id`.
    pub fn held_by(&self, item_id: &str) -> Option<MemberId> {
        lending::holder_of(&self.registry, item_id)
    }

    /// Captures the full state in insertion order.
    pub fn export_snapshot(&self) -> LibrarySnapshotV1 {
        let items = self
            .catalog
            .all()
            .map(|item| ItemRecord {
                title: item.title.clone(),
                author: item.author.clone(),
                id: item.id.clone(),
                borrowed: item.borrowed,
            })
            .collect();
        let members = self
            .registry
            .all()
            .map(|member| MemberRecord {
                id: member.id,
                name: member.name.clone(),
                held_items: member.held_items.iter().cloned().collect(),
            })
            .collect();

        LibrarySnapshotV1 {
            items,
            members,
            next_member_id: self.registry.next_member_id(),
        }
    }

    /// Rebuilds a library, rejecting snapshots that break its invariants.
    pub fn from_snapshot(snapshot: LibrarySnapshotV1) -> Result<Self, SnapshotError> {
        let next_member_id = snapshot.next_member_id;
        if next_member_id < FIRST_MEMBER_ID {
            return Err(SnapshotError::CounterTooLow(next_member_id));
        }

        let mut catalog = Catalog::new();
        for rec in snapshot.items {
            let item = Item {
                title: rec.title,
                author: rec.author,
                id: rec.id,
                borrowed: rec.borrowed,
            };
            catalog.insert(item).map_err(|err| match err {
                CatalogError::DuplicateKey(id) => SnapshotError::DuplicateItem(id),
                CatalogError::EmptyKey => SnapshotError::EmptyItemKey,
            })?;
        }

        let mut holders: HashMap<ItemId, MemberId> = HashMap::new();
        let mut seen = HashSet::new();
        let mut members = Vec::with_capacity(snapshot.members.len());
        for rec in snapshot.members {
            if rec.id >= next_member_id {
                return Err(SnapshotError::MemberAheadOfCounter {
                    member: rec.id,
                    next_member_id,
                });
            }
            if !seen.insert(rec.id) {
                return Err(SnapshotError::DuplicateMember(rec.id));
            }

            let mut member = Member::new(rec.id, rec.name);
            for item_id in rec.held_items {
                let Some(item) = catalog.find(&item_id) else {
                    return Err(SnapshotError::UnknownHeldItem {
                        member: rec.id,
                        item: item_id,
                    });
                };
                if !item.borrowed {
                    return Err(SnapshotError::BorrowedFlagMismatch(item_id));
                }
                if holders.insert(item_id.clone(), rec.id).is_some() {
                    return Err(SnapshotError::HeldTwice(item_id));
                }
                member.held_items.insert(item_id);
            }
            members.push(member);
        }

        if let Some(orphan) = catalog
            .all()
            .find(|item| item.borrowed && !holders.contains_key(&item.id))
        {
            return Err(SnapshotError::BorrowedFlagMismatch(orphan.id.clone()));
        }

        Ok(Self {
            catalog,
            registry: Registry::restore(members, next_member_id),
        })
    }
}

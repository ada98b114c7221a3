use std::fmt;

use hashbrown::HashMap;

use crate::{
    item::{Item, ItemDraft},
    types::ItemId,
};

/// Rejected catalog insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An item with this identifier already exists.
    DuplicateKey(ItemId),
    /// The draft carried an empty identifier.
    EmptyKey,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(id) => write!(f, "item with identifier {id} already exists"),
            Self::EmptyKey => f.write_str("item identifier must not be empty"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Items keyed by identifier, listed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: HashMap<ItemId, Item>,
    order: Vec<ItemId>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new available item. The catalog is unchanged on error.
    pub fn add(&mut self, draft: ItemDraft) -> Result<(), CatalogError> {
        self.insert(Item::from_draft(draft))
    }

    /// Looks up an item by identifier.
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Items in insertion order. The iterator can be cloned to restart.
    pub fn all(&self) -> impl Iterator<Item = &Item> + Clone {
        self.order.iter().filter_map(move |id| self.items.get(id))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no items have been added.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn insert(&mut self, item: Item) -> Result<(), CatalogError> {
        if item.id.is_empty() {
            return Err(CatalogError::EmptyKey);
        }
        if self.items.contains_key(&item.id) {
            return Err(CatalogError::DuplicateKey(item.id));
        }
        self.order.push(item.id.clone());
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.get_mut(id)
    }
}

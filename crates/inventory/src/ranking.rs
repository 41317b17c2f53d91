//! Per-category ranking index.

use core::cmp::Reverse;
use std::collections::BTreeSet;

use stockroom_core::{Entity, ItemId};

use crate::item::Item;

/// Sort key shared by category rankings and top-k selection.
///
/// Orders by descending quantity, then ascending id, so the "smallest" key is the
/// best-ranked item and ties resolve the same way everywhere.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankKey {
    quantity: Reverse<u64>,
    id: ItemId,
}

impl RankKey {
    pub fn new(id: ItemId, quantity: u64) -> Self {
        Self {
            quantity: Reverse(quantity),
            id,
        }
    }

    pub fn of(item: &Item) -> Self {
        Self::new(item.id(), item.quantity)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity.0
    }
}

/// Items of one category, ordered by descending quantity.
///
/// Entries are keyed by `(quantity, id)`, so removing or re-keying an item needs
/// its current quantity. The store always has it at hand from the primary map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRanking {
    entries: BTreeSet<RankKey>,
}

impl CategoryRanking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: &Item) -> bool {
        self.entries.insert(RankKey::of(item))
    }

    pub fn remove(&mut self, id: ItemId, quantity: u64) -> bool {
        self.entries.remove(&RankKey::new(id, quantity))
    }

    /// Move an entry to its new rank after an in-place quantity change.
    pub fn requantify(&mut self, id: ItemId, old: u64, new: u64) -> bool {
        if !self.entries.remove(&RankKey::new(id, old)) {
            return false;
        }
        self.entries.insert(RankKey::new(id, new))
    }

    pub fn contains(&self, id: ItemId, quantity: u64) -> bool {
        self.entries.contains(&RankKey::new(id, quantity))
    }

    /// Ids in rank order (highest quantity first).
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(RankKey::id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RankKey> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

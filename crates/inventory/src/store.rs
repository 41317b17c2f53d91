use std::collections::BTreeMap;

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::config::InventoryConfig;
use crate::item::{Item, QuantityRemoval};
use crate::notify::{RestockNotifier, TracingNotifier};
use crate::ranking::CategoryRanking;
use crate::top_k::select_top_k;

/// In-memory inventory: a primary map by id plus a per-category ranking index.
///
/// Every mutation takes `&mut self` and updates both indexes before returning, so
/// no caller can observe an item present in one index and missing from the other.
pub struct InventoryStore {
    config: InventoryConfig,
    primary: BTreeMap<ItemId, Item>,
    by_category: BTreeMap<String, CategoryRanking>,
    /// `None` once the id space is exhausted.
    next_id: Option<ItemId>,
    notifier: Box<dyn RestockNotifier>,
}

impl core::fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("config", &self.config)
            .field("items", &self.primary.len())
            .field("categories", &self.by_category.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(InventoryConfig::default())
    }
}

impl InventoryStore {
    /// Create an empty store that reports low stock through `tracing`.
    pub fn new(config: InventoryConfig) -> Self {
        Self::with_notifier(config, TracingNotifier)
    }

    pub fn with_notifier(config: InventoryConfig, notifier: impl RestockNotifier + 'static) -> Self {
        Self {
            config,
            primary: BTreeMap::new(),
            by_category: BTreeMap::new(),
            next_id: Some(ItemId::FIRST),
            notifier: Box::new(notifier),
        }
    }

    pub fn restock_threshold(&self) -> u64 {
        self.config.restock_threshold
    }

    /// The id the next auto-assigned item will receive.
    pub fn next_id(&self) -> Option<ItemId> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.primary.get(&id)
    }

    /// Categories that currently hold at least one item, sorted by name.
    pub fn categories(&self) -> Vec<&str> {
        self.by_category.keys().map(String::as_str).collect()
    }

    /// Store a new item, or replace the item with the given id.
    ///
    /// Without an id the next counter value is assigned. With an id, any existing
    /// item under it is removed from both indexes first, whatever its category.
    /// Zero quantities are rejected before anything changes: an existing item under
    /// the id stays as it was and no id is consumed.
    pub fn add_or_update(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u64,
        id: Option<ItemId>,
    ) -> DomainResult<Item> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }

        let id = match id {
            Some(id) => {
                self.remove(id);
                if self.next_id.is_some_and(|next| id >= next) {
                    self.next_id = id.next();
                }
                id
            }
            None => {
                let id = self
                    .next_id
                    .ok_or_else(|| DomainError::validation("item id space exhausted"))?;
                self.next_id = id.next();
                id
            }
        };

        let item = Item::new(id, name, category, quantity);
        self.by_category
            .entry(item.category.clone())
            .or_default()
            .insert(&item);
        self.primary.insert(id, item.clone());

        tracing::debug!(item_id = %id, category = %item.category, quantity, "item stored");

        if item.needs_restock(self.config.restock_threshold) {
            self.notifier.notify(&item, self.config.restock_threshold);
        }

        Ok(item)
    }

    /// Delete an item from both indexes. Returns the removed item, or `None` if no
    /// item has this id.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let item = self.primary.remove(&id)?;

        if let Some(ranking) = self.by_category.get_mut(&item.category) {
            ranking.remove(id, item.quantity);
            if ranking.is_empty() {
                self.by_category.remove(&item.category);
            }
        }

        tracing::debug!(item_id = %id, category = %item.category, "item removed");
        Some(item)
    }

    /// Take `amount` units out of an item's stock.
    ///
    /// Fails without touching the store if the item is missing or holds less than
    /// `amount`. Reaching exactly zero deletes the item.
    pub fn remove_quantity(&mut self, id: ItemId, amount: u64) -> DomainResult<QuantityRemoval> {
        let item = self.primary.get_mut(&id).ok_or(DomainError::not_found(id))?;

        if amount > item.quantity {
            return Err(DomainError::insufficient(id, amount, item.quantity));
        }

        let old = item.quantity;
        let remaining = old - amount;

        if remaining == 0 {
            self.remove(id);
            return Ok(QuantityRemoval {
                item_id: id,
                remaining,
                removed: true,
            });
        }

        item.quantity = remaining;
        if let Some(ranking) = self.by_category.get_mut(&item.category) {
            ranking.requantify(id, old, remaining);
        }

        tracing::debug!(item_id = %id, removed = amount, remaining, "quantity removed");
        Ok(QuantityRemoval {
            item_id: id,
            remaining,
            removed: false,
        })
    }

    /// Items of one category, highest quantity first. Unknown categories yield an
    /// empty list.
    pub fn list_by_category(&self, category: &str) -> Vec<Item> {
        let Some(ranking) = self.by_category.get(category) else {
            return Vec::new();
        };

        ranking
            .ids()
            .filter_map(|id| self.primary.get(&id))
            .cloned()
            .collect()
    }

    /// Every item, ascending by id.
    pub fn list_all(&self) -> Vec<Item> {
        self.primary.values().cloned().collect()
    }

    /// The `k` items with the greatest quantity across all categories, highest first.
    pub fn top_k(&self, k: usize) -> Vec<Item> {
        select_top_k(self.primary.values(), k)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Verify that the primary map and the category rankings agree.
    pub fn check_consistency(&self) -> DomainResult<()> {
        for (id, item) in &self.primary {
            if *id != item.id {
                return Err(DomainError::invariant(format!(
                    "item keyed under {id} carries id {}",
                    item.id
                )));
            }
            if item.quantity == 0 {
                return Err(DomainError::invariant(format!("item {id} retained with zero quantity")));
            }
            if self.next_id.is_some_and(|next| *id >= next) {
                return Err(DomainError::invariant(format!(
                    "item {id} is not below the id counter"
                )));
            }
            let ranked = self
                .by_category
                .get(&item.category)
                .is_some_and(|ranking| ranking.contains(*id, item.quantity));
            if !ranked {
                return Err(DomainError::invariant(format!(
                    "item {id} missing from ranking of category '{}'",
                    item.category
                )));
            }
        }

        let mut ranked_total = 0;
        for (category, ranking) in &self.by_category {
            if ranking.is_empty() {
                return Err(DomainError::invariant(format!("empty ranking kept for '{category}'")));
            }
            for key in ranking.keys() {
                let matches = self
                    .primary
                    .get(&key.id())
                    .is_some_and(|item| item.category == *category && item.quantity == key.quantity());
                if !matches {
                    return Err(DomainError::invariant(format!(
                        "stale entry for item {} in ranking of category '{category}'",
                        key.id()
                    )));
                }
            }
            ranked_total += ranking.len();
        }

        if ranked_total != self.primary.len() {
            return Err(DomainError::invariant(format!(
                "{ranked_total} ranked entries for {} items",
                self.primary.len()
            )));
        }

        Ok(())
    }
}

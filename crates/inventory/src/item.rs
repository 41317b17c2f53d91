use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

/// One stock record.
///
/// Items are owned by the [`InventoryStore`](crate::InventoryStore); queries hand
/// out clones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u64,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, category: impl Into<String>, quantity: u64) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
        }
    }

    /// Whether this item sits below the given restock threshold.
    pub fn needs_restock(&self, threshold: u64) -> bool {
        self.quantity < threshold
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Item{{id={}, name='{}', category='{}', quantity={}}}",
            self.id, self.name, self.category, self.quantity
        )
    }
}

/// Outcome of a successful partial quantity removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRemoval {
    pub item_id: ItemId,
    /// Quantity left on hand after the removal.
    pub remaining: u64,
    /// True when the removal emptied the item and it was deleted.
    pub removed: bool,
}

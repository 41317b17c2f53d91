//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of an inventory item.
///
/// Always positive. Ids are handed out by the store from a monotonically
/// increasing counter, or supplied explicitly by an update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ItemId(NonZeroU64);

impl ItemId {
    /// The first id a fresh store assigns.
    pub const FIRST: ItemId = ItemId(NonZeroU64::MIN);

    pub fn new(value: u64) -> DomainResult<Self> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id("ItemId: must be a positive integer"))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The id following this one, or `None` once the counter space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for ItemId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.get()
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Self::new(raw)
    }
}

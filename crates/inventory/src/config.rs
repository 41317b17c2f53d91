use serde::{Deserialize, Serialize};

/// Restock threshold used when none is configured.
pub const DEFAULT_RESTOCK_THRESHOLD: u64 = 10;

/// Store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Items stored with a quantity strictly below this raise a restock notice.
    #[serde(default = "default_restock_threshold")]
    pub restock_threshold: u64,
}

fn default_restock_threshold() -> u64 {
    DEFAULT_RESTOCK_THRESHOLD
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn with_restock_threshold(mut self, restock_threshold: u64) -> Self {
        self.restock_threshold = restock_threshold;
        self
    }
}

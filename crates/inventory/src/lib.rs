//! Inventory domain module.
//!
//! An in-memory store of stock items with a per-category ranking index kept in
//! step with the primary map, low-stock notifications and a top-k query. Pure
//! domain logic: no IO beyond `tracing` events.

pub mod config;
pub mod item;
pub mod notify;
pub mod ranking;
pub mod store;
pub mod top_k;

pub use config::{DEFAULT_RESTOCK_THRESHOLD, InventoryConfig};
pub use item::{Item, QuantityRemoval};
pub use notify::{RecordingNotifier, RestockNotifier, TracingNotifier};
pub use ranking::{CategoryRanking, RankKey};
pub use store::InventoryStore;
pub use top_k::select_top_k;

pub use stockroom_core::{DomainError, DomainResult, ItemId};

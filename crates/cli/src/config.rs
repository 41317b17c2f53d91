//! Process configuration: command-line flags with environment fallbacks.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use stockroom_inventory::{DEFAULT_RESTOCK_THRESHOLD, InventoryConfig};
use stockroom_observability::LogFormat;

/// How listings are written to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines, one item per line.
    #[default]
    Text,
    /// One JSON array per listing.
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "stockroom",
    version,
    about = "Interactive in-memory inventory tracker"
)]
pub struct Cli {
    /// Items stored with a quantity below this raise a restock notice.
    #[arg(long, env = "STOCKROOM_RESTOCK_THRESHOLD", default_value_t = DEFAULT_RESTOCK_THRESHOLD)]
    pub restock_threshold: u64,

    /// Listing output format.
    #[arg(long, env = "STOCKROOM_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log format for stderr (filter with RUST_LOG).
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn inventory_config(&self) -> InventoryConfig {
        InventoryConfig::default().with_restock_threshold(self.restock_threshold)
    }
}

use std::path::PathBuf;

/// Default backing file, resolved against the working directory. The file
/// location is deliberately not configurable via flag or environment; tests
/// point the store at a temp directory instead.
pub const INVENTORY_FILENAME: &str = "inventory.csv";

/// Records with a quantity strictly below this are flagged on view.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// CSV column order, matching the field order of [`crate::model::Product`].
pub const FIELDS: [&str; 5] = ["product_id", "name", "category", "price", "quantity"];

/// Store location and display thresholds, constructed once in `main.rs`
/// and injected into the store and API rather than read from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockpileConfig {
    /// Path of the backing CSV file.
    pub path: PathBuf,

    /// Low-stock warning threshold for the view operation.
    pub low_stock_threshold: i64,
}

impl Default for StockpileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(INVENTORY_FILENAME),
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}

impl StockpileConfig {
    /// Config rooted in the given directory, keeping the default file name.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(INVENTORY_FILENAME),
            ..Self::default()
        }
    }
}

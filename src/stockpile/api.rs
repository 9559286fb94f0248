//! # API Facade
//!
//! Thin facade over the command layer: the single entry point for every
//! ledger operation, whatever the UI. It dispatches, passes configuration
//! down (the view command needs the low-stock threshold), and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O, no
//! presentation.
//!
//! `StockpileApi<S: InventoryStore>` is generic over the storage backend:
//! production wires in `FileStore`, tests use `InMemoryStore`.

use crate::commands;
use crate::config::StockpileConfig;
use crate::error::Result;
use crate::model::Role;
use crate::store::InventoryStore;

pub use crate::commands::search::SearchQuery;
pub use crate::commands::sort::SortKey;
pub use crate::commands::{CmdMessage, CmdResult, DisplayProduct, MessageLevel, NewProduct};

pub struct StockpileApi<S: InventoryStore> {
    store: S,
    config: StockpileConfig,
}

impl<S: InventoryStore> StockpileApi<S> {
    pub fn new(store: S, config: StockpileConfig) -> Self {
        Self { store, config }
    }

    pub fn add_product(&mut self, new: NewProduct) -> Result<CmdResult> {
        commands::add::run(&mut self.store, new)
    }

    pub fn update_quantity(&mut self, id: &str, delta: i64) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, delta)
    }

    pub fn delete_product(&mut self, role: Role, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, role, id)
    }

    pub fn view_inventory(&self) -> Result<CmdResult> {
        commands::view::run(&self.store, self.config.low_stock_threshold)
    }

    pub fn search_products(&self, query: SearchQuery) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn sort_inventory(&self, key: SortKey) -> Result<CmdResult> {
        commands::sort::run(&self.store, key)
    }
}

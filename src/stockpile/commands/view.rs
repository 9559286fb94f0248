use crate::commands::{CmdResult, DisplayProduct};
use crate::error::{Result, StockpileError};
use crate::store::InventoryStore;

/// Read-only listing of the full set, flagging records whose quantity sits
/// strictly below the low-stock threshold.
pub fn run<S: InventoryStore>(store: &S, low_stock_threshold: i64) -> Result<CmdResult> {
    let products = store.load()?;
    if products.is_empty() {
        return Err(StockpileError::EmptyInventory);
    }

    let listed = products
        .into_iter()
        .map(|product| DisplayProduct {
            low_stock: product.quantity < low_stock_threshold,
            product,
        })
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOW_STOCK_THRESHOLD;
    use crate::model::Product;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_inventory_is_reported() {
        let store = InMemoryStore::new();
        let err = run(&store, LOW_STOCK_THRESHOLD).unwrap_err();
        assert!(matches!(err, StockpileError::EmptyInventory));
    }

    #[test]
    fn flags_quantities_strictly_below_the_threshold() {
        let store = InMemoryStore::with_products(vec![
            Product::new("P1", "Pen", "stationery", 2.5, 5),
            Product::new("P2", "Pencil", "stationery", 1.0, 4),
            Product::new("P3", "Marker", "stationery", 3.0, 0),
        ]);

        let result = run(&store, LOW_STOCK_THRESHOLD).unwrap();
        let flags: Vec<bool> = result.listed.iter().map(|dp| dp.low_stock).collect();
        // 5 is not below the threshold of 5.
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn preserves_file_order() {
        let store = InMemoryStore::with_products(vec![
            Product::new("P2", "Pencil", "stationery", 1.0, 3),
            Product::new("P1", "Pen", "stationery", 2.5, 10),
        ]);

        let result = run(&store, LOW_STOCK_THRESHOLD).unwrap();
        let ids: Vec<&str> = result
            .listed
            .iter()
            .map(|dp| dp.product.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P2", "P1"]);
    }
}

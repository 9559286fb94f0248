use crate::commands::{CmdResult, DisplayProduct};
use crate::error::{Result, StockpileError};
use crate::store::InventoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Quantity,
}

/// Renders a sorted copy of the full set; the stored order is never
/// touched. `sort_by` is stable, so ties keep their file-order sequence.
pub fn run<S: InventoryStore>(store: &S, key: SortKey) -> Result<CmdResult> {
    let mut products = store.load()?;
    if products.is_empty() {
        return Err(StockpileError::EmptyInventory);
    }

    match key {
        SortKey::Name => products.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
        }),
        SortKey::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Quantity => products.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
    }

    let listed = products.into_iter().map(DisplayProduct::plain).collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::store::memory::InMemoryStore;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result
            .listed
            .iter()
            .map(|dp| dp.product.product_id.as_str())
            .collect()
    }

    #[test]
    fn empty_inventory_is_reported() {
        let store = InMemoryStore::new();
        let err = run(&store, SortKey::Name).unwrap_err();
        assert!(matches!(err, StockpileError::EmptyInventory));
    }

    #[test]
    fn name_sort_ignores_case() {
        let store = InMemoryStore::with_products(vec![
            Product::new("P1", "banana", "groceries", 0.3, 20),
            Product::new("P2", "Apple", "groceries", 0.5, 50),
        ]);
        let result = run(&store, SortKey::Name).unwrap();
        assert_eq!(ids(&result), vec!["P2", "P1"]);
    }

    #[test]
    fn quantity_sort_is_numeric_not_lexicographic() {
        let store = InMemoryStore::with_products(vec![
            Product::new("P1", "A", "x", 1.0, 10),
            Product::new("P2", "B", "x", 1.0, 9),
        ]);
        // Lexicographic text order would put "10" before "9".
        let result = run(&store, SortKey::Quantity).unwrap();
        assert_eq!(ids(&result), vec!["P2", "P1"]);
    }

    #[test]
    fn price_sort_is_numeric_ascending() {
        let store = InMemoryStore::with_products(vec![
            Product::new("P1", "A", "x", 10.0, 1),
            Product::new("P2", "B", "x", 9.5, 1),
            Product::new("P3", "C", "x", 100.0, 1),
        ]);
        let result = run(&store, SortKey::Price).unwrap();
        assert_eq!(ids(&result), vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn ties_keep_file_order() {
        let store = InMemoryStore::with_products(vec![
            Product::new("P1", "A", "x", 1.0, 7),
            Product::new("P2", "B", "x", 1.0, 7),
            Product::new("P3", "C", "x", 1.0, 2),
        ]);
        let result = run(&store, SortKey::Quantity).unwrap();
        assert_eq!(ids(&result), vec!["P3", "P1", "P2"]);
    }

    #[test]
    fn stored_order_is_not_persisted() {
        let store = InMemoryStore::with_products(vec![
            Product::new("P1", "B", "x", 1.0, 1),
            Product::new("P2", "A", "x", 1.0, 1),
        ]);
        run(&store, SortKey::Name).unwrap();

        let products = store.load().unwrap();
        assert_eq!(products[0].product_id, "P1");
    }
}

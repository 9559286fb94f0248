use super::InventoryStore;
use crate::error::Result;
use crate::model::Product;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl InventoryStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        Ok(())
    }
}

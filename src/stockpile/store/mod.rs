//! # Storage Layer
//!
//! The [`InventoryStore`] trait abstracts where the record set lives so the
//! command layer can be tested against [`memory::InMemoryStore`] without a
//! filesystem, while production runs on [`fs::FileStore`].
//!
//! The contract is whole-set load/save: `load` hands back every record in
//! file order, `save` overwrites the backing file entirely. There is no
//! point read or point write; the record set is small by design and every
//! mutation rewrites it.
//!
//! Lookups are free functions over a loaded slice rather than trait methods:
//! they are pure scans and have no reason to differ per backend.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Abstract interface for the product record set.
pub trait InventoryStore {
    /// All records in file order. A missing backing file is an empty
    /// inventory, not an error.
    fn load(&self) -> Result<Vec<Product>>;

    /// Overwrite the backing file with a header row plus the given records,
    /// in order. Not atomic: a crash mid-write can truncate the file.
    fn save(&mut self, products: &[Product]) -> Result<()>;
}

/// First record whose id matches exactly (case-sensitive), in file order.
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.product_id == id)
}

/// First record whose name matches case-insensitively, in file order.
pub fn find_by_name<'a>(products: &'a [Product], name: &str) -> Option<&'a Product> {
    products
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("P1", "Pen", "stationery", 2.5, 10),
            Product::new("P2", "Pencil", "stationery", 1.0, 3),
            Product::new("P3", "pen", "art", 4.0, 1),
        ]
    }

    #[test]
    fn id_lookup_is_case_sensitive_and_exact() {
        let products = sample();
        assert_eq!(find_by_id(&products, "P2").unwrap().name, "Pencil");
        assert!(find_by_id(&products, "p2").is_none());
        assert!(find_by_id(&products, "P").is_none());
    }

    #[test]
    fn name_lookup_ignores_case_and_takes_first() {
        let products = sample();
        // "P3" also matches "pen" but "P1" comes first in file order.
        assert_eq!(find_by_name(&products, "PEN").unwrap().product_id, "P1");
        assert!(find_by_name(&products, "Stapler").is_none());
    }
}

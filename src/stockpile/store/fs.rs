use super::InventoryStore;
use crate::config::FIELDS;
use crate::error::Result;
use crate::model::Product;
use std::fs::File;
use std::path::PathBuf;

/// CSV-backed production store. The backing path is injected at
/// construction (see [`crate::config::StockpileConfig`]); the store itself
/// holds no other state, so every load re-reads the file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl InventoryStore for FileStore {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut products = Vec::new();
        for record in reader.deserialize() {
            // Typed at load: a row with a malformed price or quantity fails
            // the whole load here instead of a later sort or update.
            products.push(record?);
        }
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        // Whole-file overwrite, no temp-file/rename. The header is written
        // explicitly so an empty record set still produces a valid file.
        let file = File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(FIELDS)?;
        for product in products {
            writer.serialize(product)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIELDS;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("inventory.csv"))
    }

    #[test]
    fn missing_file_loads_as_empty_inventory() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        let products = vec![
            Product::new("P1", "Pen", "stationery", 2.5, 10),
            Product::new("P2", "Notebook, ruled", "stationery", 45.0, 4),
        ];
        store.save(&products).unwrap();
        assert_eq!(store.load().unwrap(), products);
    }

    #[test]
    fn empty_save_still_writes_the_header_row() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(&[]).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim_end(), FIELDS.join(","));
    }

    #[test]
    fn price_is_persisted_with_two_fraction_digits() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&[Product::new("P1", "Pen", "stationery", 2.5, 10)])
            .unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("P1,Pen,stationery,2.50,10"));
    }

    #[test]
    fn embedded_delimiters_are_quoted() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        let products = vec![Product::new("P9", "Tape, double-sided", "office", 30.0, 7)];
        store.save(&products).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\"Tape, double-sided\""));
        assert_eq!(store.load().unwrap(), products);
    }

    #[test]
    fn malformed_quantity_fails_the_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(
            &path,
            "product_id,name,category,price,quantity\nP1,Pen,stationery,2.50,lots\n",
        )
        .unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn malformed_price_fails_the_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(
            &path,
            "product_id,name,category,price,quantity\nP1,Pen,stationery,cheap,10\n",
        )
        .unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }
}

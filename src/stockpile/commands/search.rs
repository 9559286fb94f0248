use crate::commands::{CmdMessage, CmdResult, DisplayProduct};
use crate::error::{Result, StockpileError};
use crate::store::{find_by_id, find_by_name, InventoryStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Exact, case-sensitive id match.
    ById(String),
    /// Case-insensitive name match; first hit in file order wins.
    ByName(String),
    /// Case-insensitive category match, every hit in file order.
    ByCategory(String),
}

pub fn run<S: InventoryStore>(store: &S, query: SearchQuery) -> Result<CmdResult> {
    let products = store.load()?;

    match query {
        SearchQuery::ById(id) => {
            let product = find_by_id(&products, &id)
                .cloned()
                .ok_or(StockpileError::NotFound(id))?;
            Ok(CmdResult::default().with_listed(vec![DisplayProduct::plain(product)]))
        }
        SearchQuery::ByName(name) => {
            let product = find_by_name(&products, &name)
                .cloned()
                .ok_or(StockpileError::NotFound(name))?;
            Ok(CmdResult::default().with_listed(vec![DisplayProduct::plain(product)]))
        }
        SearchQuery::ByCategory(category) => {
            let listed: Vec<_> = products
                .into_iter()
                .filter(|p| p.category.eq_ignore_ascii_case(&category))
                .map(DisplayProduct::plain)
                .collect();

            if listed.is_empty() {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::info("No products in this category."));
                return Ok(result);
            }
            Ok(CmdResult::default().with_listed(listed))
        }
    }
}

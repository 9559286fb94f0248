use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::model::Role;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &mut S, role: Role, id: &str) -> Result<CmdResult> {
    if !role.is_admin() {
        return Err(StockpileError::PermissionDenied);
    }

    let products = store.load()?;
    let before = products.len();
    // Removes every match; at most one in practice, ids are unique at rest.
    let remaining: Vec<_> = products
        .into_iter()
        .filter(|p| p.product_id != id)
        .collect();

    if remaining.len() == before {
        return Err(StockpileError::NotFound(id.to_string()));
    }

    store.save(&remaining)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Product deleted: {}", id)));
    Ok(result)
}

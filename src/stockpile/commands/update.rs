use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &mut S, id: &str, delta: i64) -> Result<CmdResult> {
    let mut products = store.load()?;

    let product = products
        .iter_mut()
        .find(|p| p.product_id == id)
        .ok_or_else(|| StockpileError::NotFound(id.to_string()))?;

    let new_quantity = product.quantity + delta;
    if new_quantity < 0 {
        return Err(StockpileError::NegativeQuantity {
            current: product.quantity,
            delta,
        });
    }

    product.quantity = new_quantity;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Quantity updated: {} now {}",
        id, new_quantity
    )));

    store.save(&products)?;
    Ok(result)
}

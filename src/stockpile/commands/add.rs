use crate::commands::{CmdMessage, CmdResult, NewProduct};
use crate::error::{Result, StockpileError};
use crate::model::Product;
use crate::store::{find_by_id, InventoryStore};

pub fn run<S: InventoryStore>(store: &mut S, new: NewProduct) -> Result<CmdResult> {
    let mut products = store.load()?;

    if find_by_id(&products, &new.product_id).is_some() {
        return Err(StockpileError::DuplicateId(new.product_id));
    }

    // No bounds checks here: negative price or quantity is accepted at
    // creation, only the quantity update enforces non-negativity.
    let product = Product::new(new.product_id, new.name, new.category, new.price, new.quantity);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added: {} ({})",
        product.name, product.product_id
    )));

    products.push(product);
    store.save(&products)?;

    Ok(result)
}

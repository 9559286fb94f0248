use crate::model::Product;

pub mod add;
pub mod delete;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A record dressed for display. `low_stock` is set only by the view
/// operation; search and sort render without the marker.
#[derive(Debug, Clone)]
pub struct DisplayProduct {
    pub product: Product,
    pub low_stock: bool,
}

impl DisplayProduct {
    pub fn plain(product: Product) -> Self {
        Self {
            product,
            low_stock: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<DisplayProduct>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<DisplayProduct>) -> Self {
        self.listed = listed;
        self
    }
}

/// Operator input for the add operation. Numeric fields arrive already
/// parsed; the prompt layer owns the text-to-number step and its
/// invalid-number failure.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

impl NewProduct {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }
}

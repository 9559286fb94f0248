use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockpileError {
    #[error("Product ID already exists: {0}")]
    DuplicateId(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Quantity cannot be negative ({current} {delta:+} < 0)")]
    NegativeQuantity { current: i64, delta: i64 },

    #[error("Only admin can delete products")]
    PermissionDenied,

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Inventory is empty")]
    EmptyInventory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inventory file error: {0}")]
    Malformed(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, StockpileError>;

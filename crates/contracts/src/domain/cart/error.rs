use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Quantity for {product_id} would exceed {max}")]
    QuantityOverflow { product_id: String, max: u32 },
}

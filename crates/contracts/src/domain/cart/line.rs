use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Product, ProductId};

/// One quantity-bearing entry of the cart.
///
/// `meta` is the buyer-supplied value (player id, email, meter number) and is
/// part of the line identity: the same product bought for two accounts is two
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub meta: String,
    pub qty: u32,
}

impl CartLine {
    pub fn matches(&self, product_id: &str, meta: &str) -> bool {
        self.product_id.as_str() == product_id && self.meta == meta
    }

    /// Stable key for keyed list rendering.
    pub fn key(&self) -> String {
        format!("{}\u{1f}{}", self.product_id, self.meta)
    }
}

/// A cart line joined with its resolved product.
#[derive(Debug, Clone, Copy)]
pub struct PricedLine<'a> {
    pub line: &'a CartLine,
    pub product: &'a Product,
    pub subtotal: u64,
}

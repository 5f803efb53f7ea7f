use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::cart::Cart;
use crate::domain::catalog::{Catalog, ProductId};
use crate::enums::PaymentMethod;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Product {0} is no longer available")]
    UnknownProduct(String),
}

/// Line of a placed order. Unlike a cart line it freezes the unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub name: String,
    pub meta: String,
    pub qty: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: u64,
    pub subtotal: u64,
}

/// Receipt of a mock payment. Nothing is charged or sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub method: PaymentMethod,
    pub lines: Vec<OrderLine>,
    pub total: u64,
}

impl OrderReceipt {
    /// Short human-facing reference, e.g. `TRX-1A2B3C4D`.
    pub fn reference(&self) -> String {
        let simple = self.id.simple().to_string();
        format!("TRX-{}", simple[..8].to_uppercase())
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Snapshot the cart into a receipt.
///
/// Every line must still resolve in the catalog; the cart itself is left
/// untouched so the caller decides when to clear it.
pub fn place_order(
    cart: &Cart,
    catalog: &Catalog,
    method: PaymentMethod,
) -> Result<OrderReceipt, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut lines = Vec::with_capacity(cart.len());
    for line in cart.lines() {
        let product = catalog
            .find(&line.product_id)
            .ok_or_else(|| CheckoutError::UnknownProduct(line.product_id.to_string()))?;
        lines.push(OrderLine {
            product_id: line.product_id.clone(),
            name: format!("{} {}", product.subcategory, product.name),
            meta: line.meta.clone(),
            qty: line.qty,
            unit_price: product.price,
            subtotal: product.price_for(line.qty),
        });
    }

    let total = lines.iter().fold(0u64, |acc, l| acc.saturating_add(l.subtotal));
    let receipt = OrderReceipt {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        method,
        lines,
        total,
    };
    log::info!(
        "checkout: order {} via {} for {} line(s), total {}",
        receipt.reference(),
        method.code(),
        receipt.lines.len(),
        total
    );
    Ok(receipt)
}

/// Take the ordered lines out of the cart once the payment went through.
///
/// Only the quantities frozen in the receipt are removed; anything added to
/// the cart after the order was placed stays.
pub fn settle_order(cart: &mut Cart, receipt: &OrderReceipt) {
    for line in &receipt.lines {
        let taken = cart.take(line.product_id.as_str(), &line.meta, line.qty);
        if taken != line.qty {
            log::warn!(
                "checkout: order {} line {} for '{}' was {} unit(s) short in the cart",
                receipt.reference(),
                line.product_id,
                line.meta,
                line.qty - taken
            );
        }
    }
    log::info!("checkout: order {} settled", receipt.reference());
}

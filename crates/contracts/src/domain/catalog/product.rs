use serde::{Deserialize, Serialize};

use crate::enums::ProductCategory;

// ============================================================================
// ID Type
// ============================================================================

/// Catalog-wide product identifier (`ml_86`, `netflix_prem`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Product
// ============================================================================

/// A purchasable digital good. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category: ProductCategory,
    pub subcategory: String,
    pub name: String,
    /// Whole rupiah, no minor units.
    pub price: u64,
    /// What the buyer has to type in (Player ID, Email, ...).
    #[serde(rename = "inputLabel")]
    pub input_label: String,
    pub logo: String,
}

impl Product {
    pub fn new(
        id: &str,
        category: ProductCategory,
        subcategory: &str,
        name: &str,
        price: u64,
        input_label: &str,
        logo: &str,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            category,
            subcategory: subcategory.to_string(),
            name: name.to_string(),
            price,
            input_label: input_label.to_string(),
            logo: logo.to_string(),
        }
    }

    /// Price of `qty` units, saturating instead of wrapping.
    pub fn price_for(&self, qty: u32) -> u64 {
        self.price.saturating_mul(u64::from(qty))
    }
}

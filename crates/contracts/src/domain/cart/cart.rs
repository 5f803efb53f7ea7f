use serde::{Deserialize, Serialize};

use super::error::CartError;
use super::line::{CartLine, PricedLine};
use crate::domain::catalog::{Catalog, Product};

/// Session-scoped shopping cart.
///
/// Stores identity and quantity only. Prices are resolved against the
/// catalog on every read, so a changed price shows up immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `qty` units of `product` for `meta` into the cart.
    ///
    /// An existing `(product, meta)` line keeps its position and grows;
    /// otherwise a new line is appended. `qty == 0` is rejected.
    pub fn add(&mut self, product: &Product, qty: u32, meta: impl Into<String>) -> Result<(), CartError> {
        if qty == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let meta = meta.into();

        match self
            .lines
            .iter()
            .position(|line| line.matches(product.id.as_str(), &meta))
        {
            Some(index) => {
                let line = &mut self.lines[index];
                line.qty = line
                    .qty
                    .checked_add(qty)
                    .ok_or_else(|| CartError::QuantityOverflow {
                        product_id: product.id.to_string(),
                        max: u32::MAX,
                    })?;
                log::debug!("cart: merged {} x{} for '{}' -> {}", product.id, qty, meta, line.qty);
            }
            None => {
                log::debug!("cart: appended {} x{} for '{}'", product.id, qty, meta);
                self.lines.push(CartLine {
                    product_id: product.id.clone(),
                    meta,
                    qty,
                });
            }
        }
        Ok(())
    }

    /// Remove the line with exactly this identity. Absent lines are a no-op;
    /// the return value tells whether anything was removed.
    pub fn remove(&mut self, product_id: &str, meta: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| !line.matches(product_id, meta));
        let removed = self.lines.len() != before;
        if removed {
            log::debug!("cart: removed {} for '{}'", product_id, meta);
        }
        removed
    }

    /// Take up to `qty` units off the line with this identity, dropping the
    /// line when nothing is left. Returns the units actually taken.
    pub fn take(&mut self, product_id: &str, meta: &str, qty: u32) -> u32 {
        let index = match self.lines.iter().position(|line| line.matches(product_id, meta)) {
            Some(index) => index,
            None => return 0,
        };
        let line = &mut self.lines[index];
        let taken = line.qty.min(qty);
        line.qty -= taken;
        if line.qty == 0 {
            self.lines.remove(index);
        }
        log::debug!("cart: took {} x{} for '{}'", product_id, taken, meta);
        taken
    }

    pub fn clear(&mut self) {
        log::debug!("cart: cleared {} line(s)", self.lines.len());
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Sum of `qty * price`, prices looked up now.
    pub fn total(&self, catalog: &Catalog) -> u64 {
        self.priced_lines(catalog)
            .iter()
            .fold(0u64, |acc, priced| acc.saturating_add(priced.subtotal))
    }

    /// Lines joined with their products. Lines whose product is no longer in
    /// the catalog are skipped.
    pub fn priced_lines<'a>(&'a self, catalog: &'a Catalog) -> Vec<PricedLine<'a>> {
        self.lines
            .iter()
            .filter_map(|line| match catalog.find(&line.product_id) {
                Some(product) => Some(PricedLine {
                    line,
                    product,
                    subtotal: product.price_for(line.qty),
                }),
                None => {
                    log::warn!("cart: product {} is not in the catalog", line.product_id);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ProductCategory;

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, ProductCategory::Game, "Test", id, price, "Player ID", "")
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![product("ml_86", 25_000), product("netflix_prem", 65_000)])
    }

    #[test]
    fn test_take_reduces_then_drops_line() {
        let p = product("ml_86", 25_000);
        let q = product("netflix_prem", 65_000);
        let mut cart = Cart::new();
        cart.add(&p, 3, "A").unwrap();
        cart.add(&q, 1, "B").unwrap();

        assert_eq!(cart.take("ml_86", "A", 2), 2);
        assert_eq!(cart.lines()[0].qty, 1);
        assert_eq!(cart.take("ml_86", "A", 5), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product_id.as_str(), "netflix_prem");
        assert_eq!(cart.take("ml_86", "A", 1), 0);
        assert_eq!(cart.take("netflix_prem", "other", 1), 0);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_add_merges_same_identity() {
        let p = product("ml_86", 25_000);
        let mut cart = Cart::new();
        cart.add(&p, 1, "A").unwrap();
        cart.add(&p, 2, "A").unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].qty, 3);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_keeps_distinct_meta_apart() {
        let p = product("ml_86", 25_000);
        let mut cart = Cart::new();
        cart.add(&p, 1, "A").unwrap();
        cart.add(&p, 1, "B").unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_merged_line_keeps_position() {
        let a = product("ml_86", 25_000);
        let b = product("netflix_prem", 65_000);
        let mut cart = Cart::new();
        cart.add(&a, 1, "p1").unwrap();
        cart.add(&b, 1, "me@example.com").unwrap();
        cart.add(&a, 4, "p1").unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["ml_86", "netflix_prem"]);
        assert_eq!(cart.lines()[0].qty, 5);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let p = product("ml_86", 25_000);
        let mut cart = Cart::new();
        assert_eq!(cart.add(&p, 0, "A"), Err(CartError::InvalidQuantity));
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_overflow_is_rejected_and_line_untouched() {
        let p = product("ml_86", 1);
        let mut cart = Cart::new();
        cart.add(&p, u32::MAX, "A").unwrap();
        assert!(matches!(
            cart.add(&p, 1, "A"),
            Err(CartError::QuantityOverflow { .. })
        ));
        assert_eq!(cart.lines()[0].qty, u32::MAX);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove("ml_86", "Z"));
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_remove_exact_identity_only() {
        let p = product("ml_86", 25_000);
        let mut cart = Cart::new();
        cart.add(&p, 1, "A").unwrap();
        cart.add(&p, 2, "B").unwrap();

        assert!(cart.remove("ml_86", "A"));
        assert!(!cart.remove("ml_86", "A"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].meta, "B");
    }

    #[test]
    fn test_total() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.find_str("ml_86").unwrap(), 2, "p1").unwrap();
        cart.add(catalog.find_str("netflix_prem").unwrap(), 1, "me@example.com").unwrap();

        assert_eq!(cart.total(&catalog), 115_000);
    }

    #[test]
    fn test_total_uses_price_at_read_time() {
        let mut cart = Cart::new();
        cart.add(&product("ml_86", 25_000), 2, "p1").unwrap();

        let repriced = Catalog::new(vec![product("ml_86", 30_000)]);
        assert_eq!(cart.total(&catalog()), 50_000);
        assert_eq!(cart.total(&repriced), 60_000);
    }

    #[test]
    fn test_unresolved_line_counts_but_costs_nothing() {
        let mut cart = Cart::new();
        cart.add(&product("gone", 10_000), 3, "x").unwrap();
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(&catalog()), 0);
        assert!(cart.priced_lines(&catalog()).is_empty());
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.find_str("ml_86").unwrap(), 2, "p1").unwrap();
        cart.clear();

        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(&catalog), 0);
    }
}

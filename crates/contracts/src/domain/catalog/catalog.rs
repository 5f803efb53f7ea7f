use once_cell::sync::Lazy;

use super::product::{Product, ProductId};
use crate::enums::ProductCategory;

const ICON_CDN: &str = "https://cdn.jsdelivr.net/gh/simple-icons/simple-icons/icons";

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let logo = |name: &str| format!("{}/{}.svg", ICON_CDN, name);
    Catalog::new(vec![
        Product::new(
            "ml_86",
            ProductCategory::Game,
            "Mobile Legends",
            "86 Diamonds",
            25_000,
            "Player ID",
            &logo("mobilelegends"),
        ),
        Product::new(
            "ff_140",
            ProductCategory::Game,
            "Free Fire",
            "140 Diamonds",
            27_000,
            "Player ID",
            &logo("garena"),
        ),
        Product::new(
            "spotify_prem",
            ProductCategory::Apps,
            "Spotify",
            "Premium 1 Month",
            54_000,
            "Email",
            &logo("spotify"),
        ),
        Product::new(
            "netflix_prem",
            ProductCategory::Apps,
            "Netflix",
            "Premium 1 Month",
            65_000,
            "Email",
            &logo("netflix"),
        ),
        Product::new(
            "data_10",
            ProductCategory::Data,
            "Telkomsel",
            "Data 10GB",
            45_000,
            "Phone Number",
            &logo("telkomsel"),
        ),
        Product::new(
            "pln_20",
            ProductCategory::Ppob,
            "PLN",
            "Token 20k",
            22_000,
            "Meter Number",
            &logo("lightning"),
        ),
    ])
});

/// Read-only product list. Order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog shipped with the storefront, built once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.find_str(id.as_str())
    }

    pub fn find_str(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products in `category` (all when `None`), narrowed to `subcategory`
    /// when one is given. An empty subcategory means "all".
    pub fn filter(&self, category: Option<ProductCategory>, subcategory: Option<&str>) -> Vec<&Product> {
        let subcategory = subcategory.filter(|s| !s.is_empty());
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| subcategory.map_or(true, |s| p.subcategory == s))
            .collect()
    }

    /// Distinct subcategories of a category, in catalog order.
    pub fn subcategories(&self, category: ProductCategory) -> Vec<&str> {
        let mut subs: Vec<&str> = Vec::new();
        for product in self.products.iter().filter(|p| p.category == category) {
            if !subs.contains(&product.subcategory.as_str()) {
                subs.push(&product.subcategory);
            }
        }
        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_ids_are_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 6);
        for (i, a) in catalog.products().iter().enumerate() {
            for b in &catalog.products()[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        let product = catalog.find(&ProductId::new("netflix_prem")).unwrap();
        assert_eq!(product.price, 65_000);
        assert_eq!(product.input_label, "Email");
        assert!(catalog.find_str("missing").is_none());
    }

    #[test]
    fn test_filter_by_category_and_subcategory() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.filter(None, None).len(), 6);
        assert_eq!(catalog.filter(Some(ProductCategory::Game), None).len(), 2);
        assert_eq!(catalog.filter(Some(ProductCategory::Game), Some("")).len(), 2);

        let ff = catalog.filter(Some(ProductCategory::Game), Some("Free Fire"));
        assert_eq!(ff.len(), 1);
        assert_eq!(ff[0].id.as_str(), "ff_140");

        assert!(catalog.filter(Some(ProductCategory::Apps), Some("Free Fire")).is_empty());
    }

    #[test]
    fn test_subcategories_keep_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.subcategories(ProductCategory::Game),
            vec!["Mobile Legends", "Free Fire"]
        );
        assert_eq!(catalog.subcategories(ProductCategory::Ppob), vec!["PLN"]);
    }
}

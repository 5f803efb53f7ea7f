use serde::Deserialize;

use crate::enums::PaymentMethod;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub cart: CartSection,
    pub checkout: CheckoutSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreSection {
    pub name: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CartSection {
    #[serde(default = "default_true")]
    pub require_login: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CheckoutSection {
    #[serde(default = "PaymentMethod::all")]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub processing_delay_ms: u32,
}

fn default_currency_symbol() -> String {
    "Rp".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration embedded in the build
const EMBEDDED_CONFIG: &str = include_str!("../../store.toml");

impl StoreConfig {
    /// Load the embedded `store.toml`.
    pub fn load() -> anyhow::Result<StoreConfig> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<StoreConfig> {
        let config: StoreConfig = toml::from_str(contents)?;
        if config.checkout.payment_methods.is_empty() {
            anyhow::bail!("checkout.payment_methods must list at least one method");
        }
        Ok(config)
    }

    /// Settings used when the embedded document cannot be read.
    pub fn fallback() -> StoreConfig {
        StoreConfig {
            store: StoreSection {
                name: "Pixel Top-Up".to_string(),
                currency_symbol: default_currency_symbol(),
            },
            cart: CartSection { require_login: true },
            checkout: CheckoutSection {
                payment_methods: PaymentMethod::all(),
                processing_delay_ms: 0,
            },
        }
    }

    /// First configured payment method.
    pub fn default_payment_method(&self) -> PaymentMethod {
        self.checkout
            .payment_methods
            .first()
            .copied()
            .unwrap_or(PaymentMethod::Qris)
    }

    /// Resolve a method code against the configured list.
    pub fn payment_method(&self, code: &str) -> Option<PaymentMethod> {
        PaymentMethod::from_code(code).filter(|m| self.checkout.payment_methods.contains(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = StoreConfig::load();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.store.name, "Pixel Top-Up");
        assert_eq!(config.store.currency_symbol, "Rp");
        assert!(config.cart.require_login);
        assert_eq!(config.checkout.payment_methods, PaymentMethod::all());
        assert_eq!(config.checkout.processing_delay_ms, 1200);
    }

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = StoreConfig::from_toml_str(
            r#"
[store]
name = "Test"

[cart]

[checkout]
"#,
        )
        .unwrap();
        assert_eq!(config.store.currency_symbol, "Rp");
        assert!(config.cart.require_login);
        assert_eq!(config.checkout.payment_methods.len(), 7);
        assert_eq!(config.checkout.processing_delay_ms, 0);
    }

    #[test]
    fn test_rejects_unknown_method_and_empty_list() {
        let unknown = r#"
[store]
name = "Test"
[cart]
[checkout]
payment_methods = ["paypal"]
"#;
        assert!(StoreConfig::from_toml_str(unknown).is_err());

        let empty = r#"
[store]
name = "Test"
[cart]
[checkout]
payment_methods = []
"#;
        assert!(StoreConfig::from_toml_str(empty).is_err());
    }

    #[test]
    fn test_payment_method_lookup_respects_config() {
        let config = StoreConfig::from_toml_str(
            r#"
[store]
name = "Test"
[cart]
require_login = false
[checkout]
payment_methods = ["ovo", "dana"]
"#,
        )
        .unwrap();
        assert!(!config.cart.require_login);
        assert_eq!(config.default_payment_method(), PaymentMethod::Ovo);
        assert_eq!(config.payment_method("dana"), Some(PaymentMethod::Dana));
        assert_eq!(config.payment_method("qris"), None);
    }
}

use serde::{Deserialize, Serialize};

/// Top-level storefront categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Game,
    Apps,
    Data,
    Ppob,
}

impl ProductCategory {
    /// Code used in routes (`#/category/<code>`)
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Game => "game",
            ProductCategory::Apps => "apps",
            ProductCategory::Data => "data",
            ProductCategory::Ppob => "ppob",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Game => "Game Top-up",
            ProductCategory::Apps => "Premium Apps",
            ProductCategory::Data => "Internet Packages",
            ProductCategory::Ppob => "PPOB Services",
        }
    }

    /// Icon key understood by the frontend icon set
    pub fn icon(&self) -> &'static str {
        match self {
            ProductCategory::Game => "gamepad",
            ProductCategory::Apps => "diamond",
            ProductCategory::Data => "smartphone",
            ProductCategory::Ppob => "zap",
        }
    }

    pub fn all() -> [ProductCategory; 4] {
        [
            ProductCategory::Game,
            ProductCategory::Apps,
            ProductCategory::Data,
            ProductCategory::Ppob,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "game" => Some(ProductCategory::Game),
            "apps" => Some(ProductCategory::Apps),
            "data" => Some(ProductCategory::Data),
            "ppob" => Some(ProductCategory::Ppob),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve_back() {
        for category in ProductCategory::all() {
            assert_eq!(ProductCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(ProductCategory::from_code("Game"), None);
        assert_eq!(ProductCategory::from_code(""), None);
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Closed set of page identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteName {
    Home,
    Category,
    Product,
    Checkout,
    Login,
    Payment,
    Admin,
    AdminUsers,
    AdminSalary,
    AdminSettings,
}

impl RouteName {
    pub fn all() -> [RouteName; 10] {
        [
            RouteName::Home,
            RouteName::Category,
            RouteName::Product,
            RouteName::Checkout,
            RouteName::Login,
            RouteName::Payment,
            RouteName::Admin,
            RouteName::AdminUsers,
            RouteName::AdminSalary,
            RouteName::AdminSettings,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Category => "category",
            RouteName::Product => "product",
            RouteName::Checkout => "checkout",
            RouteName::Login => "login",
            RouteName::Payment => "payment",
            RouteName::Admin => "admin",
            RouteName::AdminUsers => "adminUsers",
            RouteName::AdminSalary => "adminSalary",
            RouteName::AdminSettings => "adminSettings",
        }
    }

    /// Pages that show the cart contents.
    pub fn requires_cart_access(&self) -> bool {
        matches!(self, RouteName::Checkout | RouteName::Payment)
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            RouteName::Admin | RouteName::AdminUsers | RouteName::AdminSalary | RouteName::AdminSettings
        )
    }

    /// Fixed path of parameterless routes.
    fn static_path(&self) -> Option<&'static str> {
        match self {
            RouteName::Home => Some(""),
            RouteName::Checkout => Some("checkout"),
            RouteName::Login => Some("login"),
            RouteName::Payment => Some("payment"),
            RouteName::Admin => Some("admin"),
            RouteName::AdminUsers => Some("admin/users"),
            RouteName::AdminSalary => Some("admin/salary"),
            RouteName::AdminSettings => Some("admin/settings"),
            RouteName::Category | RouteName::Product => None,
        }
    }
}

/// Parsed navigable location. Replaced wholesale on every navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: RouteName,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
}

impl Default for Route {
    fn default() -> Self {
        Self::home()
    }
}

impl Route {
    pub fn named(name: RouteName) -> Self {
        let mut route = Self {
            name,
            params: BTreeMap::new(),
            query: BTreeMap::new(),
        };
        // keep the param shape parse() produces
        match name {
            RouteName::Category => {
                route.params.insert("cat".to_string(), String::new());
                route.params.insert("sub".to_string(), String::new());
            }
            RouteName::Product => {
                route.params.insert("id".to_string(), String::new());
            }
            _ => {}
        }
        route
    }

    pub fn home() -> Self {
        Self::named(RouteName::Home)
    }

    pub fn category(cat: &str, sub: &str) -> Self {
        Self::named(RouteName::Category)
            .with_param("cat", cat)
            .with_param("sub", sub)
    }

    pub fn product(id: &str) -> Self {
        Self::named(RouteName::Product).with_param("id", id)
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// Path parameter, empty when absent.
    pub fn param(&self, key: &str) -> &str {
        self.params.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Decoded path segments this route renders to.
    pub fn path_segments(&self) -> Vec<String> {
        match self.name {
            RouteName::Category => {
                let mut segments = vec!["category".to_string()];
                let cat = self.param("cat");
                let sub = self.param("sub");
                // a subcategory cannot be addressed without its category
                if !cat.is_empty() {
                    segments.push(cat.to_string());
                    if !sub.is_empty() {
                        segments.push(sub.to_string());
                    }
                }
                segments
            }
            RouteName::Product => {
                let mut segments = vec!["product".to_string()];
                let id = self.param("id");
                if !id.is_empty() {
                    segments.push(id.to_string());
                }
                segments
            }
            name => name
                .static_path()
                .unwrap_or("")
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Canonical `#/...` fragment, segments and query values percent-encoded.
    pub fn to_fragment(&self) -> String {
        let path = self
            .path_segments()
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let mut fragment = format!("#/{}", path);
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            fragment.push('?');
            fragment.push_str(&query);
        }
        fragment
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments() {
        assert_eq!(Route::home().to_fragment(), "#/");
        assert_eq!(Route::category("game", "").to_fragment(), "#/category/game");
        assert_eq!(
            Route::category("game", "Mobile Legends").to_fragment(),
            "#/category/game/Mobile%20Legends"
        );
        assert_eq!(Route::product("ml_86").to_fragment(), "#/product/ml_86");
        assert_eq!(Route::named(RouteName::AdminSalary).to_fragment(), "#/admin/salary");
        assert_eq!(
            Route::named(RouteName::Login).with_query("next", "cart").to_fragment(),
            "#/login?next=cart"
        );
    }

    #[test]
    fn test_param_defaults_to_empty() {
        let route = Route::named(RouteName::Category);
        assert_eq!(route.param("cat"), "");
        assert_eq!(route.param("missing"), "");
        assert_eq!(route.query_value("next"), None);
    }

    #[test]
    fn test_cart_access_pages() {
        let guarded: Vec<RouteName> = RouteName::all()
            .into_iter()
            .filter(|n| n.requires_cart_access())
            .collect();
        assert_eq!(guarded, vec![RouteName::Checkout, RouteName::Payment]);
    }

    #[test]
    fn test_admin_pages() {
        let admin = RouteName::all().into_iter().filter(|n| n.is_admin()).count();
        assert_eq!(admin, 4);
        assert!(!RouteName::Home.is_admin());
        assert!(RouteName::AdminSettings.is_admin());
    }
}

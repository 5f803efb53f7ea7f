use serde::{Deserialize, Serialize};

use super::route::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

fn title_for(segment: &str) -> Option<&'static str> {
    match segment {
        "category" => Some("Category"),
        "sub" => Some("Subcategory"),
        "product" => Some("Product"),
        "checkout" => Some("Checkout"),
        "payment" => Some("Payment"),
        "login" => Some("Login"),
        "admin" => Some("Admin"),
        "users" => Some("Users"),
        "salary" => Some("Salary"),
        "settings" => Some("Settings"),
        _ => None,
    }
}

/// `mobile-legends` -> `Mobile Legends`
pub fn capitalize(segment: &str) -> String {
    segment
        .replace(['-', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trail from `Home` down to the current page. Every crumb links to the
/// route prefix it names.
pub fn breadcrumbs(route: &Route) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        href: "#/".to_string(),
    }];

    let segments = route.path_segments();
    let mut href = String::from("#");
    for segment in &segments {
        href.push('/');
        href.push_str(&urlencoding::encode(segment));
        let label = title_for(segment)
            .map(str::to_string)
            .unwrap_or_else(|| capitalize(segment));
        crumbs.push(Crumb {
            label,
            href: href.clone(),
        });
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{parse, RouteName};

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mobile-legends"), "Mobile Legends");
        assert_eq!(capitalize("netflix_prem"), "Netflix Prem");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_home_has_single_crumb() {
        let crumbs = breadcrumbs(&Route::home());
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].href, "#/");
    }

    #[test]
    fn test_category_trail() {
        let crumbs = breadcrumbs(&parse("#/category/game/Mobile%20Legends"));
        let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Category", "Game", "Mobile Legends"]);
        assert_eq!(crumbs[2].href, "#/category/game");
        assert_eq!(crumbs[3].href, "#/category/game/Mobile%20Legends");
    }

    #[test]
    fn test_admin_trail() {
        let crumbs = breadcrumbs(&Route::named(RouteName::AdminSalary));
        let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Admin", "Salary"]);
        assert_eq!(crumbs[2].href, "#/admin/salary");
    }
}

//! Hash-fragment parser.
//!
//! `parse` is total: any string yields a [`Route`], unknown or malformed
//! locations degrade to `home`.

use std::collections::BTreeMap;

use super::route::{Route, RouteName};

pub fn parse(fragment: &str) -> Route {
    let rest = fragment.strip_prefix('#').unwrap_or(fragment);
    let rest = rest.trim_start_matches('/');

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, query),
        None => (rest, ""),
    };

    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode)
        .collect();
    let segment = |i: usize| segments.get(i).map(String::as_str).unwrap_or("");

    let mut route = match segment(0) {
        "category" => Route::category(segment(1), segment(2)),
        "product" => Route::product(segment(1)),
        "checkout" => Route::named(RouteName::Checkout),
        "login" => Route::named(RouteName::Login),
        "payment" => Route::named(RouteName::Payment),
        "admin" => Route::named(match segment(1) {
            "users" => RouteName::AdminUsers,
            "salary" => RouteName::AdminSalary,
            "settings" => RouteName::AdminSettings,
            _ => RouteName::Admin,
        }),
        _ => Route::home(),
    };
    route.query = parse_query(query);
    route
}

/// `application/x-www-form-urlencoded` pairs; the last duplicate key wins.
pub fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_form(key);
        if key.is_empty() {
            continue;
        }
        map.insert(key, decode_form(value));
    }
    map
}

/// Percent-decode, keeping the raw text when it is not valid UTF-8.
fn decode(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

fn decode_form(raw: &str) -> String {
    decode(&raw.replace('+', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_variants() {
        for fragment in ["", "#", "#/", "/", "#//", "#/?"] {
            assert_eq!(parse(fragment), Route::home(), "fragment {:?}", fragment);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_home() {
        let route = parse("#/nonsense/xyz");
        assert_eq!(route.name, RouteName::Home);
        assert!(route.params.is_empty());
    }

    #[test]
    fn test_category_params_are_decoded() {
        let route = parse("#/category/game/Mobile%20Legends");
        assert_eq!(route.name, RouteName::Category);
        assert_eq!(route.param("cat"), "game");
        assert_eq!(route.param("sub"), "Mobile Legends");
    }

    #[test]
    fn test_category_missing_segments_are_empty() {
        let route = parse("#/category");
        assert_eq!(route.name, RouteName::Category);
        assert_eq!(route.params.get("cat").map(String::as_str), Some(""));
        assert_eq!(route.params.get("sub").map(String::as_str), Some(""));

        let route = parse("#/category/apps/");
        assert_eq!(route.param("cat"), "apps");
        assert_eq!(route.param("sub"), "");
    }

    #[test]
    fn test_empty_segments_are_tolerated() {
        assert_eq!(parse("#//category//data///Telkomsel/"), parse("#/category/data/Telkomsel"));
    }

    #[test]
    fn test_product() {
        let route = parse("#/product/ml_86");
        assert_eq!(route.name, RouteName::Product);
        assert_eq!(route.param("id"), "ml_86");

        assert_eq!(parse("#/product").param("id"), "");
    }

    #[test]
    fn test_login_query() {
        let route = parse("#/login?next=cart");
        assert_eq!(route.name, RouteName::Login);
        assert_eq!(route.query_value("next"), Some("cart"));
        assert!(route.params.is_empty());
    }

    #[test]
    fn test_query_rules() {
        let query = parse_query("a=1&b=x%20y&a=2&c&=skip&d=e+f&&");
        assert_eq!(query.get("a").map(String::as_str), Some("2"));
        assert_eq!(query.get("b").map(String::as_str), Some("x y"));
        assert_eq!(query.get("c").map(String::as_str), Some(""));
        assert_eq!(query.get("d").map(String::as_str), Some("e f"));
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn test_simple_pages() {
        assert_eq!(parse("#/checkout").name, RouteName::Checkout);
        assert_eq!(parse("#/payment?method=qris").query_value("method"), Some("qris"));
        assert_eq!(parse("checkout").name, RouteName::Checkout);
    }

    #[test]
    fn test_admin_pages() {
        assert_eq!(parse("#/admin").name, RouteName::Admin);
        assert_eq!(parse("#/admin/users").name, RouteName::AdminUsers);
        assert_eq!(parse("#/admin/salary").name, RouteName::AdminSalary);
        assert_eq!(parse("#/admin/settings/").name, RouteName::AdminSettings);
        assert_eq!(parse("#/admin/reports").name, RouteName::Admin);
    }

    #[test]
    fn test_total_on_odd_input() {
        let inputs = [
            "#/%",
            "#/category/%zz",
            "#/product/%FF%FE",
            "#/??&&==",
            "#\u{0}/login",
            "################",
            "#/категория/игра",
            "#/login?next=%E0%A4%A",
        ];
        for input in inputs {
            let route = parse(input);
            assert!(RouteName::all().contains(&route.name));
            assert_eq!(route, parse(input));
        }
        // undecodable bytes stay verbatim
        assert_eq!(parse("#/product/%FF%FE").param("id"), "%FF%FE");
    }

    #[test]
    fn test_fragment_parses_back() {
        let routes = [
            Route::category("game", "Mobile Legends"),
            Route::product("spotify_prem"),
            Route::named(RouteName::Login).with_query("next", "cart"),
            Route::named(RouteName::AdminUsers),
        ];
        for route in routes {
            assert_eq!(parse(&route.to_fragment()), route);
        }
    }
}

//! Navigation controller: holds the current route and the session flags the
//! redirect guards look at.
//!
//! Browser glue feeds it hash changes and user intents; every transition
//! returns a [`NavOutcome`]. On `Redirect` the controller has already switched
//! to the target route and the caller only has to write the fragment.
//!
//! Cart access policy: adding to the cart is always allowed, opening the
//! drawer or a cart page (checkout, payment) needs a logged-in session when
//! `require_login` is on.

use serde::{Deserialize, Serialize};

use super::parser::parse;
use super::route::{Route, RouteName};

/// Upper bound on chained guard redirects for one transition.
const MAX_GUARD_PASSES: usize = 4;

/// What the user was trying to reach when sent to the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextAction {
    Cart,
    Checkout,
    Payment,
}

impl NextAction {
    pub fn code(&self) -> &'static str {
        match self {
            NextAction::Cart => "cart",
            NextAction::Checkout => "checkout",
            NextAction::Payment => "payment",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cart" => Some(NextAction::Cart),
            "checkout" => Some(NextAction::Checkout),
            "payment" => Some(NextAction::Payment),
            _ => None,
        }
    }

    fn for_route(name: RouteName) -> Option<Self> {
        match name {
            RouteName::Checkout => Some(NextAction::Checkout),
            RouteName::Payment => Some(NextAction::Payment),
            _ => None,
        }
    }

    /// Where a successful login continues to.
    pub fn target(&self) -> Route {
        match self {
            NextAction::Cart | NextAction::Checkout => Route::named(RouteName::Checkout),
            NextAction::Payment => Route::named(RouteName::Payment),
        }
    }
}

impl Route {
    /// `#/login?next=<action>`
    pub fn login_for(next: NextAction) -> Self {
        Route::named(RouteName::Login).with_query("next", next.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Stay,
    Redirect(Route),
}

impl NavOutcome {
    pub fn redirect(&self) -> Option<&Route> {
        match self {
            NavOutcome::Stay => None,
            NavOutcome::Redirect(route) => Some(route),
        }
    }
}

/// Login detour in progress: the action named in `?next=` and the exact route
/// to resume once the session is established.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLogin {
    next: NextAction,
    resume: Route,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    route: Route,
    authenticated: bool,
    cart_open: bool,
    pending: Option<PendingLogin>,
    require_login: bool,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NavigationController {
    pub fn new(require_login: bool) -> Self {
        Self {
            route: Route::home(),
            authenticated: false,
            cart_open: false,
            pending: None,
            require_login,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn pending(&self) -> Option<NextAction> {
        self.pending.as_ref().map(|p| p.next)
    }

    fn cart_allowed(&self) -> bool {
        self.authenticated || !self.require_login
    }

    /// Whether a payment confirmed earlier may still go through: the shopper
    /// is on the payment page and holds the session cart access needs.
    pub fn payment_still_valid(&self) -> bool {
        self.route.name == RouteName::Payment && self.cart_allowed()
    }

    /// Re-parse the location fragment and re-evaluate the guards.
    pub fn handle_hash_change(&mut self, fragment: &str) -> NavOutcome {
        self.navigate(parse(fragment))
    }

    pub fn navigate(&mut self, route: Route) -> NavOutcome {
        log::debug!("nav: {} -> {}", self.route, route);
        if route.name != RouteName::Login {
            // the login page was abandoned
            self.pending = None;
        }
        self.cart_open = false;
        self.route = route;
        self.settle()
    }

    /// Open the cart drawer, or send an anonymous session to log in first.
    pub fn open_cart(&mut self) -> NavOutcome {
        if self.cart_allowed() {
            self.cart_open = true;
            return NavOutcome::Stay;
        }
        log::debug!("nav: cart requested without a session");
        self.cart_open = false;
        self.pending = Some(PendingLogin {
            next: NextAction::Cart,
            resume: NextAction::Cart.target(),
        });
        self.route = Route::login_for(NextAction::Cart);
        match self.settle() {
            NavOutcome::Stay => NavOutcome::Redirect(self.route.clone()),
            redirect => redirect,
        }
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Mark the session as logged in and continue to whatever was pending.
    pub fn login_succeeded(&mut self) -> NavOutcome {
        self.authenticated = true;
        self.settle()
    }

    pub fn logout(&mut self) -> NavOutcome {
        self.authenticated = false;
        self.cart_open = false;
        self.pending = None;
        self.settle()
    }

    /// Apply guards until none fires.
    fn settle(&mut self) -> NavOutcome {
        let start = self.route.clone();
        for _ in 0..MAX_GUARD_PASSES {
            match self.guard() {
                Some(target) => {
                    log::debug!("nav: guard redirect {} -> {}", self.route, target);
                    self.route = target;
                }
                None => {
                    return if self.route == start {
                        NavOutcome::Stay
                    } else {
                        NavOutcome::Redirect(self.route.clone())
                    };
                }
            }
        }
        log::error!("nav: guards did not settle starting from {}, falling back to home", start);
        self.pending = None;
        self.route = Route::home();
        NavOutcome::Redirect(self.route.clone())
    }

    /// One guard evaluation. Returns the redirect target, if any.
    fn guard(&mut self) -> Option<Route> {
        if !self.cart_allowed() && self.route.name.requires_cart_access() {
            self.cart_open = false;
            if let Some(next) = NextAction::for_route(self.route.name) {
                self.pending = Some(PendingLogin {
                    next,
                    resume: self.route.clone(),
                });
                return Some(Route::login_for(next));
            }
        }

        if self.route.name == RouteName::Login && self.authenticated {
            // in-memory detour first; a bare `?next=` survives a reload
            let resume = self.pending.take().map(|p| p.resume).or_else(|| {
                self.route
                    .query_value("next")
                    .and_then(NextAction::from_code)
                    .map(|next| next.target())
            });
            if let Some(target) = resume {
                self.cart_open = false;
                return Some(target);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::catalog::Catalog;

    #[test]
    fn test_add_from_listing_then_login_lands_on_checkout() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let mut nav = NavigationController::new(true);
        assert_eq!(nav.handle_hash_change("#/category/game"), NavOutcome::Stay);

        // adding is allowed, opening the drawer afterwards is not
        cart.add(catalog.find_str("ml_86").unwrap(), 1, "12345").unwrap();
        let outcome = nav.open_cart();
        let login = outcome.redirect().cloned().unwrap();
        assert_eq!(login.name, RouteName::Login);
        assert_eq!(login.query_value("next"), Some("cart"));
        assert_eq!(nav.route(), &login);
        assert!(!nav.is_cart_open());
        assert_eq!(cart.count(), 1);

        // browser echoes the written fragment back; nothing else happens
        assert_eq!(nav.handle_hash_change(&login.to_fragment()), NavOutcome::Stay);
        assert_eq!(nav.pending(), Some(NextAction::Cart));

        let outcome = nav.login_succeeded();
        assert_eq!(outcome, NavOutcome::Redirect(Route::named(RouteName::Checkout)));
        assert_eq!(nav.pending(), None);
        assert!(nav.route().query.is_empty());

        // echo of the checkout fragment settles without another redirect
        assert_eq!(nav.handle_hash_change("#/checkout"), NavOutcome::Stay);
        assert_eq!(nav.route().name, RouteName::Checkout);
    }

    #[test]
    fn test_direct_checkout_requires_login() {
        let mut nav = NavigationController::new(true);
        let outcome = nav.handle_hash_change("#/checkout");
        assert_eq!(outcome, NavOutcome::Redirect(Route::login_for(NextAction::Checkout)));

        assert_eq!(
            nav.login_succeeded(),
            NavOutcome::Redirect(Route::named(RouteName::Checkout))
        );
    }

    #[test]
    fn test_payment_marker_returns_to_payment() {
        let mut nav = NavigationController::new(true);
        nav.handle_hash_change("#/payment");
        assert_eq!(nav.route(), &Route::login_for(NextAction::Payment));
        assert_eq!(
            nav.login_succeeded(),
            NavOutcome::Redirect(Route::named(RouteName::Payment))
        );
    }

    #[test]
    fn test_payment_resumes_with_chosen_method() {
        let mut nav = NavigationController::new(true);
        nav.handle_hash_change("#/payment?method=ovo");
        assert_eq!(nav.pending(), Some(NextAction::Payment));

        let target = nav.login_succeeded().redirect().cloned().unwrap();
        assert_eq!(target.name, RouteName::Payment);
        assert_eq!(target.query_value("method"), Some("ovo"));
        assert_eq!(nav.route(), &target);
    }

    #[test]
    fn test_relogin_after_logout_keeps_payment_method() {
        let mut nav = NavigationController::new(true);
        nav.login_succeeded();
        assert_eq!(nav.handle_hash_change("#/payment?method=dana"), NavOutcome::Stay);

        let login = nav.logout().redirect().cloned().unwrap();
        assert_eq!(login, Route::login_for(NextAction::Payment));
        // browser echo of the login fragment keeps the detour
        assert_eq!(nav.handle_hash_change(&login.to_fragment()), NavOutcome::Stay);

        let target = nav.login_succeeded().redirect().cloned().unwrap();
        assert_eq!(target.to_fragment(), "#/payment?method=dana");
    }

    #[test]
    fn test_open_cart_returns_the_login_redirect() {
        let mut nav = NavigationController::new(true);
        nav.handle_hash_change("#/product/ml_86");
        assert_eq!(
            nav.open_cart(),
            NavOutcome::Redirect(Route::login_for(NextAction::Cart))
        );
        // already on login with a marker: opening again changes nothing visible
        assert_eq!(
            nav.open_cart(),
            NavOutcome::Redirect(Route::login_for(NextAction::Cart))
        );
        assert_eq!(nav.pending(), Some(NextAction::Cart));
    }

    #[test]
    fn test_payment_invalidated_by_leaving_or_logging_out() {
        let mut nav = NavigationController::new(true);
        nav.login_succeeded();
        nav.handle_hash_change("#/payment?method=qris");
        assert!(nav.payment_still_valid());

        nav.handle_hash_change("#/category/game");
        assert!(!nav.payment_still_valid());

        nav.handle_hash_change("#/payment?method=qris");
        nav.logout();
        assert!(!nav.payment_still_valid());

        let mut open = NavigationController::new(false);
        open.handle_hash_change("#/payment");
        assert!(open.payment_still_valid());
    }

    #[test]
    fn test_login_without_marker_stays() {
        let mut nav = NavigationController::new(true);
        assert_eq!(nav.handle_hash_change("#/login"), NavOutcome::Stay);
        assert_eq!(nav.login_succeeded(), NavOutcome::Stay);
        assert_eq!(nav.route().name, RouteName::Login);
    }

    #[test]
    fn test_query_marker_alone_is_honoured() {
        // e.g. a reload on #/login?next=cart drops in-memory state
        let mut nav = NavigationController::new(true);
        nav.handle_hash_change("#/login?next=cart");
        assert_eq!(
            nav.login_succeeded(),
            NavOutcome::Redirect(Route::named(RouteName::Checkout))
        );
    }

    #[test]
    fn test_unknown_marker_is_ignored() {
        let mut nav = NavigationController::new(true);
        nav.handle_hash_change("#/login?next=admin");
        assert_eq!(nav.login_succeeded(), NavOutcome::Stay);
    }

    #[test]
    fn test_abandoned_login_drops_marker() {
        let mut nav = NavigationController::new(true);
        nav.open_cart();
        assert_eq!(nav.pending(), Some(NextAction::Cart));

        nav.handle_hash_change("#/");
        assert_eq!(nav.pending(), None);

        nav.handle_hash_change("#/login");
        assert_eq!(nav.login_succeeded(), NavOutcome::Stay);
    }

    #[test]
    fn test_authenticated_cart_opens_in_place() {
        let mut nav = NavigationController::new(true);
        nav.login_succeeded();
        nav.handle_hash_change("#/product/ml_86");

        assert_eq!(nav.open_cart(), NavOutcome::Stay);
        assert!(nav.is_cart_open());
        assert_eq!(nav.route().name, RouteName::Product);

        nav.close_cart();
        assert!(!nav.is_cart_open());
    }

    #[test]
    fn test_navigation_closes_drawer() {
        let mut nav = NavigationController::new(false);
        nav.open_cart();
        assert!(nav.is_cart_open());
        nav.handle_hash_change("#/checkout");
        assert!(!nav.is_cart_open());
    }

    #[test]
    fn test_logout_on_checkout_redirects_to_login() {
        let mut nav = NavigationController::new(true);
        nav.login_succeeded();
        assert_eq!(nav.handle_hash_change("#/checkout"), NavOutcome::Stay);

        let outcome = nav.logout();
        assert_eq!(outcome, NavOutcome::Redirect(Route::login_for(NextAction::Checkout)));
        assert!(!nav.is_authenticated());
    }

    #[test]
    fn test_policy_off_never_redirects() {
        let mut nav = NavigationController::new(false);
        assert_eq!(nav.open_cart(), NavOutcome::Stay);
        assert!(nav.is_cart_open());
        assert_eq!(nav.handle_hash_change("#/checkout"), NavOutcome::Stay);
        assert_eq!(nav.handle_hash_change("#/payment"), NavOutcome::Stay);
    }

    #[test]
    fn test_guards_are_idempotent_for_every_page() {
        for authenticated in [false, true] {
            for name in RouteName::all() {
                let mut nav = NavigationController::new(true);
                if authenticated {
                    nav.login_succeeded();
                }
                nav.navigate(Route::named(name));
                let settled = nav.route().clone();
                // re-applying the settled route must not move again
                assert_eq!(nav.navigate(settled.clone()), NavOutcome::Stay, "{:?}", name);
                assert_eq!(nav.route(), &settled);
            }
        }
    }

    #[test]
    fn test_admin_is_not_guarded() {
        let mut nav = NavigationController::new(true);
        assert_eq!(nav.handle_hash_change("#/admin/salary"), NavOutcome::Stay);
    }
}

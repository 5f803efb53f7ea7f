use crate::shared::location::{push_fragment, replace_fragment};
use contracts::domain::cart::Cart;
use contracts::domain::catalog::Catalog;
use contracts::domain::checkout::{place_order, settle_order, OrderReceipt};
use contracts::enums::PaymentMethod;
use contracts::routing::{NavOutcome, NavigationController, Route, RouteName};
use contracts::shared::config::StoreConfig;
use contracts::shared::money::format_price;
use contracts::system::auth::{sign_in, LoginRequest, Session};
use leptos::prelude::*;

/// Session-wide application state. Page variants read it through context and
/// change it only through the methods below.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav: RwSignal<NavigationController>,
    pub cart: RwSignal<Cart>,
    pub session: RwSignal<Option<Session>>,
    pub last_receipt: RwSignal<Option<OrderReceipt>>,
    pub config: StoredValue<StoreConfig>,
}

impl AppGlobalContext {
    pub fn new(config: StoreConfig) -> Self {
        let require_login = config.cart.require_login;
        Self {
            nav: RwSignal::new(NavigationController::new(require_login)),
            cart: RwSignal::new(Cart::new()),
            session: RwSignal::new(None),
            last_receipt: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        Catalog::builtin()
    }

    // ------------------------------------------------------------------
    // Reads (tracked)
    // ------------------------------------------------------------------

    pub fn route(&self) -> Route {
        self.nav.with(|nav| nav.route().clone())
    }

    pub fn route_name(&self) -> RouteName {
        self.nav.with(|nav| nav.route().name)
    }

    pub fn is_authenticated(&self) -> bool {
        self.nav.with(|nav| nav.is_authenticated())
    }

    pub fn is_cart_open(&self) -> bool {
        self.nav.with(|nav| nav.is_cart_open())
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.with(|cart| cart.count())
    }

    pub fn cart_total(&self) -> u64 {
        let catalog = self.catalog();
        self.cart.with(|cart| cart.total(catalog))
    }

    /// Price with the configured currency symbol.
    pub fn price(&self, value: u64) -> String {
        self.config
            .with_value(|config| format_price(&config.store.currency_symbol, value))
    }

    pub fn store_name(&self) -> String {
        self.config.with_value(|config| config.store.name.clone())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Entry point for the `hashchange` subscription.
    pub fn on_hash_change(&self, fragment: &str) {
        let outcome = self
            .nav
            .try_update(|nav| nav.handle_hash_change(fragment))
            .unwrap_or(NavOutcome::Stay);
        self.apply(outcome);
    }

    /// Request navigation; the page changes once the browser reports the new
    /// fragment.
    pub fn navigate(&self, route: &Route) {
        log::info!("navigate: {}", route);
        push_fragment(&route.to_fragment());
    }

    /// Guard redirect of the URL the browser just reported: the guarded
    /// entry is replaced so Back does not return to it.
    fn apply(&self, outcome: NavOutcome) {
        if let Some(target) = outcome.redirect() {
            log::info!("redirect: {}", target);
            replace_fragment(&target.to_fragment());
        }
    }

    /// Opening the cart from a page the user is allowed on pushes the login
    /// detour, so Back returns to that page.
    pub fn open_cart(&self) {
        let outcome = self
            .nav
            .try_update(|nav| nav.open_cart())
            .unwrap_or(NavOutcome::Stay);
        if let Some(target) = outcome.redirect() {
            log::info!("cart needs login: {}", target);
            push_fragment(&target.to_fragment());
        }
    }

    pub fn close_cart(&self) {
        self.nav.update(|nav| nav.close_cart());
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add to the cart and open it (which may redirect to login).
    pub fn add_to_cart(&self, product_id: &str, qty: u32, meta: String) -> Result<(), String> {
        let product = self
            .catalog()
            .find_str(product_id)
            .ok_or_else(|| format!("Unknown product: {}", product_id))?;
        self.cart
            .try_update(|cart| cart.add(product, qty, meta))
            .unwrap_or(Ok(()))
            .map_err(|e| e.to_string())?;
        self.open_cart();
        Ok(())
    }

    pub fn remove_from_cart(&self, product_id: &str, meta: &str) {
        self.cart.update(|cart| {
            cart.remove(product_id, meta);
        });
    }

    // ------------------------------------------------------------------
    // Session (mock)
    // ------------------------------------------------------------------

    pub fn login(&self, request: LoginRequest) {
        self.session.set(Some(sign_in(&request)));
        let outcome = self
            .nav
            .try_update(|nav| nav.login_succeeded())
            .unwrap_or(NavOutcome::Stay);
        self.apply(outcome);
    }

    pub fn logout(&self) {
        self.session.set(None);
        let outcome = self
            .nav
            .try_update(|nav| nav.logout())
            .unwrap_or(NavOutcome::Stay);
        self.apply(outcome);
    }

    // ------------------------------------------------------------------
    // Checkout
    // ------------------------------------------------------------------

    /// Freeze the cart into an order at the moment payment is confirmed.
    pub fn place_order(&self, method: PaymentMethod) -> Result<OrderReceipt, String> {
        let catalog = self.catalog();
        self.cart
            .with_untracked(|cart| place_order(cart, catalog, method))
            .map_err(|e| e.to_string())
    }

    /// Finish a placed order after the processing delay.
    ///
    /// Fails without touching the cart when the shopper has left the payment
    /// page or lost the session that cart access requires.
    pub fn complete_payment(&self, receipt: OrderReceipt) -> Result<OrderReceipt, String> {
        if !self.nav.with_untracked(|nav| nav.payment_still_valid()) {
            log::warn!("payment {} cancelled: session or page changed", receipt.reference());
            return Err("Payment cancelled.".to_string());
        }
        self.cart.update(|cart| settle_order(cart, &receipt));
        self.last_receipt.set(Some(receipt.clone()));
        Ok(receipt)
    }
}

/// Shorthand used by every page variant.
pub fn use_app() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

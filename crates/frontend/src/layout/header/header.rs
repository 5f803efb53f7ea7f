use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::routing::{Route, RouteName};
use leptos::prelude::*;

/// Storefront top bar: brand, theme toggle, account and cart buttons.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app();
    let store_name = ctx.store_name();

    let cart_count = move || ctx.cart_count();
    let account_label = move || {
        ctx.session
            .get()
            .map(|s| s.display_name)
            .unwrap_or_else(|| "Login".to_string())
    };

    let on_account = move |_| {
        if ctx.is_authenticated() {
            ctx.logout();
        } else {
            ctx.navigate(&Route::named(RouteName::Login));
        }
    };

    view! {
        <header data-zone="header" class="header">
            <a href="#/" class="header__brand">{store_name}</a>
            <nav class="header__nav">
                <a href="#/" class=move || if ctx.route_name().is_admin() { "" } else { "is-active" }>"Shop"</a>
                <a href="#/admin" class=move || if ctx.route_name().is_admin() { "is-active" } else { "" }>"Admin"</a>
            </nav>
            <div class="header__actions">
                <ThemeToggle />
                <button
                    class="icon-btn header__account"
                    on:click=on_account
                    title=move || if ctx.is_authenticated() { "Logout" } else { "Login" }
                >
                    {move || if ctx.is_authenticated() { icon("log-out") } else { icon("user") }}
                    <span>{account_label}</span>
                </button>
                <button class="icon-btn header__cart" on:click=move |_| ctx.open_cart() title="Open cart">
                    {icon("cart")}
                    <Show when=move || { cart_count() > 0 }>
                        <span class="badge">{cart_count}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}

use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use contracts::routing::{Route, RouteName};
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, PartialEq)]
struct DrawerRow {
    key: String,
    product_id: String,
    meta: String,
    name: String,
    logo: String,
    qty: u32,
    subtotal: u64,
}

/// Slide-in cart panel. Visible while the navigation controller reports the
/// cart as open.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_app();
    let is_open = move || ctx.is_cart_open();

    let rows = Memo::new(move |_| {
        let catalog = ctx.catalog();
        ctx.cart.with(|cart| {
            cart.priced_lines(catalog)
                .into_iter()
                .map(|priced| DrawerRow {
                    key: priced.line.key(),
                    product_id: priced.line.product_id.to_string(),
                    meta: priced.line.meta.clone(),
                    name: priced.product.name.clone(),
                    logo: priced.product.logo.clone(),
                    qty: priced.line.qty,
                    subtotal: priced.subtotal,
                })
                .collect::<Vec<_>>()
        })
    });

    let go_checkout = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.close_cart();
        ctx.navigate(&Route::named(RouteName::Checkout));
    };

    view! {
        <div class=move || if is_open() { "drawer is-open" } else { "drawer" }>
            <div class="drawer__backdrop" on:click=move |_| ctx.close_cart()></div>
            <aside class="drawer__panel">
                <div class="drawer__header">
                    <div class="drawer__title">"Your Cart"</div>
                    <button class="icon-btn" on:click=move |_| ctx.close_cart()>{icon("x")}</button>
                </div>
                <div class="drawer__body">
                    <Show when=move || rows.with(|r| r.is_empty())>
                        <div class="muted">"Cart is empty. Add some products."</div>
                    </Show>
                    <For
                        each=move || rows.get()
                        key=|row| (row.key.clone(), row.qty)
                        children=move |row: DrawerRow| {
                            let product_id = row.product_id.clone();
                            let meta = row.meta.clone();
                            view! {
                                <div class="cart-line">
                                    <div class="cart-line__head">
                                        <img src=row.logo.clone() alt=row.name.clone() class="cart-line__logo" />
                                        <div class="cart-line__info">
                                            <div class="cart-line__name">{row.name.clone()}</div>
                                            <div class="cart-line__meta">{row.meta.clone()}</div>
                                        </div>
                                        <div class="cart-line__qty">{format!("x{}", row.qty)}</div>
                                    </div>
                                    <div class="cart-line__foot">
                                        <div>{ctx.price(row.subtotal)}</div>
                                        <button
                                            class="btn btn--glass"
                                            on:click=move |_| ctx.remove_from_cart(&product_id, &meta)
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
                <div class="drawer__footer">
                    <div class="drawer__total">
                        <span class="muted">"Total"</span>
                        <span class="strong">{move || ctx.price(ctx.cart_total())}</span>
                    </div>
                    <a href="#/checkout" class="btn btn--primary btn--block" on:click=go_checkout>
                        "Checkout"
                    </a>
                </div>
            </aside>
        </div>
    }
}

use crate::layout::global_context::use_app;
use crate::shared::components::ui::Button;
use contracts::enums::PaymentMethod;
use contracts::routing::{Route, RouteName};
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, PartialEq)]
struct CheckoutRow {
    key: String,
    title: String,
    meta: String,
    qty: u32,
    subtotal: u64,
}

/// Order review with payment method selection.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let ctx = use_app();
    let methods = ctx.config.with_value(|config| config.checkout.payment_methods.clone());
    let method = RwSignal::new(ctx.config.with_value(|config| config.default_payment_method()));

    let rows = Memo::new(move |_| {
        let catalog = ctx.catalog();
        ctx.cart.with(|cart| {
            cart.priced_lines(catalog)
                .into_iter()
                .map(|priced| CheckoutRow {
                    key: priced.line.key(),
                    title: format!("{} {}", priced.product.subcategory, priced.product.name),
                    meta: priced.line.meta.clone(),
                    qty: priced.line.qty,
                    subtotal: priced.subtotal,
                })
                .collect::<Vec<_>>()
        })
    });
    let is_empty = move || rows.with(|r| r.is_empty());

    let pay_now = move |_: ev::MouseEvent| {
        let route = Route::named(RouteName::Payment).with_query("method", method.get_untracked().code());
        ctx.navigate(&route);
    };

    view! {
        <section class="section section--narrow">
            <h2 class="section__title">"Checkout"</h2>
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"Your cart is empty."</p>
                        <a href=Route::home().to_fragment() class="btn btn--primary">"Browse products"</a>
                    </div>
                }
            >
                <div class="checkout-lines">
                    <For
                        each=move || rows.get()
                        key=|row| (row.key.clone(), row.qty)
                        children=move |row: CheckoutRow| view! {
                            <div class="checkout-line">
                                <div>
                                    <div class="strong">{row.title.clone()}</div>
                                    <div class="muted">{format!("{} · x{}", row.meta, row.qty)}</div>
                                </div>
                                <div>{ctx.price(row.subtotal)}</div>
                            </div>
                        }
                    />
                </div>

                <h3 class="section__subtitle">"Payment method"</h3>
                <div class="chips">
                    {methods
                        .iter()
                        .copied()
                        .map(|m: PaymentMethod| view! {
                            <Button
                                variant="chip"
                                active=Signal::derive(move || method.get() == m)
                                on_click=Callback::new(move |_| method.set(m))
                            >
                                {m.display_name()}
                            </Button>
                        })
                        .collect_view()}
                </div>

                <div class="checkout-total">
                    <span class="muted">"Total"</span>
                    <span class="strong">{move || ctx.price(ctx.cart_total())}</span>
                </div>
                <Button block=true on_click=Callback::new(pay_now)>"Pay Now"</Button>
            </Show>
        </section>
    }
}

use crate::layout::global_context::use_app;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::domain::catalog::Product;
use contracts::routing::Route;
use leptos::ev;
use leptos::prelude::*;

/// Quick-buy card: buyer input, quantity stepper, price preview, add button.
///
/// The input and quantity are drafts owned by the card and disappear with it.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app();

    let meta = RwSignal::new(String::new());
    let qty = RwSignal::new(1u32);
    let error = RwSignal::new(Option::<String>::None);

    let unit_price = product.price;
    let line_price = move || ctx.price(unit_price.saturating_mul(u64::from(qty.get())));
    let href = Route::product(product.id.as_str()).to_fragment();
    let input_label = product.input_label.clone();
    let product_id = product.id.to_string();

    let on_add = {
        let input_label = input_label.clone();
        move |_: ev::MouseEvent| {
            let value = meta.get_untracked().trim().to_string();
            if value.is_empty() {
                error.set(Some(format!("Please enter your {}", input_label)));
                return;
            }
            match ctx.add_to_cart(&product_id, qty.get_untracked(), value) {
                Ok(()) => {
                    error.set(None);
                    qty.set(1);
                }
                Err(e) => error.set(Some(e)),
            }
        }
    };

    view! {
        <div class="product-card">
            <div class="product-card__head">
                <img src=product.logo.clone() alt=product.name.clone() class="product-card__logo" />
                <div>
                    <a href=href class="product-card__name">{product.name.clone()}</a>
                    <div class="product-card__sub">{product.subcategory.clone()}</div>
                </div>
            </div>

            <Input
                label=input_label.clone()
                value=meta
                placeholder=input_label.clone()
            />

            <div class="product-card__row">
                <div class="product-card__price">{line_price}</div>
                <div class="stepper">
                    <button class="icon-btn" on:click=move |_| qty.update(|q| *q = q.saturating_sub(1).max(1))>
                        {icon("minus")}
                    </button>
                    <span class="stepper__value">{move || qty.get()}</span>
                    <button class="icon-btn" on:click=move |_| qty.update(|q| *q = q.saturating_add(1))>
                        {icon("plus")}
                    </button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Button block=true on_click=Callback::new(on_add)>
                "Add to Cart"
            </Button>
        </div>
    }
}

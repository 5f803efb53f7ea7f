use crate::layout::global_context::use_app;
use crate::shop::components::product_card::ProductCard;
use contracts::routing::Route;
use leptos::prelude::*;

#[component]
pub fn ProductPage(route: Memo<Route>) -> impl IntoView {
    let ctx = use_app();
    let catalog = ctx.catalog();

    let product = Memo::new(move |_| route.with(|r| catalog.find_str(r.param("id")).cloned()));

    move || match product.get() {
        Some(product) => view! {
            <section class="section section--narrow">
                <h2 class="section__title">{format!("{} {}", product.subcategory, product.name)}</h2>
                <p class="muted">{format!("Category: {}", product.category.display_name())}</p>
                <ProductCard product=product />
            </section>
        }
        .into_any(),
        None => view! {
            <section class="section empty-state">
                <h2>"Product not found"</h2>
                <p class="muted">"This product does not exist or is no longer sold."</p>
                <a href=Route::home().to_fragment() class="btn btn--primary">"Back to shop"</a>
            </section>
        }
        .into_any(),
    }
}

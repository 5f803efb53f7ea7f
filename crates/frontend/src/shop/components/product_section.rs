use crate::shared::components::ui::Button;
use crate::layout::global_context::use_app;
use crate::shop::components::product_card::ProductCard;
use contracts::enums::ProductCategory;
use leptos::prelude::*;

/// Product grid for a category (or the whole catalog) with subcategory chips.
#[component]
pub fn ProductSection(
    #[prop(into)]
    category: Signal<Option<ProductCategory>>,
    /// Active subcategory, empty for "All"
    #[prop(into)]
    subcategory: Signal<String>,
    on_subcategory: Callback<String>,
) -> impl IntoView {
    let ctx = use_app();
    let catalog = ctx.catalog();

    let products = Memo::new(move |_| {
        let sub = subcategory.get();
        catalog
            .filter(category.get(), Some(sub.as_str()))
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let subcategories = move || {
        category
            .get()
            .map(|c| {
                catalog
                    .subcategories(c)
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    view! {
        <section class="section">
            <div class="section__header">
                <h3 class="section__title">"Products"</h3>
                <div class="chips">
                    {move || {
                        let subs = subcategories();
                        let has_subs = !subs.is_empty();
                        let chips = subs
                            .into_iter()
                            .map(|sub| {
                                let label = sub.clone();
                                let active = Signal::derive({
                                    let sub = sub.clone();
                                    move || subcategory.get() == sub
                                });
                                view! {
                                    <Button
                                        variant="chip"
                                        active=active
                                        on_click=Callback::new(move |_| on_subcategory.run(sub.clone()))
                                    >
                                        {label}
                                    </Button>
                                }
                            })
                            .collect_view();
                        view! {
                            {chips}
                            <Show when=move || has_subs>
                                <Button
                                    variant="chip"
                                    active=Signal::derive(move || subcategory.get().is_empty())
                                    on_click=Callback::new(move |_| on_subcategory.run(String::new()))
                                >
                                    "All"
                                </Button>
                            </Show>
                        }
                    }}
                </div>
            </div>
            <Show
                when=move || products.with(|p| !p.is_empty())
                fallback=|| view! { <div class="empty-state">"No products here yet."</div> }
            >
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|product| product.id.clone()
                        children=|product| view! { <ProductCard product=product /> }
                    />
                </div>
            </Show>
        </section>
    }
}

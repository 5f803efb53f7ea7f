use crate::shared::icons::icon;
use contracts::enums::ProductCategory;
use leptos::prelude::*;

/// Four category tiles; selecting one calls `on_select`.
#[component]
pub fn CategoryGrid(
    /// Currently selected category, highlighted
    #[prop(into)]
    selected: Signal<Option<ProductCategory>>,
    on_select: Callback<ProductCategory>,
) -> impl IntoView {
    view! {
        <section id="shop" class="section">
            <h2 class="section__title">"Explore Categories"</h2>
            <div class="category-grid">
                {ProductCategory::all()
                    .into_iter()
                    .map(|category| {
                        let is_selected = move || selected.get() == Some(category);
                        view! {
                            <button
                                class=move || {
                                    if is_selected() {
                                        format!("category-tile category-tile--{} is-active", category.code())
                                    } else {
                                        format!("category-tile category-tile--{}", category.code())
                                    }
                                }
                                on:click=move |_| on_select.run(category)
                            >
                                <div class="category-tile__icon">{icon(category.icon())}</div>
                                <div class="category-tile__name">{category.display_name()}</div>
                                <div class="category-tile__hint">"Tap to view products"</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

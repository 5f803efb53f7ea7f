use crate::layout::global_context::use_app;
use crate::shop::components::category_grid::CategoryGrid;
use crate::shop::components::product_section::ProductSection;
use contracts::enums::ProductCategory;
use contracts::routing::Route;
use leptos::prelude::*;

/// Listing pre-filtered by the `cat` and `sub` route parameters. Chip and tile
/// clicks navigate, so the filter always mirrors the address bar.
#[component]
pub fn CategoryPage(route: Memo<Route>) -> impl IntoView {
    let ctx = use_app();

    let code = Memo::new(move |_| route.with(|r| r.param("cat").to_string()));
    let category = Signal::derive(move || code.with(|c| ProductCategory::from_code(c)));
    let subcategory = Signal::derive(move || route.with(|r| r.param("sub").to_string()));
    let unknown = move || code.with(|c| !c.is_empty()) && category.get().is_none();

    let on_select = Callback::new(move |selected: ProductCategory| {
        ctx.navigate(&Route::category(selected.code(), ""));
    });
    let on_subcategory = Callback::new(move |sub: String| {
        let cat = code.get_untracked();
        ctx.navigate(&Route::category(&cat, &sub));
    });

    view! {
        <Show when=unknown>
            <div class="notice">
                {move || format!("Unknown category \"{}\". Showing the whole catalog.", code.get())}
            </div>
        </Show>
        <CategoryGrid selected=category on_select=on_select />
        <ProductSection category=category subcategory=subcategory on_subcategory=on_subcategory />
    }
}

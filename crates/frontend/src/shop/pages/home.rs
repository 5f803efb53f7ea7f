use crate::shop::components::category_grid::CategoryGrid;
use crate::shop::components::hero::Hero;
use crate::shop::components::product_section::ProductSection;
use contracts::enums::ProductCategory;
use leptos::prelude::*;

/// Landing page. The category and subcategory selection is local to the page;
/// selecting the active tile again clears it.
#[component]
pub fn HomePage() -> impl IntoView {
    let selected = RwSignal::new(Option::<ProductCategory>::None);
    let subcategory = RwSignal::new(String::new());

    let on_select = Callback::new(move |category: ProductCategory| {
        selected.update(|current| {
            *current = if *current == Some(category) { None } else { Some(category) };
        });
        subcategory.set(String::new());
    });
    let on_subcategory = Callback::new(move |sub: String| subcategory.set(sub));

    view! {
        <Hero />
        <CategoryGrid selected=selected on_select=on_select />
        <ProductSection category=selected subcategory=subcategory on_subcategory=on_subcategory />
    }
}

use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use contracts::routing::breadcrumbs;
use leptos::prelude::*;

/// Crumb trail for the current route; the last crumb is highlighted.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_app();
    let crumbs = Memo::new(move |_| breadcrumbs(&ctx.route()));

    view! {
        <nav class="breadcrumbs">
            <a href="#/" class="breadcrumbs__home">
                {icon("home")}
                <span>"Home"</span>
            </a>
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .skip(1)
                    .map(|(i, crumb)| {
                        let class = if i == last { "breadcrumbs__link is-current" } else { "breadcrumbs__link" };
                        view! {
                            <span class="breadcrumbs__item">
                                <span class="breadcrumbs__sep">"/"</span>
                                <a href=crumb.href class=class>{crumb.label}</a>
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

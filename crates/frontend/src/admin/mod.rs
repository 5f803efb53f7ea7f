pub mod dashboard;
pub mod salary;
pub mod settings;
pub mod users;

use crate::layout::global_context::use_app;
use contracts::routing::{Route, RouteName};
use leptos::prelude::*;

const ADMIN_PAGES: [(RouteName, &str); 4] = [
    (RouteName::Admin, "Dashboard"),
    (RouteName::AdminUsers, "Users"),
    (RouteName::AdminSalary, "Salary"),
    (RouteName::AdminSettings, "Settings"),
];

/// Sub-navigation shared by the admin pages.
#[component]
pub fn AdminNav() -> impl IntoView {
    let ctx = use_app();

    view! {
        <nav class="admin-nav">
            {ADMIN_PAGES
                .into_iter()
                .map(|(name, label)| {
                    let href = Route::named(name).to_fragment();
                    view! {
                        <a
                            href=href
                            class=move || if ctx.route_name() == name { "admin-nav__link is-active" } else { "admin-nav__link" }
                        >
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Frame for an admin page: title, sub-navigation, content.
#[component]
pub fn AdminFrame(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="section admin">
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <AdminNav />
            <div class="page__content">{children()}</div>
        </section>
    }
}

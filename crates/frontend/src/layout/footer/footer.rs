use crate::layout::global_context::use_app;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app();
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <span>{format!("© {} {}", year, ctx.store_name())}</span>
            <span class="muted">"Demo store. No real payments are made."</span>
        </footer>
    }
}

use crate::layout::global_context::use_app;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="hero">
            <h1 class="hero__title">{ctx.store_name()}</h1>
            <p class="hero__subtitle">
                "Game top-ups, premium apps, data packages and bill payments. Delivered instantly."
            </p>
            <a href="#shop" class="btn btn--primary">"Start shopping"</a>
        </section>
    }
}

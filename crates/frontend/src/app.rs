use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::location::{current_fragment, HashListener};
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::StoreConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::load().unwrap_or_else(|e| {
        log::error!("store.toml could not be parsed, using built-in settings: {}", e);
        StoreConfig::fallback()
    });

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);

    // Single subscription point for location changes; lives as long as the page.
    ctx.on_hash_change(&current_fragment());
    match HashListener::subscribe(move |fragment| ctx.on_hash_change(&fragment)) {
        Some(listener) => listener.forget(),
        None => log::warn!("hashchange subscription unavailable, navigation will not update"),
    }

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}

use leptos::prelude::*;

use crate::admin::AdminFrame;
use crate::layout::global_context::use_app;
use crate::shared::theme::{use_theme, ThemeToggle};

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let ctx = use_app();
    let theme = use_theme();
    let require_login = ctx.config.with_value(|config| config.cart.require_login);
    let methods = ctx.config.with_value(|config| {
        config
            .checkout
            .payment_methods
            .iter()
            .map(|m| m.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    });

    view! {
        <AdminFrame title="Settings">
            <div class="admin-card">
                <div class="settings-row">
                    <span class="muted">"Theme"</span>
                    <span>{move || theme.theme.get().display_name()}</span>
                    <ThemeToggle />
                </div>
                <div class="settings-row">
                    <span class="muted">"Store name"</span>
                    <span class="strong">{ctx.store_name()}</span>
                </div>
                <div class="settings-row">
                    <span class="muted">"Login required for cart"</span>
                    <span>{if require_login { "Yes" } else { "No" }}</span>
                </div>
                <div class="settings-row">
                    <span class="muted">"Payment methods"</span>
                    <span>{methods}</span>
                </div>
            </div>
        </AdminFrame>
    }
}

pub mod footer;
pub mod global_context;
pub mod header;

use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::cart_drawer::CartDrawer;
use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Storefront shell.
///
/// ```text
/// +------------------------------------------+
/// |                Header                     |
/// +------------------------------------------+
/// |              Breadcrumbs                  |
/// +------------------------------------------+
/// |          Page (per route)                 |
/// +------------------------------------------+
/// |                Footer                     |
/// +------------------------------------------+
///                          CartDrawer (overlay)
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <Breadcrumbs />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
            <CartDrawer />
        </div>
    }
}

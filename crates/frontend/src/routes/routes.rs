use crate::admin::dashboard::AdminDashboardPage;
use crate::admin::salary::AdminSalaryPage;
use crate::admin::settings::AdminSettingsPage;
use crate::admin::users::AdminUsersPage;
use crate::layout::global_context::use_app;
use crate::layout::Shell;
use crate::shop::pages::category::CategoryPage;
use crate::shop::pages::checkout::CheckoutPage;
use crate::shop::pages::home::HomePage;
use crate::shop::pages::payment::PaymentPage;
use crate::shop::pages::product::ProductPage;
use crate::system::pages::login::LoginPage;
use contracts::routing::RouteName;
use leptos::prelude::*;

/// Page for the current route.
///
/// Dispatch only re-runs when the route itself changes, so opening or
/// closing the cart drawer keeps page-local drafts intact.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app();
    let route = Memo::new(move |_| ctx.route());
    let page = Memo::new(move |_| route.with(|r| r.name));

    view! {
        <Shell>
            {move || match page.get() {
                RouteName::Home => view! { <HomePage /> }.into_any(),
                RouteName::Category => view! { <CategoryPage route=route /> }.into_any(),
                RouteName::Product => view! { <ProductPage route=route /> }.into_any(),
                RouteName::Checkout => view! { <CheckoutPage /> }.into_any(),
                RouteName::Login => view! { <LoginPage /> }.into_any(),
                RouteName::Payment => view! { <PaymentPage route=route /> }.into_any(),
                RouteName::Admin => view! { <AdminDashboardPage /> }.into_any(),
                RouteName::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
                RouteName::AdminSalary => view! { <AdminSalaryPage /> }.into_any(),
                RouteName::AdminSettings => view! { <AdminSettingsPage /> }.into_any(),
            }}
        </Shell>
    }
}


use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::components::ui::{Button, Input};
use contracts::routing::NextAction;
use contracts::system::auth::LoginRequest;

/// Mock sign-in. Any input is accepted; the navigation controller then
/// resumes the action named by the `next` marker, if any.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let resume_hint = move || {
        let pending = ctx.nav.with(|nav| nav.pending());
        let marker = pending.or_else(|| {
            ctx.nav
                .with(|nav| nav.route().query_value("next").and_then(NextAction::from_code))
        });
        marker.map(|next| match next {
            NextAction::Cart => "Sign in to open your cart.",
            NextAction::Checkout => "Sign in to continue to checkout.",
            NextAction::Payment => "Sign in to complete your payment.",
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.login(LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{ctx.store_name()}</h1>
                <h2>"Sign in"</h2>

                {move || resume_hint().map(|hint| view! { <div class="notice">{hint}</div> })}

                <Show
                    when=move || !ctx.is_authenticated()
                    fallback=|| view! {
                        <div class="muted">"You are already signed in."</div>
                        <a href="#/" class="btn btn--primary">"Continue shopping"</a>
                    }
                >
                    <form on:submit=on_submit>
                        <Input label="Email" value=email input_type="email" placeholder="you@example.com" id="email" />
                        <Input label="Password" value=password input_type="password" id="password" />
                        <Button button_type="submit" block=true>"Sign in"</Button>
                    </form>
                </Show>

                <div class="login-info">
                    <p>"Demo store: any email and password will do."</p>
                </div>
            </div>
        </div>
    }
}

use crate::layout::global_context::use_app;
use crate::shared::components::ui::Button;
use contracts::domain::checkout::OrderReceipt;
use contracts::routing::Route;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Mock payment. The method comes from `?method=` and falls back to the first
/// configured method when missing or not offered.
#[component]
pub fn PaymentPage(route: Memo<Route>) -> impl IntoView {
    let ctx = use_app();

    let method = Memo::new(move |_| {
        let code = route.with(|r| r.query_value("method").map(str::to_string));
        ctx.config.with_value(|config| {
            code.as_deref()
                .and_then(|c| config.payment_method(c))
                .unwrap_or_else(|| config.default_payment_method())
        })
    });

    let processing = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let receipt = RwSignal::new(Option::<OrderReceipt>::None);

    let on_confirm = move |_: ev::MouseEvent| {
        if processing.get_untracked() {
            return;
        }
        error.set(None);
        let order = match ctx.place_order(method.get_untracked()) {
            Ok(order) => order,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        processing.set(true);
        let delay = ctx.config.with_value(|config| config.checkout.processing_delay_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            match ctx.complete_payment(order) {
                Ok(paid) => receipt.set(Some(paid)),
                Err(e) => error.set(Some(e)),
            }
            processing.set(false);
        });
    };

    let summary = move || {
        view! {
            <Show
                when=move || { ctx.cart_count() > 0 }
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"Nothing to pay for. Your cart is empty."</p>
                        <a href=Route::home().to_fragment() class="btn btn--primary">"Browse products"</a>
                    </div>
                }
            >
                <div class="payment-summary">
                    <div class="payment-summary__row">
                        <span class="muted">"Method"</span>
                        <span class="strong">{move || method.get().display_name()}</span>
                    </div>
                    <div class="payment-summary__row">
                        <span class="muted">"Items"</span>
                        <span>{move || ctx.cart_count()}</span>
                    </div>
                    <div class="payment-summary__row">
                        <span class="muted">"Total"</span>
                        <span class="strong">{move || ctx.price(ctx.cart_total())}</span>
                    </div>
                </div>
                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <Show
                    when=move || processing.get()
                    fallback=move || view! {
                        <Button block=true on_click=Callback::new(on_confirm)>"Confirm payment"</Button>
                    }
                >
                    <div class="payment-processing">
                        <Spinner />
                        <span>"Processing payment..."</span>
                    </div>
                </Show>
            </Show>
        }
    };

    view! {
        <section class="section section--narrow">
            <h2 class="section__title">"Payment"</h2>
            {move || match receipt.get() {
                Some(placed) => view! { <ReceiptView receipt=placed /> }.into_any(),
                None => summary().into_any(),
            }}
        </section>
    }
}

#[component]
fn ReceiptView(receipt: OrderReceipt) -> impl IntoView {
    let ctx = use_app();
    let created = receipt
        .created_at
        .with_timezone(&chrono::Local)
        .format("%d.%m.%Y %H:%M")
        .to_string();
    let json = receipt.to_json_pretty();

    view! {
        <div class="receipt">
            <div class="receipt__status">"Payment successful"</div>
            <div class="payment-summary">
                <div class="payment-summary__row">
                    <span class="muted">"Reference"</span>
                    <span class="strong">{receipt.reference()}</span>
                </div>
                <div class="payment-summary__row">
                    <span class="muted">"Date"</span>
                    <span>{created}</span>
                </div>
                <div class="payment-summary__row">
                    <span class="muted">"Method"</span>
                    <span>{receipt.method.display_name()}</span>
                </div>
                {receipt
                    .lines
                    .iter()
                    .map(|line| view! {
                        <div class="payment-summary__row">
                            <span>{format!("{} ({}) x{}", line.name, line.meta, line.qty)}</span>
                            <span>{ctx.price(line.subtotal)}</span>
                        </div>
                    })
                    .collect_view()}
                <div class="payment-summary__row">
                    <span class="muted">"Total"</span>
                    <span class="strong">{ctx.price(receipt.total)}</span>
                </div>
            </div>
            <details class="receipt__raw">
                <summary>"Receipt data"</summary>
                <pre>{json}</pre>
            </details>
            <a href=Route::home().to_fragment() class="btn btn--primary btn--block">"Back to shop"</a>
        </div>
    }
}

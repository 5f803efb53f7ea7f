use contracts::domain::admin::{sample_transactions, CategoryBook, Wallet};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::admin::AdminFrame;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// Admin overview: category editor, recent transactions and a mock wallet.
///
/// Everything here is page-local and resets when the page is left.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AdminFrame title="Admin Dashboard">
            <div class="admin-grid">
                <CategoriesCard />
                <TransactionsCard />
                <WalletCard />
            </div>
        </AdminFrame>
    }
}

#[component]
fn CategoriesCard() -> impl IntoView {
    let book = RwSignal::new(CategoryBook::default());
    let new_name = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let add_category = move |_: ev::MouseEvent| {
        let name = new_name.get_untracked();
        match book.try_update(|b| b.add(&name).map(|entry| entry.id.clone())) {
            Some(Ok(id)) => {
                log::info!("admin: category added: {}", id);
                new_name.set(String::new());
                error.set(None);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <div class="admin-card">
            <h3 class="admin-card__title">"Categories"</h3>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="flex: 1;">
                    <Input value=new_name placeholder="New category name" />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=add_category>
                    {icon("plus")}
                    " Add"
                </Button>
            </Flex>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <ul class="admin-list">
                <For
                    each=move || book.with(|b| b.entries().to_vec())
                    key=|entry| entry.id.clone()
                    children=move |entry| {
                        let id = entry.id.clone();
                        view! {
                            <li class="admin-list__item">
                                <span>{entry.name.clone()}</span>
                                <span class="muted">{entry.id.clone()}</span>
                                <button
                                    class="icon-btn"
                                    on:click=move |_| {
                                        book.update(|b| {
                                            b.remove(&id);
                                        });
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn TransactionsCard() -> impl IntoView {
    let ctx = use_app();
    let transactions = sample_transactions();

    view! {
        <div class="admin-card">
            <h3 class="admin-card__title">"Recent Transactions"</h3>
            {move || {
                ctx.last_receipt.get().map(|receipt| {
                    view! {
                        <div class="notice">
                            {format!("Latest storefront order {} ({})", receipt.reference(), ctx.price(receipt.total))}
                        </div>
                    }
                })
            }}
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Code"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {transactions
                        .into_iter()
                        .map(|trx| view! {
                            <TableRow>
                                <TableCell>{trx.code.clone()}</TableCell>
                                <TableCell>
                                    <span class=trx.status.css_class()>{trx.status.display_name()}</span>
                                </TableCell>
                                <TableCell>{ctx.price(trx.amount)}</TableCell>
                            </TableRow>
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn WalletCard() -> impl IntoView {
    let ctx = use_app();
    let wallet = RwSignal::new(Wallet::default());
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let deposit = move |_: ev::MouseEvent| {
        let input = amount.get_untracked();
        match wallet.try_update(|w| w.deposit(&input)) {
            Some(Ok(balance)) => {
                log::info!("admin: deposit accepted, balance {}", balance);
                amount.set(String::new());
                error.set(None);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <div class="admin-card">
            <h3 class="admin-card__title">"Wallet"</h3>
            <div class="admin-card__value">{move || ctx.price(wallet.get().balance)}</div>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="flex: 1;">
                    <Input value=amount placeholder="Amount, e.g. 50.000" />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=deposit>
                    "Deposit"
                </Button>
            </Flex>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        </div>
    }
}

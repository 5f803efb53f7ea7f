use contracts::domain::admin::{payroll_total, sample_staff};
use leptos::prelude::*;
use thaw::*;

use crate::admin::AdminFrame;
use crate::layout::global_context::use_app;

#[component]
pub fn AdminSalaryPage() -> impl IntoView {
    let ctx = use_app();
    let staff = sample_staff();
    let total = payroll_total(&staff);

    view! {
        <AdminFrame title="Salary">
            <div class="admin-card">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
                            <TableHeaderCell>"Monthly salary"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {staff
                            .into_iter()
                            .map(|member| view! {
                                <TableRow>
                                    <TableCell>{member.name}</TableCell>
                                    <TableCell>{member.role}</TableCell>
                                    <TableCell>{ctx.price(member.monthly_salary)}</TableCell>
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
                <div class="checkout-total">
                    <span class="muted">"Payroll total"</span>
                    <span class="strong">{ctx.price(total)}</span>
                </div>
            </div>
        </AdminFrame>
    }
}

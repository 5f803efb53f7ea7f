use contracts::domain::admin::sample_staff;
use leptos::prelude::*;
use thaw::*;

use crate::admin::AdminFrame;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let staff = sample_staff();
    let count = staff.len();

    view! {
        <AdminFrame title="Users">
            <div class="admin-card">
                <div class="page__header-left">
                    <h3 class="admin-card__title">"Staff"</h3>
                    <Badge>{count.to_string()}</Badge>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
                            <TableHeaderCell>"Email"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {staff
                            .into_iter()
                            .map(|member| view! {
                                <TableRow>
                                    <TableCell>{member.name}</TableCell>
                                    <TableCell>{member.role}</TableCell>
                                    <TableCell>{member.email}</TableCell>
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        </AdminFrame>
    }
}

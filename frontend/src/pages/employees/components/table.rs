use crate::{
    api::Employee,
    components::common::{Button, ButtonSize, ButtonVariant},
};
use leptos::*;
use std::collections::BTreeSet;

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] deleting: Signal<BTreeSet<i64>>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee ID"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Full Name"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Email Address"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Department"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Action"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id
                        children=move |employee| {
                            let id = employee.id;
                            let in_flight = Signal::derive(move || deleting.with(|ids| ids.contains(&id)));
                            let target = employee.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.employee_id}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.full_name}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.email}</td>
                                    <td class="px-4 py-2 text-sm text-fg">{employee.department}</td>
                                    <td class="px-4 py-2 text-sm">
                                        <Button
                                            variant=ButtonVariant::Danger
                                            size=ButtonSize::Small
                                            disabled=in_flight
                                            on:click=move |_| on_delete.call(target.clone())
                                        >
                                            {move || if in_flight.get() { "Deleting..." } else { "Delete" }}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

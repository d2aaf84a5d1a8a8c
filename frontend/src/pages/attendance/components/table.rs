use crate::{api::AttendanceRecord, components::badges::StatusBadge};
use leptos::*;

#[component]
pub fn AttendanceTable(#[prop(into)] records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Date"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || records.get()
                        key=|record| record.id
                        children=move |record| view! {
                            <tr>
                                <td class="px-4 py-2 text-sm text-fg">{record.employee_name}</td>
                                <td class="px-4 py-2 text-sm text-fg">
                                    {record.attendance_date.format("%Y-%m-%d").to_string()}
                                </td>
                                <td class="px-4 py-2 text-sm"><StatusBadge status=record.status /></td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

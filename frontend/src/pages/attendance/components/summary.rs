use crate::{components::cards::StatsCard, state::attendance::AttendanceStats};
use leptos::*;

#[component]
pub fn AttendanceSummary(
    #[prop(into)] stats: Signal<AttendanceStats>,
    #[prop(into)] total_employees: Signal<usize>,
) -> impl IntoView {
    view! {
        <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <StatsCard label="Total Present" value=Signal::derive(move || stats.get().present) icon="✓" />
            <StatsCard label="Total Absent" value=Signal::derive(move || stats.get().absent) icon="✗" />
            <StatsCard label="Total Records" value=Signal::derive(move || stats.get().records) icon="📊" />
            <StatsCard label="Total Employees" value=total_employees icon="👥" />
        </dl>
    }
}

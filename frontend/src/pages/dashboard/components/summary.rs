use crate::{components::cards::StatsCard, state::attendance::AttendanceStats};
use leptos::*;

#[component]
pub fn SummarySection(
    #[prop(into)] total_employees: Signal<usize>,
    #[prop(into)] stats: Signal<AttendanceStats>,
) -> impl IntoView {
    let present = Signal::derive(move || stats.get().present);
    let absent = Signal::derive(move || stats.get().absent);
    let counted = Signal::derive(move || stats.get().counted());

    view! {
        <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <StatsCard label="Total Employees" value=total_employees icon="👥" />
            <StatsCard label="Present Today" value=present icon="✓" />
            <StatsCard label="Absent Today" value=absent icon="✗" />
            <StatsCard label="Total Records" value=counted icon="📊" />
        </dl>
    }
}

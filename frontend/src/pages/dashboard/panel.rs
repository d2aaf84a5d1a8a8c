use crate::{
    components::layout::{ErrorMessage, LoadingSpinner, PageHeader},
    pages::dashboard::{
        components::{QuickLinks, SummarySection, SystemInfo},
        view_model::use_dashboard_view_model,
    },
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let status = vm.status;
    let loading = vm.board.loading;
    let on_dismiss = vm.dismiss_error();
    let total_employees = vm.total_employees;
    let stats = vm.stats;

    view! {
        <div class="space-y-6">
            <PageHeader title="Dashboard" subtitle="Overview of your HRMS system" />
            {move || status.with(|state| state.error().map(str::to_string)).map(|message| view! {
                <ErrorMessage message=message on_dismiss=on_dismiss />
            })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <SummarySection total_employees=total_employees stats=stats />
            </Show>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <QuickLinks />
                <SystemInfo />
            </div>
        </div>
    }
}

use crate::{
    components::cards::Card,
    router::{use_active_page, ActivePage},
};
use leptos::*;

#[component]
pub fn QuickLinks() -> impl IntoView {
    let active_page = use_active_page();
    let links = [
        (
            ActivePage::Employees,
            "👥",
            "Manage Employees",
            "Add, view, and delete employees",
        ),
        (
            ActivePage::Attendance,
            "📅",
            "Track Attendance",
            "Mark and view attendance records",
        ),
    ];

    view! {
        <Card title="Quick Links">
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                {links
                    .into_iter()
                    .map(|(page, icon, title, description)| view! {
                        <button
                            type="button"
                            class="flex items-start gap-3 rounded-lg border border-border p-4 text-left hover:bg-action-ghost-bg-hover"
                            on:click=move |_| active_page.set(page)
                        >
                            <span class="text-2xl" aria-hidden="true">{icon}</span>
                            <div>
                                <h3 class="text-sm font-semibold text-fg">{title}</h3>
                                <p class="text-sm text-fg-muted">{description}</p>
                            </div>
                        </button>
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
pub fn SystemInfo() -> impl IntoView {
    view! {
        <Card title="System Information">
            <dl class="space-y-2 text-sm">
                <div class="flex gap-2">
                    <dt class="font-semibold text-fg">"Application:"</dt>
                    <dd class="text-fg-muted">{concat!("HRMS Lite v", env!("CARGO_PKG_VERSION"))}</dd>
                </div>
                <div class="flex gap-2">
                    <dt class="font-semibold text-fg">"Status:"</dt>
                    <dd class="text-fg-muted">"🟢 Operational"</dd>
                </div>
                <div class="flex gap-2">
                    <dt class="font-semibold text-fg">"Features:"</dt>
                    <dd class="text-fg-muted">"Employee Management, Attendance Tracking"</dd>
                </div>
            </dl>
        </Card>
    }
}

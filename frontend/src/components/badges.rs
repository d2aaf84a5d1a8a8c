use crate::api::AttendanceStatus;
use leptos::*;

fn badge_class(status: &str) -> &'static str {
    match AttendanceStatus::parse(status) {
        Some(AttendanceStatus::Present) => {
            "bg-status-success-bg text-status-success-text border-status-success-border"
        }
        Some(AttendanceStatus::Absent) => {
            "bg-status-error-bg text-status-error-text border-status-error-border"
        }
        None => "bg-surface-muted text-fg-muted border-border",
    }
}

/// Renders an attendance status string; unknown values get a neutral style.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = format!(
        "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium {}",
        badge_class(&status)
    );
    view! { <span class=class>{status}</span> }
}

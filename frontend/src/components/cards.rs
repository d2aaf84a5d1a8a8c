use leptos::*;

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<MaybeSignal<String>>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] actions: Option<View>,
    children: Children,
) -> impl IntoView {
    let header = (title.is_some() || actions.is_some()).then(move || {
        let title = title.map(|title| move || title.get());
        view! {
            <div class="flex items-center justify-between gap-3 border-b border-border px-4 py-4 sm:px-6">
                <h2 class="text-lg font-medium text-fg">{title}</h2>
                {actions}
            </div>
        }
    });
    view! {
        <div class=format!("bg-surface-elevated overflow-hidden shadow rounded-lg {}", class)>
            {header}
            <div class="px-4 py-5 sm:p-6">{children()}</div>
        </div>
    }
}

#[component]
pub fn StatsCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<usize>,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    let icon = icon.unwrap_or_else(|| "📊".to_string());
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="flex items-center gap-4 px-4 py-5 sm:p-6">
                <div class="text-2xl" aria-hidden="true">{icon}</div>
                <div>
                    <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                    <dd class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</dd>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stats_card_renders_label_and_value() {
        let html = render_to_string(move || {
            view! { <StatsCard label="Total Employees" value=Signal::derive(|| 12usize) icon="👥" /> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("12"));
        assert!(html.contains("👥"));
    }

    #[test]
    fn card_header_only_when_titled() {
        let titled = render_to_string(move || {
            view! { <Card title="Attendance Records"><p>"rows"</p></Card> }
        });
        assert!(titled.contains("Attendance Records"));
        assert!(titled.contains("border-b"));

        let bare = render_to_string(move || view! { <Card><p>"rows"</p></Card> });
        assert!(bare.contains("rows"));
        assert!(!bare.contains("border-b"));
    }
}

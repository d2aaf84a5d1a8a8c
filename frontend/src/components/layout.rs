use crate::router::{use_active_page, ActivePage};
use leptos::*;

const NAV_LINK: &str = "px-3 py-2 rounded-md text-sm font-medium";

fn nav_link_class(active: bool) -> String {
    if active {
        format!("{NAV_LINK} bg-action-ghost-bg-hover text-fg")
    } else {
        format!("{NAV_LINK} text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover")
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let active_page = use_active_page();
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"HRMS Lite"</h1>
                    <nav class="flex space-x-2" aria-label="Main">
                        <For
                            each=move || ActivePage::ALL
                            key=|page| *page
                            children=move |page| {
                                let is_active = move || active_page.get() == page;
                                view! {
                                    <button
                                        type="button"
                                        class=move || nav_link_class(is_active())
                                        aria-current=move || is_active().then_some("page")
                                        on:click=move |_| active_page.set(page)
                                    >
                                        {page.label()}
                                    </button>
                                }
                            }
                        />
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-6 text-center text-sm text-fg-muted">
            <p>"© 2026 HRMS Lite. All rights reserved."</p>
            <p>"Admin Panel | Version 1.0.0"</p>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex flex-col">
            <Header/>
            <main class="flex-1 w-full max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] actions: Option<View>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
            <div>
                <h1 class="text-2xl font-bold text-fg">{title}</h1>
                {subtitle.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
            </div>
            {actions}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-2 p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <p class="text-sm text-fg-muted">"Loading..."</p>
        </div>
    }
}

#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <div class="flex items-start">
                <div class="flex-shrink-0" aria-hidden="true">"⚠"</div>
                <div class="ml-3 flex-1">
                    <h4 class="text-sm font-semibold">"Error"</h4>
                    <p class="text-sm">{message}</p>
                </div>
                {on_dismiss.map(|dismiss| view! {
                    <button
                        type="button"
                        aria-label="Dismiss"
                        class="ml-3 text-status-error-text"
                        on:click=move |_| dismiss.call(())
                    >
                        "✕"
                    </button>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <div class="flex items-start">
                <div class="flex-shrink-0" aria-hidden="true">"✓"</div>
                <p class="ml-3 flex-1 text-sm">{message}</p>
                {on_dismiss.map(|dismiss| view! {
                    <button
                        type="button"
                        aria-label="Dismiss"
                        class="ml-3 text-status-success-text"
                        on:click=move |_| dismiss.call(())
                    >
                        "✕"
                    </button>
                })}
            </div>
        </div>
    }
}

use leptos::*;

use crate::{
    api::ApiClient,
    components::layout::{ErrorMessage, Layout},
    pages::{attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage},
    state::employees::provide_employee_directory,
};

/// The page shown in the main area; switching is purely in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivePage {
    #[default]
    Dashboard,
    Employees,
    Attendance,
}

impl ActivePage {
    pub const ALL: [ActivePage; 3] = [
        ActivePage::Dashboard,
        ActivePage::Employees,
        ActivePage::Attendance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "Dashboard",
            ActivePage::Employees => "Employees",
            ActivePage::Attendance => "Attendance",
        }
    }
}

pub fn provide_active_page(initial: ActivePage) -> RwSignal<ActivePage> {
    let page = create_rw_signal(initial);
    provide_context(page);
    page
}

pub fn use_active_page() -> RwSignal<ActivePage> {
    use_context::<RwSignal<ActivePage>>().unwrap_or_else(|| provide_active_page(ActivePage::default()))
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let api = ApiClient::new();
    provide_context(api.clone());
    let directory = provide_employee_directory();
    directory.load(api);
    let active_page = provide_active_page(ActivePage::Dashboard);

    view! { <AppShell directory_error=directory.error active_page=active_page /> }
}

#[component]
fn AppShell(
    directory_error: RwSignal<Option<String>>,
    active_page: RwSignal<ActivePage>,
) -> impl IntoView {
    view! {
        <Layout>
            {move || directory_error.get().map(|message| view! {
                <ErrorMessage
                    message=message
                    on_dismiss=Callback::new(move |_| directory_error.set(None))
                />
            })}
            {move || match active_page.get() {
                ActivePage::Dashboard => view! { <DashboardPage/> }.into_view(),
                ActivePage::Employees => view! { <EmployeesPage/> }.into_view(),
                ActivePage::Attendance => view! { <AttendancePage/> }.into_view(),
            }}
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_have_navigation_labels() {
        let labels: Vec<_> = ActivePage::ALL.iter().map(ActivePage::label).collect();
        assert_eq!(labels, vec!["Dashboard", "Employees", "Attendance"]);
        assert_eq!(ActivePage::default(), ActivePage::Dashboard);
    }
}

use crate::{
    api::Employee,
    components::common::{Button, ButtonSize, ButtonVariant},
    pages::attendance::utils::FilterFormState,
};
use leptos::*;

const CONTROL: &str = "rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm text-fg";

#[component]
pub fn RecordsFilter(
    filter: FilterFormState,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] range_error: Signal<Option<String>>,
    on_employee: Callback<String>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let employee = filter.employee;
    let from = filter.from;
    let to = filter.to;

    view! {
        <div class="space-y-2">
            <div class="flex flex-wrap items-end gap-2">
                <select
                    aria-label="Filter by employee"
                    class=CONTROL
                    prop:value=move || employee.get()
                    on:change=move |ev| on_employee.call(event_target_value(&ev))
                >
                    <option value="">"All Employees"</option>
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id
                        children=move |employee| view! {
                            <option value=employee.id.to_string()>{employee.full_name}</option>
                        }
                    />
                </select>
                <label class="text-xs text-fg-muted">
                    "From"
                    <input
                        type="date"
                        class=format!("{CONTROL} ml-1")
                        prop:value=move || from.get()
                        on:input=move |ev| from.set(event_target_value(&ev))
                    />
                </label>
                <label class="text-xs text-fg-muted">
                    "To"
                    <input
                        type="date"
                        class=format!("{CONTROL} ml-1")
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
                    />
                </label>
                <Button size=ButtonSize::Small on:click=move |_| on_apply.call(())>"Apply"</Button>
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Small
                    on:click=move |_| on_clear.call(())
                >
                    "Clear"
                </Button>
            </div>
            {move || range_error.get().map(|message| view! {
                <p class="text-xs text-status-error-text">{message}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    #[test]
    fn renders_employee_options_and_range_error() {
        let html = render_to_string(move || {
            let employees = vec![employee(1, "John Doe"), employee(2, "Jane Roe")];
            view! {
                <RecordsFilter
                    filter=FilterFormState::new()
                    employees=Signal::derive(move || employees.clone())
                    range_error=Signal::derive(|| Some("Start date must be on or before end date".to_string()))
                    on_employee=Callback::new(|_| {})
                    on_apply=Callback::new(|_| {})
                    on_clear=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("All Employees"));
        assert!(html.contains("Jane Roe"));
        assert!(html.contains("Start date must be on or before end date"));
    }
}

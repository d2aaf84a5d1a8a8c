use crate::{
    api::{AttendanceStatus, Employee},
    components::common::Button,
    pages::attendance::utils::AttendanceFormState,
};
use leptos::*;

const CONTROL: &str = "mt-1 block w-full rounded-md border px-3 py-2 text-sm shadow-sm bg-form-control-bg text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

fn control_class(error: Signal<Option<String>>) -> impl Fn() -> String {
    move || {
        if error.with(Option::is_some) {
            format!("{CONTROL} border-status-error-border")
        } else {
            format!("{CONTROL} border-form-control-border")
        }
    }
}

#[component]
pub fn AttendanceForm(
    form: AttendanceFormState,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let input = form.input;
    let employee_error = form.error("employee_id");
    let date_error = form.error("attendance_date");

    view! {
        <form
            class="space-y-4"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <div>
                <label for="attendance_employee" class="block text-sm font-medium text-fg">"Employee *"</label>
                <select
                    id="attendance_employee"
                    name="employee_id"
                    class=control_class(employee_error)
                    prop:value=move || input.with(|input| input.employee_id.clone())
                    on:change=move |ev| form.set_employee(event_target_value(&ev))
                >
                    <option value="">"Select Employee"</option>
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id
                        children=move |employee| view! {
                            <option value=employee.id.to_string()>
                                {format!("{} ({})", employee.full_name, employee.employee_id)}
                            </option>
                        }
                    />
                </select>
                {move || employee_error.get().map(|message| view! {
                    <span class="mt-1 block text-xs text-status-error-text">{message}</span>
                })}
            </div>
            <div>
                <label for="attendance_date" class="block text-sm font-medium text-fg">"Date *"</label>
                <input
                    type="date"
                    id="attendance_date"
                    name="attendance_date"
                    class=control_class(date_error)
                    prop:value=move || input.with(|input| input.attendance_date.clone())
                    on:input=move |ev| form.set_date(event_target_value(&ev))
                />
                {move || date_error.get().map(|message| view! {
                    <span class="mt-1 block text-xs text-status-error-text">{message}</span>
                })}
            </div>
            <div>
                <label for="attendance_status" class="block text-sm font-medium text-fg">"Status *"</label>
                <select
                    id="attendance_status"
                    name="status"
                    class=format!("{CONTROL} border-form-control-border")
                    prop:value=move || input.with(|input| input.status.as_str())
                    on:change=move |ev| form.set_status(&event_target_value(&ev))
                >
                    {AttendanceStatus::ALL
                        .iter()
                        .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            <Button attr:type="submit" loading=saving>
                {move || if saving.get() { "Marking..." } else { "Mark Attendance" }}
            </Button>
        </form>
    }
}

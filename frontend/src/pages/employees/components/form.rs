use crate::{
    api::DEPARTMENTS,
    components::common::Button,
    pages::employees::utils::{EmployeeField, EmployeeFormState},
};
use leptos::*;

const INPUT: &str = "mt-1 block w-full rounded-md border px-3 py-2 text-sm shadow-sm bg-form-control-bg text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{INPUT} border-status-error-border")
    } else {
        format!("{INPUT} border-form-control-border")
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <span class="mt-1 block text-xs text-status-error-text">{message}</span> })
    }
}

#[component]
fn TextField(
    form: EmployeeFormState,
    field: EmployeeField,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let value = form.value(field);
    let error = form.error(field);
    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-fg">{label}</label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                placeholder=placeholder
                class=move || input_class(error.with(Option::is_some))
                prop:value=move || value.get()
                on:input=move |ev| form.set_field(field, event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn EmployeeForm(
    form: EmployeeFormState,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let department = form.value(EmployeeField::Department);
    let department_error = form.error(EmployeeField::Department);

    view! {
        <form
            class="space-y-4"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <TextField form=form field=EmployeeField::EmployeeId label="Employee ID *" input_type="text" placeholder="e.g., EMP001" />
            <TextField form=form field=EmployeeField::FullName label="Full Name *" input_type="text" placeholder="e.g., John Doe" />
            <TextField form=form field=EmployeeField::Email label="Email Address *" input_type="email" placeholder="e.g., john@example.com" />
            <div>
                <label for="department" class="block text-sm font-medium text-fg">"Department *"</label>
                <select
                    id="department"
                    name="department"
                    class=move || input_class(department_error.with(Option::is_some))
                    prop:value=move || department.get()
                    on:change=move |ev| form.set_field(EmployeeField::Department, event_target_value(&ev))
                >
                    <option value="">"Select Department"</option>
                    {DEPARTMENTS
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect_view()}
                </select>
                <FieldError error=department_error />
            </div>
            <Button attr:type="submit" loading=saving>
                {move || if saving.get() { "Saving..." } else { "Add Employee" }}
            </Button>
        </form>
    }
}

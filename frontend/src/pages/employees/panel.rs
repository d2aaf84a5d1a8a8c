use crate::{
    components::{
        cards::Card,
        common::Button,
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner, PageHeader, SuccessMessage},
        modal::Modal,
    },
    pages::employees::{
        components::{EmployeeForm, EmployeeTable},
        utils::delete_prompt,
        view_model::use_employees_view_model,
    },
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let status = vm.status;
    let employees = vm.directory.employees;
    let loading = vm.directory.loading;
    let deleting = vm.deleting;
    let pending_delete = vm.pending_delete;
    let show_form = vm.show_form;
    let saving = vm.add_action.pending();
    let form = vm.form;

    let on_open = {
        let vm = vm.clone();
        move |_| vm.open_form()
    };
    let on_open_empty = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.open_form())
    };
    let on_close = {
        let vm = vm.clone();
        Callback::new(move |_| vm.close_form())
    };
    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| vm.submit())
    };
    let on_delete = {
        let vm = vm.clone();
        Callback::new(move |employee| vm.request_delete(employee))
    };
    let on_confirm = {
        let vm = vm.clone();
        Callback::new(move |_| vm.confirm_delete())
    };
    let on_cancel = {
        let vm = vm.clone();
        Callback::new(move |_| vm.cancel_delete())
    };
    let on_dismiss = Callback::new(move |_| status.update(|state| state.dismiss()));

    let title = Signal::derive(move || format!("Employees ({})", employees.with(Vec::len)));
    let prompt = Signal::derive(move || {
        pending_delete.with(|employee| {
            employee
                .as_ref()
                .map(|employee| delete_prompt(&employee.full_name))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="space-y-6">
            <PageHeader
                title="Employee Management"
                subtitle="Manage your organization's employee directory"
                actions=view! { <Button on:click=on_open>"+ Add New Employee"</Button> }.into_view()
            />
            {move || status.with(|state| state.error().map(str::to_string)).map(|message| view! {
                <ErrorMessage message=message on_dismiss=on_dismiss />
            })}
            {move || status.with(|state| state.success().map(str::to_string)).map(|message| view! {
                <SuccessMessage message=message on_dismiss=on_dismiss />
            })}
            <Card title=title>
                {move || {
                    if loading.get() {
                        view! { <LoadingSpinner /> }.into_view()
                    } else if employees.with(Vec::is_empty) {
                        view! {
                            <EmptyState
                                title="No Employees Found"
                                description="Get started by adding your first employee to the system."
                                action=view! {
                                    <Button on:click=move |_| on_open_empty.call(())>"+ Add Employee"</Button>
                                }
                                .into_view()
                            />
                        }
                        .into_view()
                    } else {
                        view! {
                            <EmployeeTable employees=employees deleting=deleting on_delete=on_delete />
                        }
                        .into_view()
                    }
                }}
            </Card>
            <Modal is_open=show_form title="Add New Employee" on_close=on_close>
                <EmployeeForm form=form saving=saving on_submit=on_submit />
            </Modal>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Employee"
                message=prompt
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_label="Delete"
                destructive=true
            />
        </div>
    }
}

use crate::{
    components::{
        cards::Card,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner, PageHeader, SuccessMessage},
    },
    pages::attendance::{
        components::{AttendanceForm, AttendanceSummary, AttendanceTable, RecordsFilter},
        view_model::use_attendance_view_model,
    },
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let status = vm.status;
    let employees = vm.directory.employees;
    let board_state = vm.board.state;
    let loading = vm.board.loading;
    let range_error = vm.range_error;
    let stats = vm.stats;
    let form = vm.form;
    let filter_form = vm.filter_form;
    let marking = vm.mark_action.pending();

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| vm.submit())
    };
    let on_employee = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.select_employee(value))
    };
    let on_apply = {
        let vm = vm.clone();
        Callback::new(move |_| vm.apply_filter())
    };
    let on_clear = {
        let vm = vm.clone();
        Callback::new(move |_| vm.clear_range())
    };
    let on_dismiss = {
        let vm = vm.clone();
        Callback::new(move |_| vm.dismiss())
    };

    let total_employees = Signal::derive(move || employees.with(Vec::len));
    let records = Signal::derive(move || board_state.with(|state| state.records.clone()));

    view! {
        <div class="space-y-6">
            <PageHeader title="Attendance Management" subtitle="Track and manage employee attendance" />
            {move || status.with(|state| state.error().map(str::to_string)).map(|message| view! {
                <ErrorMessage message=message on_dismiss=on_dismiss />
            })}
            {move || status.with(|state| state.success().map(str::to_string)).map(|message| view! {
                <SuccessMessage message=message on_dismiss=on_dismiss />
            })}
            <AttendanceSummary stats=stats total_employees=total_employees />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <Card title="Mark Attendance" class="lg:col-span-1">
                    {move || {
                        if employees.with(Vec::is_empty) {
                            view! {
                                <EmptyState
                                    title="No Employees"
                                    description="Add employees first before marking attendance."
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <AttendanceForm
                                    form=form
                                    employees=employees
                                    saving=marking
                                    on_submit=on_submit
                                />
                            }
                            .into_view()
                        }
                    }}
                </Card>
                <Card title="Attendance Records" class="lg:col-span-2">
                    <div class="space-y-4">
                        <RecordsFilter
                            filter=filter_form
                            employees=employees
                            range_error=range_error
                            on_employee=on_employee
                            on_apply=on_apply
                            on_clear=on_clear
                        />
                        {move || {
                            if loading.get() {
                                view! { <LoadingSpinner /> }.into_view()
                            } else if records.with(Vec::is_empty) {
                                view! {
                                    <EmptyState
                                        title="No Attendance Records"
                                        description="No attendance records found. Start marking attendance."
                                    />
                                }
                                .into_view()
                            } else {
                                view! { <AttendanceTable records=records /> }.into_view()
                            }
                        }}
                    </div>
                </Card>
            </div>
        </div>
    }
}

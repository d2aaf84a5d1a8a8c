use super::{repository::EmployeesRepository, utils::EmployeeFormState};
use crate::{
    api::{ApiClient, Employee, EmployeeDraft},
    state::{
        employees::{use_employee_directory, EmployeeDirectory},
        request_status::{show_success, RequestStatus},
        sync::MutationOutcome,
    },
};
use leptos::*;
use std::collections::BTreeSet;
use std::rc::Rc;

pub const ADDED_MESSAGE: &str = "Employee added successfully";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

#[derive(Clone)]
pub struct EmployeesViewModel {
    pub directory: EmployeeDirectory,
    pub form: EmployeeFormState,
    pub show_form: RwSignal<bool>,
    pub status: RwSignal<RequestStatus>,
    /// Rows with a delete request in flight.
    pub deleting: RwSignal<BTreeSet<i64>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub add_action: Action<EmployeeDraft, MutationOutcome<Employee, ()>>,
    pub delete_action: Action<Employee, (Employee, MutationOutcome<bool, ()>)>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = EmployeesRepository::new_with_client(Rc::new(api));
        let directory = use_employee_directory();

        let repo_for_add = repository.clone();
        let directory_for_add = directory.clone();
        let add_action = create_action(move |draft: &EmployeeDraft| {
            let repo = repo_for_add.clone();
            let directory = directory_for_add.clone();
            let draft = draft.clone();
            async move { repo.add_employee(draft, &directory).await }
        });

        let repo_for_delete = repository.clone();
        let directory_for_delete = directory.clone();
        let delete_action = create_action(move |employee: &Employee| {
            let repo = repo_for_delete.clone();
            let directory = directory_for_delete.clone();
            let employee = employee.clone();
            async move {
                let outcome = repo.delete_employee(employee.id, &directory).await;
                (employee, outcome)
            }
        });

        let vm = Self {
            directory,
            form: EmployeeFormState::new(),
            show_form: create_rw_signal(false),
            status: create_rw_signal(RequestStatus::default()),
            deleting: create_rw_signal(BTreeSet::new()),
            pending_delete: create_rw_signal(None),
            add_action,
            delete_action,
        };

        // Effects
        {
            let vm = vm.clone();
            create_effect(move |_| {
                if let Some(outcome) = add_action.value().get() {
                    vm.apply_add_outcome(outcome);
                }
            });
        }
        {
            let vm = vm.clone();
            create_effect(move |_| {
                if let Some((employee, outcome)) = delete_action.value().get() {
                    vm.apply_delete_outcome(&employee, outcome);
                }
            });
        }

        vm
    }

    pub fn open_form(&self) {
        self.show_form.set(true);
    }

    pub fn close_form(&self) {
        self.show_form.set(false);
        self.form.reset();
    }

    /// Validates and dispatches the create; invalid input never reaches the
    /// network.
    pub fn submit(&self) {
        if self.add_action.pending().get_untracked() {
            return;
        }
        if let Ok(draft) = self.form.validate() {
            self.status.update(|state| state.begin());
            self.add_action.dispatch(draft);
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(employee) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        if self.is_deleting(employee.id) {
            return;
        }
        self.deleting.update(|ids| {
            ids.insert(employee.id);
        });
        self.status.update(|state| state.dismiss());
        self.delete_action.dispatch(employee);
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.with_untracked(|ids| ids.contains(&id))
    }

    pub fn apply_add_outcome(&self, outcome: MutationOutcome<Employee, ()>) {
        match outcome {
            MutationOutcome::Settled { written, .. } => {
                log::info!("Created employee {} ({})", written.employee_id, written.id);
                self.close_form();
                show_success(self.status, ADDED_MESSAGE.to_string());
            }
            MutationOutcome::ReloadFailed { written, error } => {
                log::info!("Created employee {} ({})", written.employee_id, written.id);
                log::error!("Failed to reload employees: {}", error);
                self.close_form();
                self.status.update(|state| state.fail(error.message()));
            }
            MutationOutcome::WriteFailed(error) => {
                log::error!("Failed to create employee: {}", error);
                self.status.update(|state| state.fail(error.message()));
            }
        }
    }

    pub fn apply_delete_outcome(&self, employee: &Employee, outcome: MutationOutcome<bool, ()>) {
        self.deleting.update(|ids| {
            ids.remove(&employee.id);
        });
        match outcome {
            MutationOutcome::Settled { .. } => {
                log::info!("Deleted employee {} ({})", employee.employee_id, employee.id);
                show_success(self.status, DELETED_MESSAGE.to_string());
            }
            MutationOutcome::ReloadFailed { error, .. } => {
                log::info!("Deleted employee {} ({})", employee.employee_id, employee.id);
                log::error!("Failed to reload employees: {}", error);
                self.status.update(|state| state.fail(error.message()));
            }
            MutationOutcome::WriteFailed(error) => {
                log::error!("Failed to delete employee {}: {}", employee.id, error);
                self.status.update(|state| state.fail(error.message()));
            }
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

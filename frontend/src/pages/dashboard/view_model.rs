use super::repository::DashboardRepository;
use crate::{
    api::{ApiClient, Employee},
    state::{
        attendance::{AttendanceBoard, AttendanceStats},
        employees::{use_employee_directory, EmployeeDirectory},
        request_status::RequestStatus,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardViewModel {
    pub directory: EmployeeDirectory,
    pub board: AttendanceBoard,
    pub status: RwSignal<RequestStatus>,
    pub stats: Signal<AttendanceStats>,
    pub total_employees: Signal<usize>,
    pub stats_resource: Resource<Vec<Employee>, ()>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = DashboardRepository::new_with_client(Rc::new(api));
        let directory = use_employee_directory();
        let board = AttendanceBoard::new();
        let status = create_rw_signal(RequestStatus::default());

        let employees = directory.employees;
        let board_for_resource = board.clone();
        // Any change to the employee list re-reads attendance.
        let stats_resource = create_resource(
            move || employees.get(),
            move |_| {
                let repo = repository.clone();
                let board = board_for_resource.clone();
                async move {
                    status.update(|state| state.begin());
                    match repo.refresh_attendance(&board).await {
                        Ok(()) => status.set(RequestStatus::Idle),
                        Err(err) => {
                            log::error!("Failed to load dashboard attendance: {}", err);
                            status.update(|state| state.fail(err.message()));
                        }
                    }
                }
            },
        );

        let stats = board.stats();
        let total_employees = Signal::derive(move || employees.with(Vec::len));

        Self {
            directory,
            board,
            status,
            stats,
            total_employees,
            stats_resource,
        }
    }

    pub fn dismiss_error(&self) -> Callback<()> {
        let status = self.status;
        Callback::new(move |_| status.update(|state| state.dismiss()))
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

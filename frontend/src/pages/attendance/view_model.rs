use super::{
    repository::AttendanceRepository,
    utils::{parse_employee_choice, AttendanceFormState, FilterFormState},
};
use crate::{
    api::{ApiClient, AttendanceDraft, AttendanceRecord},
    state::{
        attendance::{AttendanceBoard, AttendanceFilter, AttendanceStats},
        employees::{use_employee_directory, EmployeeDirectory},
        request_status::{show_success, RequestStatus},
        sync::MutationOutcome,
    },
};
use leptos::*;
use std::rc::Rc;

pub const MARKED_MESSAGE: &str = "Attendance marked successfully";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordsQuery {
    pub filter: AttendanceFilter,
    pub token: u32,
}

impl RecordsQuery {
    pub fn with_filter(self, filter: AttendanceFilter) -> Self {
        Self {
            filter,
            token: self.token.wrapping_add(1),
        }
    }
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub directory: EmployeeDirectory,
    pub board: AttendanceBoard,
    pub form: AttendanceFormState,
    pub filter_form: FilterFormState,
    pub query: RwSignal<RecordsQuery>,
    pub status: RwSignal<RequestStatus>,
    pub range_error: RwSignal<Option<String>>,
    pub stats: Signal<AttendanceStats>,
    pub records_resource: Resource<RecordsQuery, ()>,
    pub mark_action: Action<AttendanceDraft, MutationOutcome<AttendanceRecord, ()>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = AttendanceRepository::new_with_client(Rc::new(api));
        let directory = use_employee_directory();
        let board = AttendanceBoard::new();
        let status = create_rw_signal(RequestStatus::default());
        let query = create_rw_signal(RecordsQuery::default());

        let repo_for_records = repository.clone();
        let board_for_records = board.clone();
        let records_resource = create_resource(
            move || query.get(),
            move |query| {
                let repo = repo_for_records.clone();
                let board = board_for_records.clone();
                async move {
                    if let Err(err) = repo.fetch_records(&board, &query.filter).await {
                        log::error!("Failed to load attendance records: {}", err);
                        status.update(|state| state.fail(err.message()));
                    }
                }
            },
        );

        let repo_for_mark = repository.clone();
        let board_for_mark = board.clone();
        let mark_action = create_action(move |draft: &AttendanceDraft| {
            let repo = repo_for_mark.clone();
            let board = board_for_mark.clone();
            let draft = draft.clone();
            async move {
                repo.mark_attendance(draft, &board, move || query.get_untracked().filter)
                    .await
            }
        });

        let stats = board.stats();
        let vm = Self {
            directory,
            board,
            form: AttendanceFormState::new(),
            filter_form: FilterFormState::new(),
            query,
            status,
            range_error: create_rw_signal(None),
            stats,
            records_resource,
            mark_action,
        };

        {
            let vm = vm.clone();
            create_effect(move |_| {
                if let Some(outcome) = mark_action.value().get() {
                    vm.apply_mark_outcome(outcome);
                }
            });
        }

        vm
    }

    /// Re-reads records using the filter controls; a reversed date range is
    /// rejected without a request.
    pub fn apply_filter(&self) {
        match self.filter_form.to_filter() {
            Ok(filter) => {
                self.range_error.set(None);
                self.query.update(|query| *query = query.with_filter(filter));
            }
            Err(err) => self.range_error.set(Some(err)),
        }
    }

    /// Always refetches for the chosen employee. A reversed range typed in
    /// the date inputs is reported and the last applied range is kept.
    pub fn select_employee(&self, value: String) {
        let employee_id = parse_employee_choice(&value);
        self.filter_form.employee.set(value);
        let filter = match self.filter_form.to_filter() {
            Ok(filter) => {
                self.range_error.set(None);
                filter
            }
            Err(err) => {
                self.range_error.set(Some(err));
                AttendanceFilter {
                    employee_id,
                    ..self.query.get_untracked().filter
                }
            }
        };
        self.query.update(|query| *query = query.with_filter(filter));
    }

    pub fn clear_range(&self) {
        self.filter_form.clear_range();
        self.apply_filter();
    }

    pub fn submit(&self) {
        if self.mark_action.pending().get_untracked() {
            return;
        }
        if let Ok(draft) = self.form.validate() {
            self.status.update(|state| state.begin());
            self.mark_action.dispatch(draft);
        }
    }

    pub fn apply_mark_outcome(&self, outcome: MutationOutcome<AttendanceRecord, ()>) {
        match outcome {
            MutationOutcome::Settled { written, .. } => {
                log::info!(
                    "Marked employee {} {} on {}",
                    written.employee_id,
                    written.status,
                    written.attendance_date
                );
                show_success(self.status, MARKED_MESSAGE.to_string());
            }
            MutationOutcome::ReloadFailed { error, .. } => {
                log::error!("Failed to reload attendance records: {}", error);
                self.status.update(|state| state.fail(error.message()));
            }
            MutationOutcome::WriteFailed(error) => {
                log::error!("Failed to mark attendance: {}", error);
                self.status.update(|state| state.fail(error.message()));
            }
        }
    }

    pub fn dismiss(&self) {
        self.status.update(|state| state.dismiss());
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

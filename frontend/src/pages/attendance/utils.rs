use crate::{
    api::{AttendanceDraft, AttendanceStatus},
    state::attendance::AttendanceFilter,
    validation::{attendance_draft, validate_date_range, AttendanceFormInput, FormErrors},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceFormState {
    pub input: RwSignal<AttendanceFormInput>,
    pub errors: RwSignal<FormErrors>,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceFormState {
    pub fn new() -> Self {
        Self {
            input: create_rw_signal(AttendanceFormInput::default()),
            errors: create_rw_signal(FormErrors::new()),
        }
    }

    pub fn set_employee(&self, value: String) {
        self.input.update(|input| input.employee_id = value);
        self.clear_error("employee_id");
    }

    pub fn set_date(&self, value: String) {
        self.input.update(|input| input.attendance_date = value);
        self.clear_error("attendance_date");
    }

    pub fn set_status(&self, value: &str) {
        if let Some(status) = AttendanceStatus::parse(value) {
            self.input.update(|input| input.status = status);
        }
    }

    fn clear_error(&self, field: &str) {
        if self.errors.with_untracked(|errors| errors.contains(field)) {
            self.errors.update(|errors| errors.clear_field(field));
        }
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
    }

    /// Input is left as typed either way; the form is not cleared after a
    /// successful mark.
    pub fn validate(&self) -> Result<AttendanceDraft, FormErrors> {
        let result = self.input.with_untracked(attendance_draft);
        match &result {
            Ok(_) => self.errors.set(FormErrors::new()),
            Err(errors) => self.errors.set(errors.clone()),
        }
        result
    }
}

/// Raw values of the record filter controls.
#[derive(Clone, Copy)]
pub struct FilterFormState {
    pub employee: RwSignal<String>,
    pub from: RwSignal<String>,
    pub to: RwSignal<String>,
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterFormState {
    pub fn new() -> Self {
        Self {
            employee: create_rw_signal(String::new()),
            from: create_rw_signal(String::new()),
            to: create_rw_signal(String::new()),
        }
    }

    pub fn clear_range(&self) {
        self.from.set(String::new());
        self.to.set(String::new());
    }

    pub fn to_filter(&self) -> Result<AttendanceFilter, String> {
        let (from, to) = validate_date_range(&self.from.get_untracked(), &self.to.get_untracked())?;
        Ok(AttendanceFilter {
            employee_id: parse_employee_choice(&self.employee.get_untracked()),
            from,
            to,
        })
    }
}

/// Blank selects all employees.
pub fn parse_employee_choice(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_choice_parsing() {
        assert_eq!(parse_employee_choice(""), None);
        assert_eq!(parse_employee_choice("7"), Some(7));
        assert_eq!(parse_employee_choice("x"), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;

    #[test]
    fn form_validation_is_field_scoped() {
        with_runtime(|| {
            let form = AttendanceFormState::new();
            let errors = form.validate().unwrap_err();
            assert!(errors.contains("employee_id"));
            assert!(errors.contains("attendance_date"));

            form.set_employee("3".into());
            assert!(form.error("employee_id").get().is_none());
            assert_eq!(form.error("attendance_date").get().as_deref(), Some("Date is required"));
        });
    }

    #[test]
    fn valid_form_yields_numeric_draft_and_keeps_input() {
        with_runtime(|| {
            let form = AttendanceFormState::new();
            form.set_employee("3".into());
            form.set_date("2026-02-05".into());
            form.set_status("Absent");
            let draft = form.validate().unwrap();
            assert_eq!(draft.employee_id, 3);
            assert_eq!(draft.status, AttendanceStatus::Absent);
            assert_eq!(form.input.get().employee_id, "3");
        });
    }

    #[test]
    fn unknown_status_is_ignored() {
        with_runtime(|| {
            let form = AttendanceFormState::new();
            form.set_status("Late");
            assert_eq!(form.input.get().status, AttendanceStatus::Present);
        });
    }

    #[test]
    fn filter_form_builds_filter_or_rejects_range() {
        with_runtime(|| {
            let filter = FilterFormState::new();
            assert_eq!(filter.to_filter().unwrap(), AttendanceFilter::all());

            filter.employee.set("4".into());
            filter.from.set("2026-02-01".into());
            let built = filter.to_filter().unwrap();
            assert_eq!(built.employee_id, Some(4));
            assert_eq!(built.from, NaiveDate::from_ymd_opt(2026, 2, 1));

            filter.to.set("2026-01-01".into());
            assert_eq!(
                filter.to_filter().unwrap_err(),
                "Start date must be on or before end date"
            );

            filter.clear_range();
            assert_eq!(filter.to_filter().unwrap(), AttendanceFilter::for_employee(Some(4)));
        });
    }
}

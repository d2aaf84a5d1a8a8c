use crate::{
    api::EmployeeDraft,
    validation::{validate_employee, FormErrors},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FullName => "full_name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }

    fn write(&self, draft: &mut EmployeeDraft, value: String) {
        match self {
            EmployeeField::EmployeeId => draft.employee_id = value,
            EmployeeField::FullName => draft.full_name = value,
            EmployeeField::Email => draft.email = value,
            EmployeeField::Department => draft.department = value,
        }
    }

    pub fn read(&self, draft: &EmployeeDraft) -> String {
        match self {
            EmployeeField::EmployeeId => draft.employee_id.clone(),
            EmployeeField::FullName => draft.full_name.clone(),
            EmployeeField::Email => draft.email.clone(),
            EmployeeField::Department => draft.department.clone(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    pub draft: RwSignal<EmployeeDraft>,
    pub errors: RwSignal<FormErrors>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self {
            draft: create_rw_signal(EmployeeDraft::default()),
            errors: create_rw_signal(FormErrors::new()),
        }
    }

    /// Updates one field and clears only that field's error.
    pub fn set_field(&self, field: EmployeeField, value: String) {
        self.draft.update(|draft| field.write(draft, value));
        if self.errors.with_untracked(|errors| errors.contains(field.name())) {
            self.errors.update(|errors| errors.clear_field(field.name()));
        }
    }

    pub fn value(&self, field: EmployeeField) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|draft| field.read(draft)))
    }

    pub fn error(&self, field: EmployeeField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errors| errors.get(field.name()).map(str::to_string)))
    }

    /// Returns the draft when it passes validation; otherwise records the
    /// field errors and leaves the input as typed.
    pub fn validate(&self) -> Result<EmployeeDraft, FormErrors> {
        let draft = self.draft.get_untracked();
        let errors = validate_employee(&draft);
        if errors.is_empty() {
            self.errors.set(FormErrors::new());
            Ok(draft)
        } else {
            self.errors.set(errors.clone());
            Err(errors)
        }
    }

    pub fn reset(&self) {
        self.draft.set(EmployeeDraft::default());
        self.errors.set(FormErrors::new());
    }
}

pub fn delete_prompt(full_name: &str) -> String {
    format!("Are you sure you want to delete {}?", full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_validation_keys() {
        let errors = validate_employee(&EmployeeDraft::default());
        for field in [
            EmployeeField::EmployeeId,
            EmployeeField::FullName,
            EmployeeField::Email,
            EmployeeField::Department,
        ] {
            assert!(errors.contains(field.name()), "{}", field.name());
        }
    }

    #[test]
    fn delete_prompt_names_the_employee() {
        assert_eq!(
            delete_prompt("John Doe"),
            "Are you sure you want to delete John Doe?"
        );
    }
}

//! Pre-submission checks for the employee and attendance forms.
//!
//! Validators never touch the network and never mutate their input; an empty
//! [`FormErrors`] means the draft may be submitted.

pub mod rules;

pub use rules::*;

use crate::api::AttendanceStatus;
use std::collections::BTreeMap;

/// Field name to message, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clears one field's message, leaving the others in place.
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Raw attendance form values as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFormInput {
    pub employee_id: String,
    pub attendance_date: String,
    pub status: AttendanceStatus,
}

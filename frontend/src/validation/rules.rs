//! Field rules shared by the employee and attendance forms.

use super::{AttendanceFormInput, FormErrors};
use crate::api::{AttendanceDraft, EmployeeDraft};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|regex| regex.is_match(value))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_employee(draft: &EmployeeDraft) -> FormErrors {
    let mut errors = FormErrors::new();
    if is_blank(&draft.employee_id) {
        errors.insert("employee_id", "Employee ID is required");
    }
    if is_blank(&draft.full_name) {
        errors.insert("full_name", "Full Name is required");
    }
    if is_blank(&draft.email) {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&draft.email) {
        errors.insert("email", "Invalid email format");
    }
    if is_blank(&draft.department) {
        errors.insert("department", "Department is required");
    }
    errors
}

pub fn validate_attendance(input: &AttendanceFormInput) -> FormErrors {
    attendance_draft(input).err().unwrap_or_default()
}

/// Validates the form and coerces the selected employee to its numeric id.
pub fn attendance_draft(input: &AttendanceFormInput) -> Result<AttendanceDraft, FormErrors> {
    let mut errors = FormErrors::new();

    let employee_id = if is_blank(&input.employee_id) {
        errors.insert("employee_id", "Employee is required");
        None
    } else {
        match input.employee_id.trim().parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors.insert("employee_id", "Invalid employee selection");
                None
            }
        }
    };

    let attendance_date = if is_blank(&input.attendance_date) {
        errors.insert("attendance_date", "Date is required");
        None
    } else {
        match parse_date(&input.attendance_date) {
            Some(date) => Some(date),
            None => {
                errors.insert("attendance_date", "Date must be in YYYY-MM-DD format");
                None
            }
        }
    };

    match (employee_id, attendance_date) {
        (Some(employee_id), Some(attendance_date)) if errors.is_empty() => Ok(AttendanceDraft {
            employee_id,
            attendance_date,
            status: input.status,
        }),
        _ => Err(errors),
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Optional `from`/`to` filter bounds; blank means unbounded.
pub fn validate_date_range(
    from: &str,
    to: &str,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), String> {
    let from = parse_optional_date(from, "Start date must be in YYYY-MM-DD format")?;
    let to = parse_optional_date(to, "End date must be in YYYY-MM-DD format")?;
    if let (Some(f), Some(t)) = (from, to) {
        if f > t {
            return Err("Start date must be on or before end date".into());
        }
    }
    Ok((from, to))
}

fn parse_optional_date(value: &str, error_message: &str) -> Result<Option<NaiveDate>, String> {
    if is_blank(value) {
        return Ok(None);
    }
    parse_date(value).map(Some).ok_or_else(|| error_message.into())
}

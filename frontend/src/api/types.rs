use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "HR",
    "Sales",
    "Marketing",
    "Finance",
    "Operations",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub attendance_date: NaiveDate,
    /// Kept verbatim so values outside Present/Absent still render.
    pub status: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AttendanceRecord {
    pub fn has_status(&self, status: AttendanceStatus) -> bool {
        self.status == status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDraft {
    pub employee_id: i64,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub employee_id: Option<i64>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none() && self.from_date.is_none() && self.to_date.is_none()
    }

    /// Only the parameters that are set; unset ones never reach the URL.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(employee_id) = self.employee_id {
            params.push(("employee_id", employee_id.to_string()));
        }
        if let Some(from) = self.from_date {
            params.push(("from_date", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to_date {
            params.push(("to_date", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_deserializes_without_timestamps() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "employee_id": "EMP007",
            "full_name": "Jane Roe",
            "email": "jane@example.com",
            "department": "HR"
        }))
        .unwrap();
        assert_eq!(employee.id, 7);
        assert!(employee.created_at.is_none());
    }

    #[test]
    fn attendance_create_response_defaults_employee_name() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1,
            "employee_id": 3,
            "attendance_date": "2026-02-05",
            "status": "Present",
            "created_at": "2026-02-05T10:00:00"
        }))
        .unwrap();
        assert_eq!(record.employee_name, "");
        assert!(record.has_status(AttendanceStatus::Present));
        assert!(!record.has_status(AttendanceStatus::Absent));
    }

    #[test]
    fn attendance_draft_serializes_numeric_employee_id() {
        let draft = AttendanceDraft {
            employee_id: 12,
            attendance_date: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
            status: AttendanceStatus::Absent,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({ "employee_id": 12, "attendance_date": "2026-02-05", "status": "Absent" })
        );
    }

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(AttendanceStatus::parse("Absent"), Some(AttendanceStatus::Absent));
        assert_eq!(AttendanceStatus::parse("present"), None);
    }

    #[test]
    fn query_params_skip_unset_fields() {
        let query = AttendanceQuery {
            employee_id: None,
            from_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            to_date: None,
        };
        assert_eq!(query.to_params(), vec![("from_date", "2026-01-01".to_string())]);
        assert!(AttendanceQuery::default().to_params().is_empty());
        assert!(AttendanceQuery::default().is_empty());
    }
}

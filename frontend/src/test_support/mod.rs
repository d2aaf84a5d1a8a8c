#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, Employee};
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    pub fn employee(id: i64, full_name: &str) -> Employee {
        Employee {
            id,
            employee_id: format!("EMP{id:03}"),
            full_name: full_name.into(),
            email: format!("emp{id}@example.com"),
            department: "Engineering".into(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn employee_json(id: i64, full_name: &str) -> Value {
        json!({
            "id": id,
            "employee_id": format!("EMP{id:03}"),
            "full_name": full_name,
            "email": format!("emp{id}@example.com"),
            "department": "Engineering",
            "created_at": "2026-02-05T10:00:00"
        })
    }

    pub fn record(id: i64, employee_id: i64, status: &str) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id,
            attendance_date: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap_or_default(),
            status: status.into(),
            employee_name: format!("Employee {employee_id}"),
            employee_email: None,
            created_at: None,
        }
    }

    pub fn record_json(id: i64, employee_id: i64, date: &str, status: &str) -> Value {
        json!({
            "id": id,
            "employee_id": employee_id,
            "attendance_date": date,
            "status": status,
            "employee_name": format!("Employee {employee_id}"),
            "employee_email": format!("emp{employee_id}@example.com")
        })
    }
}

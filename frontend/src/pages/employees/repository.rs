use crate::{
    api::{ApiClient, Employee, EmployeeDraft},
    state::{
        employees::EmployeeDirectory,
        sync::{mutate_then_reload, MutationOutcome},
    },
};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Creates the employee, then re-reads the directory from the server.
    pub async fn add_employee(
        &self,
        draft: EmployeeDraft,
        directory: &EmployeeDirectory,
    ) -> MutationOutcome<Employee, ()> {
        mutate_then_reload(self.client.create_employee(&draft), || {
            directory.refresh(&self.client)
        })
        .await
    }

    pub async fn delete_employee(
        &self,
        id: i64,
        directory: &EmployeeDirectory,
    ) -> MutationOutcome<bool, ()> {
        mutate_then_reload(self.client.delete_employee(id), || {
            directory.refresh(&self.client)
        })
        .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use leptos::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::{
        helpers::{employee, employee_json},
        ssr::with_runtime_async,
    };
    use serde_json::json;

    fn repository(server: &MockServer) -> EmployeesRepository {
        EmployeesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url(""))))
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            employee_id: "EMP003".into(),
            full_name: "Sam Lee".into(),
            email: "sam@example.com".into(),
            department: "Sales".into(),
        }
    }

    #[tokio::test]
    async fn add_replaces_directory_with_server_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(201).json_body(employee_json(3, "Sam Lee"));
        });
        // The server's list differs from anything the client could splice.
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([
                employee_json(1, "John Doe"),
                employee_json(3, "Sam Lee")
            ]));
        });
        let repo = repository(&server);

        with_runtime_async(|| async move {
            let directory = EmployeeDirectory::new();
            directory.employees.set(vec![employee(2, "Jane Roe")]);
            let outcome = repo.add_employee(draft(), &directory).await;
            assert!(matches!(outcome, MutationOutcome::Settled { ref written, .. } if written.id == 3));
            let ids: Vec<i64> = directory.employees.get_untracked().iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![1, 3]);
        })
        .await;

        let methods: Vec<_> = server.received().into_iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![POST, GET]);
    }

    #[tokio::test]
    async fn rejected_add_does_not_reload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(400)
                .json_body(json!({ "detail": "Email already exists" }));
        });
        let repo = repository(&server);

        let outcome = with_runtime_async(|| async move {
            let directory = EmployeeDirectory::new();
            directory.employees.set(vec![employee(1, "John Doe")]);
            let outcome = repo.add_employee(draft(), &directory).await;
            assert_eq!(directory.employees.get_untracked().len(), 1);
            outcome
        })
        .await;

        assert_eq!(
            outcome.error().map(|e| e.message()),
            Some("Email already exists".to_string())
        );
        assert_eq!(server.hits(GET, "/api/employees"), 0);
    }

    #[tokio::test]
    async fn delete_then_reload_drops_the_row() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/1");
            then.status(204).body("");
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([employee_json(2, "Jane Roe")]));
        });
        let repo = repository(&server);

        with_runtime_async(|| async move {
            let directory = EmployeeDirectory::new();
            directory
                .employees
                .set(vec![employee(1, "John Doe"), employee(2, "Jane Roe")]);
            let outcome = repo.delete_employee(1, &directory).await;
            assert!(outcome.error().is_none());
            let ids: Vec<i64> = directory.employees.get_untracked().iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![2]);
        })
        .await;
    }

    #[tokio::test]
    async fn deleting_unknown_id_leaves_list_unchanged() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/9");
            then.status(404)
                .json_body(json!({ "detail": "Employee with ID 9 not found." }));
        });
        let repo = repository(&server);

        with_runtime_async(|| async move {
            let directory = EmployeeDirectory::new();
            directory.employees.set(vec![employee(1, "John Doe")]);
            let outcome = repo.delete_employee(9, &directory).await;
            assert!(!outcome.write_succeeded());
            assert_eq!(
                outcome.error().map(|e| e.message()).as_deref(),
                Some("Employee with ID 9 not found.")
            );
            assert_eq!(directory.employees.get_untracked().len(), 1);
        })
        .await;
    }

    #[tokio::test]
    async fn reload_failure_after_successful_write_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/employees/1");
            then.status(204).body("");
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.unreachable("connection reset");
        });
        let repo = repository(&server);

        with_runtime_async(|| async move {
            let directory = EmployeeDirectory::new();
            directory.employees.set(vec![employee(1, "John Doe")]);
            let outcome = repo.delete_employee(1, &directory).await;
            assert!(outcome.write_succeeded());
            assert!(matches!(outcome, MutationOutcome::ReloadFailed { .. }));
            assert_eq!(directory.employees.get_untracked().len(), 1);
        })
        .await;
    }
}

use crate::api::{ApiClient, Employee, RequestError};
use crate::state::sync::{FetchSequencer, FetchToken};
use leptos::*;

/// The application's cached copy of the employee list.
///
/// Loaded once when the shell mounts and replaced wholesale after every
/// employee write. Pages read it through context.
#[derive(Clone)]
pub struct EmployeeDirectory {
    pub employees: RwSignal<Vec<Employee>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    sequencer: FetchSequencer,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self {
            employees: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            sequencer: FetchSequencer::new(),
        }
    }

    pub fn begin_fetch(&self) -> FetchToken {
        self.loading.set(true);
        self.sequencer.next()
    }

    /// Applies a fetched list if `token` is still the newest fetch.
    /// A failure leaves the cached list untouched and is handed back.
    pub fn finish_fetch(
        &self,
        token: FetchToken,
        result: Result<Vec<Employee>, RequestError>,
    ) -> Result<(), RequestError> {
        if !self.sequencer.is_current(token) {
            log::warn!("Discarding stale employee list response");
            return Ok(());
        }
        self.loading.set(false);
        match result {
            Ok(employees) => {
                self.employees.set(employees);
                self.error.set(None);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Fetches and applies the full list, returning any request failure.
    pub async fn refresh(&self, api: &ApiClient) -> Result<(), RequestError> {
        let token = self.begin_fetch();
        let result = api.list_employees().await;
        self.finish_fetch(token, result)
    }

    /// Start-up load; a failure is kept in [`Self::error`] for the shell.
    pub fn load(&self, api: ApiClient) {
        let directory = self.clone();
        spawn_local(async move {
            if let Err(err) = directory.refresh(&api).await {
                log::error!("Failed to load employees from {}: {}", err.url(), err);
                directory.error.set(Some(err.message()));
            }
        });
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_employee_directory() -> EmployeeDirectory {
    let directory = EmployeeDirectory::new();
    provide_context(directory.clone());
    directory
}

pub fn use_employee_directory() -> EmployeeDirectory {
    match use_context::<EmployeeDirectory>() {
        Some(directory) => directory,
        None => provide_employee_directory(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn newest_fetch_replaces_the_list() {
        with_runtime(|| {
            let directory = EmployeeDirectory::new();
            let token = directory.begin_fetch();
            assert!(directory.loading.get());
            directory
                .finish_fetch(token, Ok(vec![employee(1, "John Doe")]))
                .unwrap();
            assert!(!directory.loading.get());
            assert_eq!(directory.employees.get()[0].full_name, "John Doe");
        });
    }

    #[test]
    fn stale_response_is_discarded() {
        with_runtime(|| {
            let directory = EmployeeDirectory::new();
            let stale = directory.begin_fetch();
            let fresh = directory.begin_fetch();
            directory
                .finish_fetch(fresh, Ok(vec![employee(2, "Jane Roe")]))
                .unwrap();
            directory
                .finish_fetch(stale, Ok(vec![employee(1, "John Doe")]))
                .unwrap();
            let ids: Vec<i64> = directory.employees.get().iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![2]);
        });
    }

    #[test]
    fn failed_fetch_keeps_previous_list() {
        with_runtime(|| {
            let directory = EmployeeDirectory::new();
            directory.employees.set(vec![employee(1, "John Doe")]);
            let token = directory.begin_fetch();
            let err = directory
                .finish_fetch(
                    token,
                    Err(RequestError::transport("http://localhost:8000/api/employees", "offline")),
                )
                .unwrap_err();
            assert!(err.message().contains("offline"));
            assert_eq!(directory.employees.get().len(), 1);
            assert!(!directory.loading.get());
        });
    }

    #[test]
    fn successful_fetch_clears_startup_error() {
        with_runtime(|| {
            let directory = EmployeeDirectory::new();
            directory.error.set(Some("Unable to reach http://localhost:8000/api/employees: offline".into()));
            let token = directory.begin_fetch();
            directory
                .finish_fetch(token, Ok(vec![employee(1, "John Doe")]))
                .unwrap();
            assert_eq!(directory.error.get(), None);
        });
    }

    #[test]
    fn use_employee_directory_reuses_context() {
        with_runtime(|| {
            let provided = provide_employee_directory();
            provided.employees.set(vec![employee(3, "Sam Lee")]);
            assert_eq!(use_employee_directory().employees.get().len(), 1);
        });
    }
}

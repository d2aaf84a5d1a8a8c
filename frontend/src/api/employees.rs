use super::{
    client::ApiClient,
    error::RequestError,
    types::{Employee, EmployeeDraft},
};

impl ApiClient {
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee, RequestError> {
        let url = self.endpoint("/api/employees").await;
        let response = self
            .send(self.http_client().post(&url).json(draft), &url)
            .await?;
        Self::read_json(response, &url, "Failed to create employee").await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, RequestError> {
        let url = self.endpoint("/api/employees").await;
        let response = self.send(self.http_client().get(&url), &url).await?;
        Self::read_json(response, &url, "Failed to fetch employees").await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, RequestError> {
        let url = self.endpoint(&format!("/api/employees/{}", id)).await;
        let response = self.send(self.http_client().get(&url), &url).await?;
        Self::read_json(response, &url, "Failed to fetch employee").await
    }

    /// The collaborator answers `204 No Content`, so success carries no body.
    pub async fn delete_employee(&self, id: i64) -> Result<bool, RequestError> {
        let url = self.endpoint(&format!("/api/employees/{}", id)).await;
        let response = self.send(self.http_client().delete(&url), &url).await?;
        let response = Self::ensure_success(response, &url, "Failed to delete employee").await?;
        Ok(response.status().is_success())
    }
}

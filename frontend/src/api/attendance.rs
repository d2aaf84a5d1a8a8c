use super::{
    client::ApiClient,
    error::RequestError,
    types::{AttendanceDraft, AttendanceQuery, AttendanceRecord},
};

const LIST_FALLBACK: &str = "Failed to fetch attendance records";

impl ApiClient {
    pub async fn create_attendance(
        &self,
        draft: &AttendanceDraft,
    ) -> Result<AttendanceRecord, RequestError> {
        let url = self.endpoint("/api/attendance").await;
        let response = self
            .send(self.http_client().post(&url).json(draft), &url)
            .await?;
        Self::read_json(response, &url, "Failed to mark attendance").await
    }

    pub async fn list_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, RequestError> {
        let url = self.endpoint("/api/attendance").await;
        let params = query.to_params();
        let mut request = self.http_client().get(&url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        let response = self.send(request, &url).await?;
        Self::read_json(response, &url, LIST_FALLBACK).await
    }

    pub async fn list_attendance_by_employee(
        &self,
        employee_id: i64,
    ) -> Result<Vec<AttendanceRecord>, RequestError> {
        let url = self
            .endpoint(&format!("/api/attendance/employee/{}", employee_id))
            .await;
        let response = self.send(self.http_client().get(&url), &url).await?;
        Self::read_json(response, &url, LIST_FALLBACK).await
    }
}

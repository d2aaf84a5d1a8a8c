use crate::{
    api::{ApiClient, AttendanceDraft, AttendanceRecord, RequestError},
    state::{
        attendance::{AttendanceBoard, AttendanceFilter},
        sync::{mutate_then_reload, MutationOutcome},
    },
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_records(
        &self,
        board: &AttendanceBoard,
        filter: &AttendanceFilter,
    ) -> Result<(), RequestError> {
        board.refresh(&self.client, filter).await
    }

    /// Marks attendance, then re-reads with whatever filter is active once
    /// the write has been acknowledged.
    pub async fn mark_attendance<F>(
        &self,
        draft: AttendanceDraft,
        board: &AttendanceBoard,
        active_filter: F,
    ) -> MutationOutcome<AttendanceRecord, ()>
    where
        F: FnOnce() -> AttendanceFilter,
    {
        mutate_then_reload(self.client.create_attendance(&draft), || async move {
            let filter = active_filter();
            board.refresh(&self.client, &filter).await
        })
        .await
    }
}

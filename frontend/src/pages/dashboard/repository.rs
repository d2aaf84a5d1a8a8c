use crate::{
    api::{ApiClient, RequestError},
    state::attendance::{AttendanceBoard, AttendanceFilter},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// The dashboard always counts over the unfiltered record set.
    pub async fn refresh_attendance(&self, board: &AttendanceBoard) -> Result<(), RequestError> {
        board.refresh(&self.client, &AttendanceFilter::all()).await
    }
}

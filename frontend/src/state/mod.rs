pub mod attendance;
pub mod employees;
pub mod request_status;
pub mod sync;

pub mod filter;
pub mod form;
pub mod summary;
pub mod table;

pub use filter::RecordsFilter;
pub use form::AttendanceForm;
pub use summary::AttendanceSummary;
pub use table::AttendanceTable;

pub mod form;
pub mod table;

pub use form::EmployeeForm;
pub use table::EmployeeTable;

pub mod overview;
pub mod summary;

pub use overview::{QuickLinks, SystemInfo};
pub use summary::SummarySection;

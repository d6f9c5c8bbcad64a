pub mod filters;
pub mod raw_data;
pub mod report;
pub mod session;

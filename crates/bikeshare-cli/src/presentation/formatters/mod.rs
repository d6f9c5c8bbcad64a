pub mod number;
pub mod table;

pub use number::{format_elapsed, format_minutes};
pub use table::format_rows;

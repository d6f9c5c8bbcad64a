//! Shared vocabulary for the bikeshare explorer: the closed option sets,
//! the dataset registry and the per-iteration filter selection.

pub mod error;
pub mod options;
pub mod registry;
pub mod selection;

pub use error::{Error, Result};
pub use options::{
    ALL, CITIES, City, MONTHS, Month, OptionSets, WEEKDAYS, Weekday, YES_NO, month_name,
    weekday_name,
};
pub use registry::{CITY_DATA, DatasetRegistry};
pub use selection::{FilterSelection, OptionalField};

//! Read-only aggregates over a filtered [`TripTable`](crate::TripTable).
//!
//! Every function here returns `None` (or an empty breakdown) for an empty
//! table instead of aggregating nothing.

mod duration;
mod frequency;
mod station;
mod time;
mod user;

pub use duration::{DurationStats, duration_stats};
pub use frequency::{Popular, most_frequent, value_counts};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{BirthYearStats, OptionalStat, UserStats, user_stats};

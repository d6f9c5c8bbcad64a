//! Loading and summarising bike-share trip tables.
//!
//! [`loader`] turns a city's CSV source into a [`TripTable`] with derived
//! calendar columns and applies the month/day filters. [`stats`] holds the
//! read-only aggregates computed over a filtered table.

pub mod error;
pub mod loader;
pub mod stats;

pub use error::{Error, Result};
pub use loader::{Trip, TripTable, load_data, parse_timestamp};
pub use stats::{
    BirthYearStats, DurationStats, OptionalStat, Popular, StationStats, TimeStats, UserStats,
    duration_stats, most_frequent, station_stats, time_stats, user_stats, value_counts,
};

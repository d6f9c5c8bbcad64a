use crate::error::{Error, Result};
use bikeshare_types::{DatasetRegistry, FilterSelection, Month, OptionalField, Weekday};
use chrono::{Datelike, NaiveDateTime, Timelike};
use csv::StringRecord;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";

const REQUIRED_COLUMNS: [&str; 5] = [START_TIME, END_TIME, START_STATION, END_STATION, USER_TYPE];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a source timestamp (`YYYY-MM-DD HH:MM:SS`, optional fraction or `T`).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

#[derive(Debug, Deserialize)]
struct TripRecord {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// One trip, with calendar columns derived from its start time.
#[derive(Debug, Clone)]
pub struct Trip {
    /// 0-based row position in the source file; survives filtering.
    pub position: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// 1..=12
    pub month: u32,
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: u32,
    raw: StringRecord,
}

impl Trip {
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn duration_minutes(&self) -> f64 {
        let seconds = (self.end_time - self.start_time).num_milliseconds() as f64 / 1000.0;
        seconds / 60.0
    }

    /// Cells exactly as they appear in the source row.
    pub fn raw_fields(&self) -> impl Iterator<Item = &str> {
        self.raw.iter()
    }
}

/// Row-oriented trip table for a single city.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    columns: Vec<String>,
    trips: Vec<Trip>,
    optional: BTreeSet<OptionalField>,
}

impl TripTable {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Read a CSV source. `source_name` is only used in diagnostics.
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn {
                    source_name: source_name.to_string(),
                    column,
                });
            }
        }

        let optional: BTreeSet<OptionalField> = OptionalField::ALL
            .into_iter()
            .filter(|field| headers.iter().any(|h| h == field.column_name()))
            .collect();

        let mut trips = Vec::new();
        for (position, result) in reader.records().enumerate() {
            let raw = result?;
            let record: TripRecord = raw.deserialize(Some(&headers))?;
            let trip = build_trip(position, record, raw)?;
            for field in empty_optional_cells(&trip, &optional) {
                tracing::trace!(
                    row = position,
                    field = field.column_name(),
                    "empty optional cell"
                );
            }
            trips.push(trip);
        }

        tracing::debug!(
            source = source_name,
            rows = trips.len(),
            optional = ?optional,
            "loaded trip table"
        );

        Ok(Self {
            columns: headers.iter().map(str::to_string).collect(),
            trips,
            optional,
        })
    }

    /// Keep only trips in `month` and on `weekday`; `None` keeps everything.
    /// Row order is preserved.
    pub fn filter(mut self, month: Option<Month>, weekday: Option<Weekday>) -> Self {
        let before = self.trips.len();
        if let Some(month) = month {
            self.trips.retain(|t| t.month == month.number());
        }
        if let Some(weekday) = weekday {
            self.trips.retain(|t| t.day_of_week == weekday.index());
        }
        tracing::debug!(
            before,
            after = self.trips.len(),
            month = ?month,
            weekday = ?weekday,
            "filtered trip table"
        );
        self
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Rows `[start, start + len)`, clamped to the table.
    pub fn chunk(&self, start: usize, len: usize) -> &[Trip] {
        let start = start.min(self.trips.len());
        let end = start.saturating_add(len).min(self.trips.len());
        &self.trips[start..end]
    }

    /// Source column names, in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether this table's source provides the optional column.
    pub fn has(&self, field: OptionalField) -> bool {
        self.optional.contains(&field)
    }
}

fn build_trip(position: usize, record: TripRecord, raw: StringRecord) -> Result<Trip> {
    let start_time = timestamp(position, START_TIME, &record.start_time)?;
    let end_time = timestamp(position, END_TIME, &record.end_time)?;

    Ok(Trip {
        position,
        month: start_time.month(),
        day_of_week: start_time.weekday().num_days_from_monday(),
        start_time,
        end_time,
        start_station: record.start_station,
        end_station: record.end_station,
        user_type: record.user_type,
        gender: record.gender,
        birth_year: record.birth_year,
        raw,
    })
}

/// Optional columns the source provides but this trip leaves blank.
fn empty_optional_cells(trip: &Trip, present: &BTreeSet<OptionalField>) -> Vec<OptionalField> {
    present
        .iter()
        .copied()
        .filter(|field| match field {
            OptionalField::Gender => trip.gender.is_none(),
            OptionalField::BirthYear => trip.birth_year.is_none(),
        })
        .collect()
}

fn timestamp(row: usize, column: &'static str, value: &str) -> Result<NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| Error::InvalidTimestamp {
        row,
        column,
        value: value.to_string(),
    })
}

/// Load the selected city's trips and apply the month/day filters.
pub fn load_data(registry: &DatasetRegistry, selection: &FilterSelection) -> Result<TripTable> {
    let path = registry.path_for(selection.city);
    tracing::debug!(city = %selection.city, path = %path.display(), "loading city data");
    let table = TripTable::from_path(&path)?;
    Ok(table.filter(selection.month, selection.weekday))
}

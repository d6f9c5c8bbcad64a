//! Closed option sets offered to the user.
//!
//! The first entry of [`MONTHS`] and [`WEEKDAYS`] is always the [`ALL`]
//! sentinel; the remaining positions double as calendar indices
//! (months 1-based, weekdays 0-based from Monday).

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Sentinel meaning "no filter".
pub const ALL: &str = "all";

pub const CITIES: &[&str] = &["chicago", "new york city", "washington"];

pub const MONTHS: &[&str] = &[
    ALL, "january", "february", "march", "april", "may", "june",
];

pub const WEEKDAYS: &[&str] = &[
    ALL,
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const YES_NO: &[&str] = &["yes", "no"];

/// The answer lists each prompt offers, handed to the components that ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSets {
    pub cities: &'static [&'static str],
    pub months: &'static [&'static str],
    pub weekdays: &'static [&'static str],
    pub yes_no: &'static [&'static str],
}

impl OptionSets {
    pub const STANDARD: OptionSets = OptionSets {
        cities: CITIES,
        months: MONTHS,
        weekdays: WEEKDAYS,
        yes_no: YES_NO,
    };
}

impl Default for OptionSets {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Full calendar, used to name derived months outside the filterable range.
const CALENDAR_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Lowercase name of a 1-based calendar month.
pub fn month_name(month: u32) -> Option<&'static str> {
    CALENDAR_MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// Lowercase name of a 0-based (Monday = 0) day of week.
pub fn weekday_name(day_of_week: u32) -> Option<&'static str> {
    WEEKDAYS.get(day_of_week as usize + 1).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        City::ALL
            .into_iter()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| Error::UnknownOption {
                kind: "city",
                value: s.to_string(),
            })
    }
}

/// A month that can be selected as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn as_str(&self) -> &'static str {
        MONTHS[self.number() as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MONTHS[1..]
            .iter()
            .position(|name| *name == s)
            .map(|idx| Month::ALL[idx])
            .ok_or_else(|| Error::UnknownOption {
                kind: "month",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 0-based index, Monday = 0.
    pub fn index(&self) -> u32 {
        *self as u32
    }

    pub fn as_str(&self) -> &'static str {
        WEEKDAYS[self.index() as usize + 1]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        WEEKDAYS[1..]
            .iter()
            .position(|name| *name == s)
            .map(|idx| Weekday::ALL[idx])
            .ok_or_else(|| Error::UnknownOption {
                kind: "day of week",
                value: s.to_string(),
            })
    }
}

use crate::error::Result;
use crate::options::{ALL, City, Month, Weekday};
use std::fmt;

/// Optional columns that not every city's source provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionalField {
    Gender,
    BirthYear,
}

impl OptionalField {
    pub const ALL: [OptionalField; 2] = [OptionalField::Gender, OptionalField::BirthYear];

    pub fn column_name(&self) -> &'static str {
        match self {
            OptionalField::Gender => "Gender",
            OptionalField::BirthYear => "Birth Year",
        }
    }
}

/// City plus month/day filters chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    /// `None` means all months.
    pub month: Option<Month>,
    /// `None` means all days.
    pub weekday: Option<Weekday>,
}

impl FilterSelection {
    /// Build a selection from option-set answers (`"all"` disables a filter).
    pub fn from_answers(city: &str, month: &str, weekday: &str) -> Result<Self> {
        Ok(Self {
            city: city.parse()?,
            month: if month == ALL {
                None
            } else {
                Some(month.parse()?)
            },
            weekday: if weekday == ALL {
                None
            } else {
                Some(weekday.parse()?)
            },
        })
    }

    pub fn month_label(&self) -> &'static str {
        self.month.map(|m| m.as_str()).unwrap_or(ALL)
    }

    pub fn weekday_label(&self) -> &'static str {
        self.weekday.map(|d| d.as_str()).unwrap_or(ALL)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}', month:{}, day_of_week:{}",
            self.city,
            self.month_label(),
            self.weekday_label()
        )
    }
}

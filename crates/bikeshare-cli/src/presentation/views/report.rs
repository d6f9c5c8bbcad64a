use super::RULE;
use crate::presentation::Style;
use crate::presentation::formatters::{format_elapsed, format_minutes};
use bikeshare_engine::{
    BirthYearStats, DurationStats, OptionalStat, StationStats, TimeStats, UserStats,
};
use bikeshare_types::{month_name, weekday_name};
use std::fmt;
use std::time::Duration;

const NO_DATA: &str = "  . no trips match the selected filters";

pub struct ReportTitleView<'a> {
    pub title: &'a str,
    pub style: Style,
}

impl fmt::Display for ReportTitleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}\n", self.style.heading(self.title))
    }
}

pub struct ElapsedView {
    pub elapsed: Duration,
}

impl fmt::Display for ElapsedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nThis took {} seconds.", format_elapsed(self.elapsed))?;
        writeln!(f, "{}", RULE)
    }
}

pub struct TimeStatsView<'a> {
    pub stats: Option<&'a TimeStats>,
    pub style: Style,
}

impl fmt::Display for TimeStatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(stats) = self.stats else {
            return writeln!(f, "{}", NO_DATA);
        };
        let s = self.style;

        let month = stats.month.value;
        writeln!(
            f,
            "  . the most common month is {} ({})",
            s.value(month),
            month_name(month).unwrap_or("?")
        )?;
        writeln!(
            f,
            "  . the most common day-of-week is {}",
            s.value(weekday_name(stats.day_of_week.value).unwrap_or("?"))
        )?;
        writeln!(
            f,
            "  . the most common start-hour is {}",
            s.value(stats.start_hour.value)
        )
    }
}

pub struct StationStatsView<'a> {
    pub stats: Option<&'a StationStats>,
    pub style: Style,
}

impl fmt::Display for StationStatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(stats) = self.stats else {
            return writeln!(f, "{}", NO_DATA);
        };
        let s = self.style;

        writeln!(
            f,
            "  . the most commonly used start station is '{}'",
            s.value(&stats.start_station.value)
        )?;
        writeln!(
            f,
            "  . the most commonly used end station is '{}'",
            s.value(&stats.end_station.value)
        )?;
        writeln!(
            f,
            "  . the most frequent combination of start- and end-station trip is '{}'",
            s.value(&stats.trip.value)
        )
    }
}

pub struct DurationStatsView<'a> {
    pub stats: Option<&'a DurationStats>,
    pub style: Style,
}

impl fmt::Display for DurationStatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(stats) = self.stats else {
            return writeln!(f, "{}", NO_DATA);
        };
        let s = self.style;

        writeln!(
            f,
            "  . the travel time ranges from {}[min] to {}[min]",
            s.value(format_minutes(stats.min_minutes)),
            s.value(format_minutes(stats.max_minutes))
        )?;
        writeln!(
            f,
            "  . the mean travel time is {}[min]",
            s.value(format_minutes(stats.mean_minutes))
        )
    }
}

pub struct UserStatsView<'a> {
    pub stats: Option<&'a UserStats>,
    pub style: Style,
}

impl UserStatsView<'_> {
    fn write_counts(&self, f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
        let width = counts.iter().map(|(v, _)| v.chars().count()).max().unwrap_or(0);
        for (value, count) in counts {
            writeln!(
                f,
                "   \\ {:width$}    {}",
                value,
                self.style.value(count),
                width = width
            )?;
        }
        Ok(())
    }

    fn write_birth_years(&self, f: &mut fmt::Formatter<'_>, years: &BirthYearStats) -> fmt::Result {
        let s = self.style;
        writeln!(f, "  . the earliest year of birth is {}", s.value(years.earliest))?;
        writeln!(
            f,
            "  . the most recent year of birth is {}",
            s.value(years.most_recent)
        )?;
        writeln!(
            f,
            "  . the most common year of birth is {}",
            s.value(years.most_common)
        )
    }
}

impl fmt::Display for UserStatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(stats) = self.stats else {
            return writeln!(f, "{}", NO_DATA);
        };

        writeln!(f, "  . counts of user types:")?;
        self.write_counts(f, &stats.user_types)?;

        writeln!(f)?;
        match &stats.genders {
            OptionalStat::Available(counts) => {
                writeln!(f, "  . counts of gender:")?;
                self.write_counts(f, counts)?;
            }
            OptionalStat::NoValues => {
                writeln!(f, "  . no gender values for the selected filters")?;
            }
            OptionalStat::Unavailable => {
                writeln!(f, "  . gender data is unavailable for this city")?;
            }
        }

        writeln!(f)?;
        match &stats.birth_years {
            OptionalStat::Available(years) => self.write_birth_years(f, years),
            OptionalStat::NoValues => {
                writeln!(f, "  . no birth year values for the selected filters")
            }
            OptionalStat::Unavailable => {
                writeln!(f, "  . birth year data is unavailable for this city")
            }
        }
    }
}

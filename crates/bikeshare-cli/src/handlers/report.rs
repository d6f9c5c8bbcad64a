//! Statistics reporters. Each prints a title, its aggregates and its own
//! wall-clock time; an empty table prints a no-data notice instead.

use crate::presentation::views::{
    DurationStatsView, ElapsedView, ReportTitleView, StationStatsView, TimeStatsView,
    UserStatsView,
};
use crate::ui::Console;
use bikeshare_engine::{TripTable, duration_stats, station_stats, time_stats, user_stats};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::time::Instant;

fn report<R, W, V, F>(console: &mut Console<R, W>, title: &str, body: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    V: Display,
    F: FnOnce() -> V,
{
    console.print(ReportTitleView {
        title,
        style: console.style(),
    })?;
    let started = Instant::now();
    console.print(body())?;
    console.print(ElapsedView {
        elapsed: started.elapsed(),
    })
}

pub fn time_stats_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> io::Result<()> {
    let style = console.style();
    report(
        console,
        "Calculating The Most Frequent Times of Travel...",
        || {
            let stats = time_stats(table);
            TimeStatsView {
                stats: stats.as_ref(),
                style,
            }
            .to_string()
        },
    )
}

pub fn station_stats_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> io::Result<()> {
    let style = console.style();
    report(
        console,
        "Calculating The Most Popular Stations and Trip...",
        || {
            let stats = station_stats(table);
            StationStatsView {
                stats: stats.as_ref(),
                style,
            }
            .to_string()
        },
    )
}

pub fn trip_duration_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> io::Result<()> {
    let style = console.style();
    report(console, "Calculating Trip Duration...", || {
        let stats = duration_stats(table);
        DurationStatsView {
            stats: stats.as_ref(),
            style,
        }
        .to_string()
    })
}

pub fn user_stats_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> io::Result<()> {
    let style = console.style();
    report(console, "Calculating User Stats...", || {
        let stats = (!table.is_empty()).then(|| user_stats(table));
        UserStatsView {
            stats: stats.as_ref(),
            style,
        }
        .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Style;

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-06 08:00:00,2017-03-06 08:10:00,600,Lincoln Memorial,Jefferson Dr,Subscriber
1,2017-03-13 08:30:00,2017-03-13 08:50:00,1200,Lincoln Memorial,Jefferson Dr,Customer
";

    fn run_all(table: &TripTable) -> String {
        let mut console = Console::new(&b""[..], Vec::new(), Style::plain());
        time_stats_report(&mut console, table).unwrap();
        station_stats_report(&mut console, table).unwrap();
        trip_duration_report(&mut console, table).unwrap();
        user_stats_report(&mut console, table).unwrap();
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_reports_on_city_without_demographics() {
        let table = TripTable::from_reader(WASHINGTON.as_bytes(), "washington").unwrap();
        let out = run_all(&table);

        assert!(out.contains("Calculating The Most Frequent Times of Travel..."));
        assert!(out.contains("the most common month is 3 (march)"));
        assert!(out.contains("the most common day-of-week is monday"));
        assert!(out.contains("the most common start-hour is 8"));
        assert!(out.contains("start station is 'Lincoln Memorial'"));
        assert!(out.contains("trip is 'from Lincoln Memorial to Jefferson Dr'"));
        assert!(out.contains("ranges from 10.0[min] to 20.0[min]"));
        assert!(out.contains("the mean travel time is 15.0[min]"));
        assert!(out.contains("gender data is unavailable for this city"));
        assert!(out.contains("birth year data is unavailable for this city"));
        assert_eq!(out.matches("This took ").count(), 4);
    }

    #[test]
    fn test_empty_table_prints_no_data_notices() {
        let table = TripTable::from_reader(WASHINGTON.as_bytes(), "washington")
            .unwrap()
            .filter(Some(bikeshare_types::Month::June), None);
        let out = run_all(&table);
        assert_eq!(out.matches("no trips match the selected filters").count(), 4);
        assert_eq!(out.matches("This took ").count(), 4);
    }
}

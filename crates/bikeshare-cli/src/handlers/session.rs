use super::{filters, raw_data, report};
use crate::presentation::views::RestartQuestionView;
use crate::ui::{AbortReason, Console, PromptOutcome};
use anyhow::{Context, Result};
use bikeshare_engine::load_data;
use bikeshare_types::{DatasetRegistry, OptionSets};
use std::io::{BufRead, Write};

/// How a session ended. Both variants are clean exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user declined to restart.
    Finished,
    Aborted(AbortReason),
}

/// Only a case-insensitive `yes` restarts.
pub fn wants_restart(answer: &str) -> bool {
    answer.to_lowercase() == "yes"
}

pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &DatasetRegistry,
    options: &OptionSets,
) -> Result<SessionEnd> {
    loop {
        let selection = match filters::get_filters(console, options)? {
            PromptOutcome::Selected(selection) => selection,
            PromptOutcome::Aborted(reason) => return Ok(SessionEnd::Aborted(reason)),
        };
        tracing::info!(%selection, "running reports");

        let table = load_data(registry, &selection)
            .with_context(|| format!("Failed to load trip data for {}", selection.city))?;

        report::time_stats_report(console, &table)?;
        report::station_stats_report(console, &table)?;
        report::trip_duration_report(console, &table)?;
        report::user_stats_report(console, &table)?;

        if let PromptOutcome::Aborted(reason) = raw_data::display_raw_data(console, &table, options)? {
            return Ok(SessionEnd::Aborted(reason));
        }

        console.print(RestartQuestionView)?;
        let answer = console.read_line()?.unwrap_or_default();
        if !wants_restart(&answer) {
            return Ok(SessionEnd::Finished);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Style;
    use std::fs;
    use tempfile::TempDir;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-03-06 08:00:00,2017-03-06 08:10:00,600,Clark St,Canal St,Subscriber,Male,1990.0
1,2017-03-07 09:00:00,2017-03-07 09:20:00,1200,Clark St,Canal St,Customer,,
2,2017-01-02 10:00:00,2017-01-02 10:05:00,300,Canal St,Clark St,Subscriber,Female,1985.0
";

    fn registry() -> (TempDir, DatasetRegistry) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chicago.csv"), CHICAGO).unwrap();
        let registry = DatasetRegistry::new(dir.path());
        (dir, registry)
    }

    fn session(input: &str) -> (Result<SessionEnd>, String) {
        let (_dir, registry) = registry();
        let mut console = Console::new(input.as_bytes(), Vec::new(), Style::plain());
        let end = run_session(&mut console, &registry, &OptionSets::STANDARD);
        let output = String::from_utf8(console.output().clone()).unwrap();
        (end, output)
    }

    #[test]
    fn test_wants_restart() {
        assert!(wants_restart("yes"));
        assert!(wants_restart("YeS"));
        assert!(!wants_restart("y"));
        assert!(!wants_restart(""));
        assert!(!wants_restart("no"));
    }

    #[test]
    fn test_single_pass_runs_every_report() {
        let (end, output) = session("1\nmarch\nall\nno\nno\n");
        assert_eq!(end.unwrap(), SessionEnd::Finished);

        let order = [
            "your selection: 'chicago', month:march, day_of_week:all",
            "Calculating The Most Frequent Times of Travel...",
            "Calculating The Most Popular Stations and Trip...",
            "Calculating Trip Duration...",
            "Calculating User Stats...",
            "Would you like to see 5 entries of the raw data?",
            "Would you like to restart? Enter yes or no.",
        ];
        let positions: Vec<usize> = order.iter().map(|s| output.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(output.contains("the most common month is 3 (march)"));
        assert!(output.contains("ranges from 10.0[min] to 20.0[min]"));
        assert!(output.contains("the earliest year of birth is 1990"));
    }

    #[test]
    fn test_restart_runs_another_iteration() {
        let (end, output) = session("chicago\nall\nall\nno\nYES\nchicago\nall\nmonday\nno\nnope\n");
        assert_eq!(end.unwrap(), SessionEnd::Finished);
        assert_eq!(output.matches("Hello! Let's explore").count(), 2);
        assert!(output.contains("your selection: 'chicago', month:all, day_of_week:monday"));
    }

    #[test]
    fn test_end_of_input_at_restart_finishes() {
        let (end, _) = session("chicago\nall\nall\nno\n");
        assert_eq!(end.unwrap(), SessionEnd::Finished);
    }

    #[test]
    fn test_abort_is_a_clean_outcome() {
        let (end, output) = session("chicago\n99\n0\n");
        assert_eq!(end.unwrap(), SessionEnd::Aborted(AbortReason::Requested));
        assert!(!output.contains("Calculating"));
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let (end, _) = session("washington\nall\nall\n");
        let err = end.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load trip data for washington"));
    }
}

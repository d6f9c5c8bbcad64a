use super::frequency::{most_frequent, value_counts};
use crate::loader::TripTable;
use bikeshare_types::OptionalField;

/// A statistic over an optional column.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionalStat<T> {
    /// The source has no such column.
    Unavailable,
    /// The column exists but every remaining cell is empty.
    NoValues,
    Available(T),
}

/// Birth years, rounded to the nearest integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: OptionalStat<Vec<(String, usize)>>,
    pub birth_years: OptionalStat<BirthYearStats>,
}

/// Empty cells are treated as missing values and never counted.
pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = table.trips();

    let user_types = owned_counts(value_counts(
        trips.iter().filter_map(|t| t.user_type.as_deref()),
    ));

    let genders = if table.has(OptionalField::Gender) {
        let counts = owned_counts(value_counts(
            trips.iter().filter_map(|t| t.gender.as_deref()),
        ));
        if counts.is_empty() {
            OptionalStat::NoValues
        } else {
            OptionalStat::Available(counts)
        }
    } else {
        OptionalStat::Unavailable
    };

    let birth_years = if table.has(OptionalField::BirthYear) {
        birth_year_stats(trips.iter().filter_map(|t| t.birth_year))
            .map(OptionalStat::Available)
            .unwrap_or(OptionalStat::NoValues)
    } else {
        OptionalStat::Unavailable
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn birth_year_stats(years: impl Iterator<Item = f64> + Clone) -> Option<BirthYearStats> {
    let earliest = years.clone().reduce(f64::min)?;
    let most_recent = years.clone().reduce(f64::max)?;
    let most_common = most_frequent(years.map(|y| y.round() as i64))?;

    Some(BirthYearStats {
        earliest: earliest.round() as i64,
        most_recent: most_recent.round() as i64,
        most_common: most_common.value,
    })
}

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_demographics() {
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type,Gender,Birth Year
2017-03-06 08:00:00,2017-03-06 08:10:00,A,B,Subscriber,Male,1990.0
2017-03-06 09:00:00,2017-03-06 09:10:00,A,B,Customer,,
2017-03-06 10:00:00,2017-03-06 10:10:00,A,B,Subscriber,Female,1961.0
2017-03-06 11:00:00,2017-03-06 11:10:00,A,B,Subscriber,Male,1990.0
2017-03-06 12:00:00,2017-03-06 12:10:00,A,B,,Male,2001.0
";
        let table = TripTable::from_reader(csv.as_bytes(), "t").unwrap();
        let stats = user_stats(&table);

        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            stats.genders,
            OptionalStat::Available(vec![("Male".to_string(), 3), ("Female".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            OptionalStat::Available(BirthYearStats {
                earliest: 1961,
                most_recent: 2001,
                most_common: 1990,
            })
        );
    }

    #[test]
    fn test_missing_columns_are_unavailable() {
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type
2017-03-06 08:00:00,2017-03-06 08:10:00,A,B,Subscriber
";
        let table = TripTable::from_reader(csv.as_bytes(), "t").unwrap();
        let stats = user_stats(&table);
        assert_eq!(stats.user_types, vec![("Subscriber".to_string(), 1)]);
        assert_eq!(stats.genders, OptionalStat::Unavailable);
        assert_eq!(stats.birth_years, OptionalStat::Unavailable);
    }

    #[test]
    fn test_present_but_empty_columns() {
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type,Gender,Birth Year
2017-03-06 08:00:00,2017-03-06 08:10:00,A,B,Subscriber,,
";
        let table = TripTable::from_reader(csv.as_bytes(), "t").unwrap();
        let stats = user_stats(&table);
        assert_eq!(stats.genders, OptionalStat::NoValues);
        assert_eq!(stats.birth_years, OptionalStat::NoValues);
    }
}

use super::frequency::{Popular, most_frequent};
use crate::loader::TripTable;

/// Most frequent travel times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// 1..=12
    pub month: Popular<u32>,
    /// 0 = Monday
    pub day_of_week: Popular<u32>,
    /// 0..=23, from the start time
    pub start_hour: Popular<u32>,
}

pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let trips = table.trips();
    Some(TimeStats {
        month: most_frequent(trips.iter().map(|t| t.month))?,
        day_of_week: most_frequent(trips.iter().map(|t| t.day_of_week))?,
        start_hour: most_frequent(trips.iter().map(|t| t.hour()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popular_times() {
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type
2017-03-06 08:15:00,2017-03-06 08:30:00,A,B,Subscriber
2017-03-13 08:45:00,2017-03-13 09:00:00,A,B,Subscriber
2017-05-10 17:00:00,2017-05-10 17:10:00,A,B,Customer
";
        let table = TripTable::from_reader(csv.as_bytes(), "t").unwrap();
        let stats = time_stats(&table).unwrap();
        assert_eq!(stats.month, Popular { value: 3, count: 2 });
        assert_eq!(stats.day_of_week, Popular { value: 0, count: 2 });
        assert_eq!(stats.start_hour, Popular { value: 8, count: 2 });
    }

    #[test]
    fn test_empty_table_has_no_time_stats() {
        assert_eq!(time_stats(&TripTable::default()), None);
    }
}

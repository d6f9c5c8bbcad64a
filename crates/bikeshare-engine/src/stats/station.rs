use super::frequency::{Popular, most_frequent};
use crate::loader::TripTable;

/// Most popular stations and trip. Station names are trimmed before counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Popular<String>,
    pub end_station: Popular<String>,
    /// Formatted as `from {start} to {end}`.
    pub trip: Popular<String>,
}

pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let trips = table.trips();

    let start_station = most_frequent(trips.iter().map(|t| t.start_station.trim()))?;
    let end_station = most_frequent(trips.iter().map(|t| t.end_station.trim()))?;
    let trip = most_frequent(
        trips
            .iter()
            .map(|t| (t.start_station.trim(), t.end_station.trim())),
    )?;

    Some(StationStats {
        start_station: owned(start_station),
        end_station: owned(end_station),
        trip: Popular {
            value: format!("from {} to {}", trip.value.0, trip.value.1),
            count: trip.count,
        },
    })
}

fn owned(popular: Popular<&str>) -> Popular<String> {
    Popular {
        value: popular.value.to_string(),
        count: popular.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_station_counts() {
        let csv = "\
Start Time,End Time,Start Station,End Station,User Type
2017-03-06 08:00:00,2017-03-06 08:10:00, Clark St ,Lake Shore Dr,Subscriber
2017-03-06 09:00:00,2017-03-06 09:10:00,Clark St,Lake Shore Dr ,Subscriber
2017-03-06 10:00:00,2017-03-06 10:10:00,Canal St,Clark St,Customer
";
        let table = TripTable::from_reader(csv.as_bytes(), "t").unwrap();
        let stats = station_stats(&table).unwrap();
        assert_eq!(stats.start_station.value, "Clark St");
        assert_eq!(stats.start_station.count, 2);
        assert_eq!(stats.end_station.value, "Lake Shore Dr");
        assert_eq!(stats.trip.value, "from Clark St to Lake Shore Dr");
        assert_eq!(stats.trip.count, 2);
    }

    #[test]
    fn test_empty_table_has_no_station_stats() {
        assert_eq!(station_stats(&TripTable::default()), None);
    }
}

use crate::loader::TripTable;

/// Trip duration range and mean, in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub min_minutes: f64,
    pub max_minutes: f64,
    pub mean_minutes: f64,
}

pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut total = 0.0;
    for minutes in table.trips().iter().map(|t| t.duration_minutes()) {
        min = min.min(minutes);
        max = max.max(minutes);
        total += minutes;
    }

    Some(DurationStats {
        min_minutes: min,
        max_minutes: max,
        mean_minutes: total / table.len() as f64,
    })
}

use std::time::Duration;

/// Minutes with one decimal place.
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.1}", minutes)
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes_rounds_to_one_decimal() {
        assert_eq!(format_minutes(15.0), "15.0");
        assert_eq!(format_minutes(1.25 + 0.01), "1.3");
        assert_eq!(format_minutes(0.04), "0.0");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500000");
    }
}

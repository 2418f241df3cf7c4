use chrono::{DateTime, Duration, Utc};

/// Estimated durations are reported to clients in milliseconds.
pub fn seconds_to_millis(seconds: u64) -> u64 {
    seconds.saturating_mul(1000)
}

/// `timestamp + seconds`, or `None` when the result leaves chrono's range.
pub fn add_seconds(timestamp: DateTime<Utc>, seconds: u64) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(seconds_to_millis(seconds)).ok()?;
    timestamp.checked_add_signed(Duration::milliseconds(millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_functions() {
        assert_eq!(seconds_to_millis(0), 0);
        assert_eq!(seconds_to_millis(86_400), 86_400_000);
        assert_eq!(seconds_to_millis(u64::MAX), u64::MAX);

        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = add_seconds(start, 3600).unwrap();
        assert_eq!((later - start).num_milliseconds(), 3_600_000);

        assert!(add_seconds(start, u64::MAX).is_none());
    }
}

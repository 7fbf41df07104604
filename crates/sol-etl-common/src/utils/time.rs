use chrono::{DateTime, Utc};

pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Converts a source timestamp in seconds to microseconds.
///
/// Returns `None` when the result does not fit in an `i64`.
pub fn to_micros(seconds: i64) -> Option<i64> {
    seconds.checked_mul(MICROS_PER_SECOND)
}

pub fn format_micros(micros: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_micros(micros)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_micros() {
        assert_eq!(to_micros(0), Some(0));
        assert_eq!(to_micros(1_700_000_000), Some(1_700_000_000_000_000));
        assert_eq!(to_micros(-1), Some(-1_000_000));
        assert_eq!(to_micros(i64::MAX), None);
        assert_eq!(to_micros(i64::MAX / MICROS_PER_SECOND + 1), None);
    }

    #[test]
    fn test_format_micros() {
        assert_eq!(
            format_micros(1_700_000_000_000_000).as_deref(),
            Some("2023-11-14 22:13:20 UTC")
        );
    }
}

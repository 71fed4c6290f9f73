//! Progress helpers shared by the player views

use std::time::Duration;

/// Position as a percentage of `total`
///
/// Returns 0 when `total` is zero. Not clamped: a clock that overshoots the
/// track length reports more than 100.
pub fn progress_percent(position: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    position.as_secs_f64() / total.as_secs_f64() * 100.0
}

/// Render a duration as `m:ss` (fractional seconds truncated)
pub fn format_time(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_zero_length_is_zero() {
        assert_eq!(progress_percent(Duration::from_secs(5), Duration::ZERO), 0.0);
    }

    #[test]
    fn percent_halfway() {
        let pct = progress_percent(Duration::from_secs(90), Duration::from_secs(180));
        assert!((pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn format_pads_seconds() {
        assert_eq!(format_time(Duration::ZERO), "0:00");
        assert_eq!(format_time(Duration::from_secs(65)), "1:05");
        assert_eq!(format_time(Duration::from_millis(59_999)), "0:59");
        assert_eq!(format_time(Duration::from_secs(3725)), "62:05");
    }
}

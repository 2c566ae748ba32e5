//! Shared formatting utilities for the SensorDash views.

/// Format a numeric value for an axis label with appropriate scale suffix.
///
/// - Values >= 1M display as "X.XM"
/// - Values >= 1K display as "X.XK"
/// - Integer values display without decimal places
/// - Other values display with 2 decimal places
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a Unix timestamp (seconds) as a UTC wall-clock axis label.
pub fn format_clock(timestamp_secs: f64) -> String {
    let secs = timestamp_secs.max(0.0) as u64 % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Format a Unix timestamp (seconds) as a relative time string.
///
/// Returns strings like "just now", "5s ago", "3m ago", "2h ago".
pub fn format_timestamp(timestamp_secs: f64) -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);

    let diff = now - timestamp_secs;

    if diff < 1.0 {
        "just now".to_string()
    } else if diff < 60.0 {
        format!("{}s ago", diff as u64)
    } else if diff < 3600.0 {
        format!("{}m ago", diff as u64 / 60)
    } else {
        format!("{}h ago", diff as u64 / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(3.14159), "3.14");
        assert_eq!(format_value(1500.0), "1.5K");
        assert_eq!(format_value(2500000.0), "2.5M");
        assert_eq!(format_value(-1500.0), "-1.5K");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00:00");
        assert_eq!(format_clock(3661.0), "01:01:01");
        // Wraps at midnight
        assert_eq!(format_clock(86_400.0 + 59.0), "00:00:59");
        assert_eq!(format_clock(86_399.5), "23:59:59");
    }
}

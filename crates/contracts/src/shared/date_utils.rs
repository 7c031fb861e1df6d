/// Utilities for date parsing and relative date formatting
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a date coming from an import file.
///
/// Accepts RFC 3339 ("2024-01-15T00:00:00Z"), "YYYY-MM-DD HH:MM:SS",
/// "YYYY-MM-DD" and "DD.MM.YYYY". Dates without time are taken at UTC midnight.
pub fn parse_flexible_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    ["%Y-%m-%d", "%d.%m.%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Whole days elapsed between `then` and `now` (floor, never negative)
pub fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_days().max(0)
}

/// Compact relative date for table cells
/// Example: "Today", "Yesterday", "3d ago", "2w ago", "Jan 15"
pub fn format_relative_short(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match days_between(then, now) {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{}d ago", d),
        d if d < 30 => format!("{}w ago", d / 7),
        _ => then.format("%b %-d").to_string(),
    }
}

/// Relative date for asset cards
/// Example: "Today", "Yesterday", "3 days ago", "2024-01-15"
pub fn format_relative_long(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match days_between(then, now) {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        _ => then.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        parse_flexible_date(s).unwrap()
    }

    #[test]
    fn test_parse_flexible_date() {
        assert_eq!(at("2024-01-15"), at("2024-01-15T00:00:00Z"));
        assert_eq!(at("15.01.2024"), at("2024-01-15"));
        assert_eq!(
            at("2024-01-15 10:30:00").to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
        assert!(parse_flexible_date("yesterday").is_none());
        assert!(parse_flexible_date("").is_none());
    }

    #[test]
    fn test_format_relative_short() {
        let now = at("2024-02-20T12:00:00Z");
        assert_eq!(format_relative_short(at("2024-02-20"), now), "Today");
        assert_eq!(format_relative_short(at("2024-02-19"), now), "Yesterday");
        assert_eq!(format_relative_short(at("2024-02-16"), now), "4d ago");
        assert_eq!(format_relative_short(at("2024-02-06"), now), "2w ago");
        assert_eq!(format_relative_short(at("2024-01-15"), now), "Jan 15");
    }

    #[test]
    fn test_format_relative_long() {
        let now = at("2024-02-20T12:00:00Z");
        assert_eq!(format_relative_long(at("2024-02-17"), now), "3 days ago");
        assert_eq!(format_relative_long(at("2024-01-15"), now), "2024-01-15");
    }

    #[test]
    fn test_future_dates_count_as_today() {
        let now = at("2024-02-20");
        assert_eq!(days_between(at("2024-03-01"), now), 0);
    }
}

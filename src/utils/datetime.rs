use chrono::{DateTime, FixedOffset, TimeZone};

/// Parses the `datetime` string returned by the remote time API.
///
/// Accepts both a literal `Z` suffix and explicit offset forms
/// (e.g. `2024-01-05T14:30:00Z`, `2024-01-05T14:30:00.123456+03:00`).
pub fn parse_remote_datetime(input: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(input.trim())
}

/// Formats a datetime as a 12-hour clock reading, e.g. "02:30 PM".
pub fn format_clock_12h<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%I:%M %p").to_string()
}

/// Formats a datetime as a calendar date, e.g. "Jan 05, 2024".
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%b %d, %Y").to_string()
}

/// Describes the offset between two zones in whole hours.
///
/// `offset_seconds` is the subject zone's UTC offset minus the reference
/// zone's. Offsets under one hour in either direction read as "Same time";
/// otherwise the count is the floor of the absolute hour difference.
pub fn describe_hour_difference(subject: &str, offset_seconds: i64) -> String {
    let hours = offset_seconds.abs() / 3600;

    if hours == 0 {
        "Same time".to_string()
    } else if offset_seconds > 0 {
        format!("{} is {} hours ahead", subject, hours)
    } else {
        format!("{} is {} hours behind", subject, hours)
    }
}

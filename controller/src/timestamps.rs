use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%d %b %Y %H:%M";
const SQL_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// `created_at` in the viewer's time zone.
pub fn local(raw: &str) -> String {
    format_in(raw, &Local)
}

pub fn format_in<Tz>(raw: &str, tz: &Tz) -> String
    where Tz: TimeZone,
          Tz::Offset: Display
{
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    match parse_utc(raw) {
        Some(utc) => utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // zone-less timestamps are written by the store in UTC
    SQL_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn sql_timestamps_are_utc() {
        assert_eq!(format_in("2024-03-01 09:30:00", &Utc), "01 Mar 2024 09:30");
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_in("2024-03-01 09:30:00", &cet), "01 Mar 2024 10:30");
    }

    #[test]
    fn zoned_timestamps_are_converted() {
        assert_eq!(format_in("2024-03-01T09:30:00+02:00", &Utc), "01 Mar 2024 07:30");
        assert_eq!(format_in("Fri, 01 Mar 2024 09:30:00 GMT", &Utc), "01 Mar 2024 09:30");
    }

    #[test]
    fn unreadable_timestamps_pass_through() {
        assert_eq!(format_in("yesterday", &Utc), "yesterday");
        assert_eq!(format_in("  ", &Utc), "");
    }
}
